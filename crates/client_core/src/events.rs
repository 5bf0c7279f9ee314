//! UI events dispatched to the controller and user-facing error modeling.

use shared::domain::{FeedbackKind, Target};

use crate::error::{ClipboardError, ConvertError};

#[derive(Debug, Clone)]
pub enum UiEvent {
    InputChanged(String),
    TargetSelected(Target),
    SubmitRequested,
    CopyRequested,
    FeedbackGiven(FeedbackKind),
    /// The page is going away; the controller loop stops.
    PageClosed,
    /// Settlement of the conversion call started by an accepted submit.
    ConversionSettled(Result<String, ConvertError>),
    /// Settlement of a clipboard write started by a copy request.
    CopySettled(Result<(), ClipboardError>),
    /// The copy acknowledgment window for `generation` has elapsed.
    CopyAckExpired { generation: u64 },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::InputChanged(_) => "input_changed",
            UiEvent::TargetSelected(_) => "target_selected",
            UiEvent::SubmitRequested => "submit_requested",
            UiEvent::CopyRequested => "copy_requested",
            UiEvent::FeedbackGiven(_) => "feedback_given",
            UiEvent::PageClosed => "page_closed",
            UiEvent::ConversionSettled(_) => "conversion_settled",
            UiEvent::CopySettled(_) => "copy_settled",
            UiEvent::CopyAckExpired { .. } => "copy_ack_expired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Service,
    Network,
    Clipboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    message: String,
}

impl UiError {
    pub fn empty_input() -> Self {
        Self {
            category: UiErrorCategory::Validation,
            message: "변환할 내용을 입력해주세요.".to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ConvertError> for UiError {
    fn from(value: ConvertError) -> Self {
        let category = match value {
            ConvertError::Service { .. } => UiErrorCategory::Service,
            ConvertError::Network(_) => UiErrorCategory::Network,
        };
        Self {
            category,
            message: format!("오류가 발생했습니다: {value}. 잠시 후 다시 시도해주세요."),
        }
    }
}

impl From<ClipboardError> for UiError {
    fn from(_: ClipboardError) -> Self {
        Self {
            category: UiErrorCategory::Clipboard,
            message: "복사에 실패했습니다. 직접 선택하여 복사해주세요.".to_string(),
        }
    }
}
