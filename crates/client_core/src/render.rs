//! Render commands emitted by the controller and the page model they project onto.

use std::sync::{Arc, Mutex, PoisonError};

use shared::domain::FeedbackKind;

pub const COPY_LABEL: &str = "복사하기";
pub const COPIED_LABEL: &str = "✅ 복사되었습니다!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Idle,
    Acknowledged,
}

impl CopyLabel {
    pub fn text(self) -> &'static str {
        match self {
            CopyLabel::Idle => COPY_LABEL,
            CopyLabel::Acknowledged => COPIED_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    CharCount {
        count: usize,
        limit: usize,
        at_limit: bool,
    },
    /// Disables the submit control and shows the spinner, or the reverse.
    Loading(bool),
    ShowError(String),
    HideError,
    SetOutput(String),
    CopyVisible(bool),
    CopyEnabled(bool),
    CopyLabel(CopyLabel),
    FeedbackVisible(bool),
    FeedbackThanks(FeedbackKind),
}

/// A page, as far as the controller is concerned.
pub trait UiSurface: Send {
    fn render(&mut self, command: RenderCommand);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedbackView {
    #[default]
    Hidden,
    Buttons,
    Thanks(FeedbackKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub char_count: String,
    pub char_count_warning: bool,
    pub submit_enabled: bool,
    pub spinner_visible: bool,
    pub error: Option<String>,
    pub output: String,
    pub copy_visible: bool,
    pub copy_enabled: bool,
    pub copy_label: CopyLabel,
    pub feedback: FeedbackView,
}

impl PageView {
    pub fn new(limit: usize) -> Self {
        Self {
            char_count: format!("0/{limit}"),
            char_count_warning: false,
            submit_enabled: true,
            spinner_visible: false,
            error: None,
            output: String::new(),
            copy_visible: false,
            copy_enabled: true,
            copy_label: CopyLabel::Idle,
            feedback: FeedbackView::Hidden,
        }
    }

    pub fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::CharCount {
                count,
                limit,
                at_limit,
            } => {
                self.char_count = format!("{count}/{limit}");
                self.char_count_warning = at_limit;
            }
            RenderCommand::Loading(loading) => {
                self.submit_enabled = !loading;
                self.spinner_visible = loading;
            }
            RenderCommand::ShowError(message) => self.error = Some(message),
            RenderCommand::HideError => self.error = None,
            RenderCommand::SetOutput(text) => self.output = text,
            RenderCommand::CopyVisible(visible) => self.copy_visible = visible,
            RenderCommand::CopyEnabled(enabled) => self.copy_enabled = enabled,
            RenderCommand::CopyLabel(label) => self.copy_label = label,
            RenderCommand::FeedbackVisible(true) => self.feedback = FeedbackView::Buttons,
            RenderCommand::FeedbackVisible(false) => self.feedback = FeedbackView::Hidden,
            RenderCommand::FeedbackThanks(kind) => self.feedback = FeedbackView::Thanks(kind),
        }
    }
}

impl Default for PageView {
    fn default() -> Self {
        Self::new(crate::state::MAX_CHARS)
    }
}

/// Surface that keeps a shared [`PageView`] up to date and records every command.
#[derive(Clone, Default)]
pub struct PageViewSurface {
    view: Arc<Mutex<PageView>>,
    history: Arc<Mutex<Vec<RenderCommand>>>,
}

impl PageViewSurface {
    pub fn new(limit: usize) -> Self {
        Self {
            view: Arc::new(Mutex::new(PageView::new(limit))),
            history: Arc::default(),
        }
    }

    pub fn snapshot(&self) -> PageView {
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn history(&self) -> Vec<RenderCommand> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl UiSurface for PageViewSurface {
    fn render(&mut self, command: RenderCommand) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command.clone());
        self.view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .apply(command);
    }
}
