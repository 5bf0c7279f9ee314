use async_trait::async_trait;
use shared::domain::FeedbackRecord;
use tracing::info;

pub mod controller;
pub mod error;
pub mod events;
pub mod render;
pub mod service;
pub mod state;

pub use controller::{Capabilities, ControllerConfig, ConversionController};
pub use error::{ClipboardError, ConvertError};
pub use events::{UiError, UiErrorCategory, UiEvent};
pub use render::{CopyLabel, FeedbackView, PageView, PageViewSurface, RenderCommand, UiSurface};
pub use service::{ConversionService, HttpConversionService};

#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError>;
}

pub struct UnavailableClipboard;

#[async_trait]
impl ClipboardWriter for UnavailableClipboard {
    async fn write_text(&self, _text: String) -> Result<(), ClipboardError> {
        Err(ClipboardError("no clipboard available".to_string()))
    }
}

/// Receives feedback given on a conversion result.
///
/// Nothing is transmitted anywhere by default; a sink that forwards to a
/// backend can be injected instead of [`LogFeedbackSink`].
pub trait FeedbackSink: Send + Sync {
    fn record(&self, feedback: &FeedbackRecord);
}

pub struct LogFeedbackSink;

impl FeedbackSink for LogFeedbackSink {
    fn record(&self, feedback: &FeedbackRecord) {
        info!(
            kind = ?feedback.kind,
            conversion_target = %feedback.target,
            chars = feedback.converted_text.chars().count(),
            given_at = %feedback.given_at,
            "feedback received"
        );
    }
}
