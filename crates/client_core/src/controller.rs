//! Conversion interaction controller: owns the UI state and turns UI events
//! into render commands and background work.
//!
//! Every collaborator is injected through [`Capabilities`]. Async work runs in
//! spawned tasks that report back through the controller's own event queue,
//! so state is only ever touched from [`ConversionController::handle`]. The
//! controller only holds a weak handle on that queue; it stays open while a
//! front-end sender or a pending settlement is alive.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use shared::{
    domain::{FeedbackKind, FeedbackRecord, Target},
    protocol::ConvertRequest,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};
use tracing::{debug, info, warn};

use crate::{
    error::{ClipboardError, ConvertError},
    events::{UiError, UiEvent},
    render::{CopyLabel, RenderCommand, UiSurface},
    service::ConversionService,
    state::{
        CopyState, FeedbackState, InputState, OutputState, RequestOutcome, RequestState,
        COPY_ACK_WINDOW, MAX_CHARS,
    },
    ClipboardWriter, FeedbackSink,
};

pub struct Capabilities {
    pub surface: Box<dyn UiSurface>,
    pub service: Arc<dyn ConversionService>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub feedback: Arc<dyn FeedbackSink>,
}

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Advisory input length; reaching it only changes the counter style.
    pub max_chars: usize,
    pub copy_ack_window: Duration,
    pub default_target: Target,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_chars: MAX_CHARS,
            copy_ack_window: COPY_ACK_WINDOW,
            default_target: Target::default(),
        }
    }
}

pub struct ConversionController {
    config: ControllerConfig,
    caps: Capabilities,
    input: InputState,
    request: RequestState,
    output: OutputState,
    feedback: FeedbackState,
    copy: CopyState,
    submitted_target: Target,
    /// Bumped on every accepted submit; a copy belongs to the output it was started for.
    output_seq: u64,
    events: WeakUnboundedSender<UiEvent>,
}

impl ConversionController {
    pub fn new(
        caps: Capabilities,
        config: ControllerConfig,
    ) -> (Self, UnboundedSender<UiEvent>, UnboundedReceiver<UiEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let mut controller = Self {
            input: InputState {
                text: String::new(),
                target: config.default_target,
            },
            submitted_target: config.default_target,
            config,
            caps,
            request: RequestState::Idle,
            output: OutputState::default(),
            feedback: FeedbackState::default(),
            copy: CopyState::default(),
            output_seq: 0,
            events: events.downgrade(),
        };
        controller.render_char_count();
        (controller, events, rx)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn request_state(&self) -> RequestState {
        self.request
    }

    pub fn output(&self) -> &OutputState {
        &self.output
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn copy_pending(&self) -> bool {
        self.copy.pending
    }

    /// Runs until `PageClosed` arrives or every front-end sender is dropped.
    pub async fn run(mut self, mut rx: UnboundedReceiver<UiEvent>) {
        while let Some(event) = rx.recv().await {
            if matches!(event, UiEvent::PageClosed) {
                info!("page closed; controller stopping");
                return;
            }
            self.handle(event);
        }
        info!("all ui senders dropped; controller stopping");
    }

    pub fn handle(&mut self, event: UiEvent) {
        debug!(event = event.name(), "handling ui event");
        match event {
            UiEvent::InputChanged(text) => self.on_input_changed(text),
            UiEvent::TargetSelected(target) => self.input.target = target,
            UiEvent::SubmitRequested => self.on_submit(),
            UiEvent::CopyRequested => self.on_copy_requested(),
            UiEvent::FeedbackGiven(kind) => self.on_feedback_given(kind),
            UiEvent::PageClosed => {}
            UiEvent::ConversionSettled(result) => self.on_conversion_settled(result),
            UiEvent::CopySettled(result) => self.on_copy_settled(result),
            UiEvent::CopyAckExpired { generation } => self.on_copy_ack_expired(generation),
        }
    }

    fn on_input_changed(&mut self, text: String) {
        self.input.text = text;
        self.render_char_count();
    }

    fn on_submit(&mut self) {
        if self.request.is_in_flight() {
            debug!("submit ignored while a conversion is in flight");
            return;
        }

        let text = self.input.trimmed().to_string();
        if text.is_empty() {
            let error = UiError::empty_input();
            self.output.error = Some(error.message().to_string());
            self.render(RenderCommand::ShowError(error.message().to_string()));
            return;
        }
        let Some(events) = self.post_back() else {
            return;
        };

        self.request = RequestState::InFlight;
        self.output = OutputState::default();
        self.feedback.withdraw();
        self.submitted_target = self.input.target;
        // A pending acknowledgment revert belongs to the output being replaced.
        self.copy.generation += 1;
        self.output_seq += 1;

        self.render(RenderCommand::Loading(true));
        self.render(RenderCommand::HideError);
        self.render(RenderCommand::CopyVisible(false));
        self.render(RenderCommand::CopyLabel(CopyLabel::Idle));
        self.render(RenderCommand::FeedbackVisible(false));
        self.render(RenderCommand::SetOutput(String::new()));

        info!(
            conversion_target = %self.submitted_target,
            chars = text.chars().count(),
            "submitting conversion"
        );
        let request = ConvertRequest::new(text, self.submitted_target);
        let service = Arc::clone(&self.caps.service);
        tokio::spawn(async move {
            let result = service.convert(request).await;
            if events.send(UiEvent::ConversionSettled(result)).is_err() {
                debug!("controller gone before conversion settled");
            }
        });
    }

    fn on_conversion_settled(&mut self, result: Result<String, ConvertError>) {
        if !self.request.is_in_flight() {
            warn!("conversion settled with no request in flight; ignoring");
            return;
        }

        match result {
            Ok(converted) => {
                self.request = RequestState::Completed(RequestOutcome::Success);
                self.output.output = converted.clone();
                self.output.error = None;
                self.feedback.reset_for_output();
                self.render(RenderCommand::SetOutput(converted));
                self.render(RenderCommand::HideError);
                self.render(RenderCommand::CopyVisible(true));
                self.render(RenderCommand::FeedbackVisible(true));
            }
            Err(error) => {
                warn!(%error, "conversion failed");
                let error = UiError::from(error);
                self.request = RequestState::Completed(RequestOutcome::Failure);
                self.output.error = Some(error.message().to_string());
                self.render(RenderCommand::ShowError(error.message().to_string()));
            }
        }

        self.render(RenderCommand::Loading(false));
    }

    fn on_copy_requested(&mut self) {
        if self.output.output.is_empty() {
            return;
        }
        if self.copy.pending {
            debug!("copy ignored while a clipboard write is pending");
            return;
        }
        let Some(events) = self.post_back() else {
            return;
        };

        self.copy.pending = true;
        self.copy.source = self.output_seq;
        self.render(RenderCommand::CopyEnabled(false));

        let text = self.output.output.clone();
        let clipboard = Arc::clone(&self.caps.clipboard);
        tokio::spawn(async move {
            let result = clipboard.write_text(text).await;
            if events.send(UiEvent::CopySettled(result)).is_err() {
                debug!("controller gone before clipboard write settled");
            }
        });
    }

    fn on_copy_settled(&mut self, result: Result<(), ClipboardError>) {
        if !self.copy.pending {
            warn!("clipboard write settled with no copy pending; ignoring");
            return;
        }
        self.copy.pending = false;
        self.render(RenderCommand::CopyEnabled(true));

        if self.copy.source != self.output_seq {
            debug!(ok = result.is_ok(), "clipboard write settled for a replaced output");
            return;
        }

        match result {
            Ok(()) => {
                self.copy.generation += 1;
                let generation = self.copy.generation;
                self.render(RenderCommand::CopyLabel(CopyLabel::Acknowledged));

                let Some(events) = self.post_back() else {
                    return;
                };
                let window = self.config.copy_ack_window;
                tokio::spawn(async move {
                    tokio::time::sleep(window).await;
                    if events.send(UiEvent::CopyAckExpired { generation }).is_err() {
                        debug!("controller gone before copy acknowledgment expired");
                    }
                });
            }
            Err(error) => {
                warn!(%error, "failed to copy output");
                let error = UiError::from(error);
                self.render(RenderCommand::ShowError(error.message().to_string()));
            }
        }
    }

    fn on_copy_ack_expired(&mut self, generation: u64) {
        if generation != self.copy.generation {
            debug!(generation, current = self.copy.generation, "stale copy acknowledgment");
            return;
        }
        self.render(RenderCommand::CopyLabel(CopyLabel::Idle));
    }

    fn on_feedback_given(&mut self, kind: FeedbackKind) {
        if !self.feedback.can_give() {
            debug!(?kind, "feedback not available for current output");
            return;
        }

        self.feedback.record(kind);
        self.caps.feedback.record(&FeedbackRecord {
            kind,
            target: self.submitted_target,
            converted_text: self.output.output.clone(),
            given_at: Utc::now(),
        });
        self.render(RenderCommand::FeedbackThanks(kind));
    }

    fn post_back(&self) -> Option<UnboundedSender<UiEvent>> {
        let events = self.events.upgrade();
        if events.is_none() {
            debug!("no ui sender left; background work not started");
        }
        events
    }

    fn render_char_count(&mut self) {
        let count = self.input.char_count();
        let limit = self.config.max_chars;
        self.render(RenderCommand::CharCount {
            count,
            limit,
            at_limit: count >= limit,
        });
    }

    fn render(&mut self, command: RenderCommand) {
        self.caps.surface.render(command);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
