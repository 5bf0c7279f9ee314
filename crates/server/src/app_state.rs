use std::sync::Arc;

use crate::provider::Rewriter;

#[derive(Clone)]
pub(crate) struct AppState {
    /// `None` when no provider API key was configured.
    pub(crate) rewriter: Option<Arc<dyn Rewriter>>,
}
