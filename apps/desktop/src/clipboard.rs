use std::sync::{Arc, Mutex, PoisonError};

use arboard::Clipboard;
use async_trait::async_trait;
use client_core::{ClipboardError, ClipboardWriter};

/// System clipboard. The handle is kept alive between writes since some
/// platforms drop clipboard contents together with their owner.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<Clipboard>>>,
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        let handle = Arc::clone(&self.handle);
        tokio::task::spawn_blocking(move || {
            let mut guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.is_none() {
                *guard = Some(Clipboard::new()?);
            }
            match guard.as_mut() {
                Some(clipboard) => clipboard.set_text(text),
                None => Err(arboard::Error::ClipboardNotSupported),
            }
        })
        .await
        .map_err(|error| ClipboardError(error.to_string()))?
        .map_err(|error| ClipboardError(error.to_string()))
    }
}
