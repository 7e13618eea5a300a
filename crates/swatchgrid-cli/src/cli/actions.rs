//! Copy-to-clipboard action with user feedback.
//!
//! The clipboard and the notification surface are both injected as traits
//! so the TUI, the one-shot CLI commands, and the tests can each supply
//! their own: the real system clipboard vs a recording fake, a transient
//! status line vs stderr.

/// Notification shown after a successful copy.
pub const COPY_OK: &str = "SVG copied to clipboard!";
/// Notification shown when the clipboard write fails.
pub const COPY_FAILED: &str = "Failed to copy SVG";

/// Write capability for the platform clipboard. No read side is needed.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// Fire-and-forget user notification. Never blocks, never fails.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

/// Copy a document to the clipboard and notify the user either way.
///
/// A failed write is reported and swallowed: it is not recoverable by the
/// application and must not take the process down. Returns whether the
/// write succeeded.
pub fn copy_with_feedback(
    clipboard: &mut dyn ClipboardSink,
    notify: &mut dyn Notify,
    svg: &str,
) -> bool {
    match clipboard.copy(svg) {
        Ok(()) => {
            notify.notify(COPY_OK);
            true
        }
        Err(_) => {
            notify.notify(COPY_FAILED);
            false
        }
    }
}

/// The real system clipboard via arboard.
///
/// Construction failure (e.g. no display server) is deferred: the sink is
/// still usable and every copy attempt reports failure through the normal
/// notification path.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard {
            inner: arboard::Clipboard::new().ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_string()).map_err(|e| e.to_string()),
            None => Err("clipboard unavailable".to_string()),
        }
    }
}

/// Notifier for one-shot CLI commands: messages go to stderr.
pub struct StderrNotify;

impl Notify for StderrNotify {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

// ============================================================================
// TESTS
// ============================================================================
