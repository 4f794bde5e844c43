use crate::models::MouseButton;
use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Mouse backend trait
// ---------------------------------------------------------------------------

/// Errors that can occur during input injection.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
    #[error("Injection failed: {0}")]
    Injection(String),
}

/// An OS input-injection backend that can move and click the cursor.
///
/// The cursor is a single global mutable OS resource; callers must
/// serialize access (the dispatcher holds the only handle behind a mutex).
#[async_trait]
pub trait MouseBackend: Send {
    /// Detect the screen resolution in pixels. Called once at startup;
    /// failure here is fatal to the process.
    fn screen_size(&self) -> Result<(u32, u32), InputError>;

    /// Move the cursor to an absolute pixel position. Fractional pixels
    /// are accepted; the backend decides how to quantize them.
    async fn move_to(&mut self, x: f64, y: f64) -> Result<(), InputError>;

    /// Click the given button at the cursor's current position.
    async fn click(&mut self, button: MouseButton) -> Result<(), InputError>;
}
