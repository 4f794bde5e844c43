use airmouse_core::{InputError, MouseBackend, MouseButton, ScreenResolution};
use tokio::sync::Mutex;

/// Single access point to the OS cursor.
///
/// The cursor is one global mutable resource with no per-request isolation,
/// so every backend invocation goes through one async mutex; concurrent
/// requests cannot interleave move/click commands. The screen resolution is
/// probed once at construction and never changes afterwards.
pub struct MouseDispatcher {
    screen: ScreenResolution,
    backend: Mutex<Box<dyn MouseBackend>>,
}

impl MouseDispatcher {
    /// Probe the backend for the screen resolution and take exclusive
    /// ownership of it. A failed probe is fatal to server startup.
    pub fn new(backend: Box<dyn MouseBackend>) -> Result<Self, InputError> {
        let (width, height) = backend.screen_size()?;
        Ok(Self {
            screen: ScreenResolution::new(width, height),
            backend: Mutex::new(backend),
        })
    }

    pub fn screen(&self) -> ScreenResolution {
        self.screen
    }

    /// Scale a normalized position to pixels and move the cursor there.
    /// Returns the absolute target, fractional pixels included.
    pub async fn move_to(&self, x: f64, y: f64) -> Result<(f64, f64), InputError> {
        let (abs_x, abs_y) = self.screen.to_absolute(x, y);
        let mut backend = self.backend.lock().await;
        backend.move_to(abs_x, abs_y).await?;
        tracing::debug!(x = abs_x, y = abs_y, "Cursor moved");
        Ok((abs_x, abs_y))
    }

    /// Click at the cursor's current position. Button names other than
    /// "left"/"right" perform no OS action and still report success; the
    /// gap is logged so operators can see dropped clicks.
    pub async fn click(&self, button: &str) -> Result<(), InputError> {
        match MouseButton::from_name(button) {
            Some(parsed) => {
                let mut backend = self.backend.lock().await;
                backend.click(parsed).await?;
                tracing::debug!(button, "Click dispatched");
            }
            None => {
                tracing::warn!(button, "Unrecognized mouse button, no action taken");
            }
        }
        Ok(())
    }
}
