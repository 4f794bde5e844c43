use airmouse_core::{InputError, MouseBackend, MouseButton};
use async_trait::async_trait;
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};

/// Real OS cursor injection via enigo.
///
/// Unlike pyautogui there is no corner-of-screen failsafe here; once a
/// command is issued to the OS it cannot be retracted.
pub struct EnigoBackend {
    enigo: Enigo,
}

impl EnigoBackend {
    /// Connect to the platform input system. The X11 inter-action delay is
    /// set to zero so moves land without artificial pauses.
    pub fn new() -> Result<Self, InputError> {
        let mut settings = Settings::default();
        settings.linux_delay = 0;
        let enigo =
            Enigo::new(&settings).map_err(|e| InputError::Unavailable(e.to_string()))?;
        Ok(Self { enigo })
    }
}

#[async_trait]
impl MouseBackend for EnigoBackend {
    fn screen_size(&self) -> Result<(u32, u32), InputError> {
        let (width, height) = self
            .enigo
            .main_display()
            .map_err(|e| InputError::Unavailable(e.to_string()))?;
        Ok((width as u32, height as u32))
    }

    async fn move_to(&mut self, x: f64, y: f64) -> Result<(), InputError> {
        // enigo takes integral pixels; fractional targets truncate here.
        self.enigo
            .move_mouse(x as i32, y as i32, Coordinate::Abs)
            .map_err(|e| InputError::Injection(e.to_string()))
    }

    async fn click(&mut self, button: MouseButton) -> Result<(), InputError> {
        let button = match button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
        };
        self.enigo
            .button(button, Direction::Click)
            .map_err(|e| InputError::Injection(e.to_string()))
    }
}
