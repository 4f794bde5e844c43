use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Screen resolution
// ---------------------------------------------------------------------------

/// Screen dimensions in pixels, captured once from the backend at startup.
/// Immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenResolution {
    pub width: u32,
    pub height: u32,
}

impl ScreenResolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scale a normalized (fractional) position to absolute pixel space.
    ///
    /// No rounding, clamping, or bounds check — out-of-range fractions
    /// produce off-screen targets and it is the injection backend's job to
    /// clamp or reject them.
    pub fn to_absolute(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.width as f64, y * self.height as f64)
    }
}

// ---------------------------------------------------------------------------
// Mouse buttons
// ---------------------------------------------------------------------------

/// The two buttons with defined click behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    /// Parse a wire-level button name. Anything other than "left"/"right"
    /// has no defined action and yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Request shapes
// ---------------------------------------------------------------------------

/// Body of POST /api/mouse/move. Missing coordinates default independently
/// to 0.5 (screen center). Values are not validated against [0,1].
#[derive(Debug, Clone, Deserialize)]
pub struct MoveRequest {
    #[serde(default = "center")]
    pub x: f64,
    #[serde(default = "center")]
    pub y: f64,
}

fn center() -> f64 {
    0.5
}

/// Body of POST /api/mouse/click. The button is kept as a raw string:
/// unrecognized values are echoed back without performing any action.
#[derive(Debug, Clone, Deserialize)]
pub struct ClickRequest {
    #[serde(default = "left")]
    pub button: String,
}

fn left() -> String {
    "left".to_string()
}
