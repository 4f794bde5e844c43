//! Mock backend for unit testing and headless runs.
//!
//! The real backend physically moves the cursor on the host, which a test
//! cannot observe (or tolerate). The mock records every injected event in
//! shared `Mutex<Vec<...>>` buffers so assertions can inspect exactly what
//! was dispatched and in what order. Construct with [`MockBackend::failing`]
//! to exercise error-handling paths without a broken OS.

use airmouse_core::{InputError, MouseBackend, MouseButton};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Shared handles to the mock's event records. Clone these before handing
/// the backend to a dispatcher; they stay valid afterwards.
#[derive(Debug, Clone, Default)]
pub struct MockRecords {
    /// Every (x, y) absolute position passed to `move_to`, in order.
    pub moves: Arc<Mutex<Vec<(f64, f64)>>>,
    /// Every button passed to `click`, in order.
    pub clicks: Arc<Mutex<Vec<MouseButton>>>,
}

/// A backend that records all calls without touching the OS.
pub struct MockBackend {
    records: MockRecords,
    screen: (u32, u32),
    fail_injection: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::with_screen(1920, 1080)
    }

    pub fn with_screen(width: u32, height: u32) -> Self {
        Self {
            records: MockRecords::default(),
            screen: (width, height),
            fail_injection: false,
        }
    }

    /// A backend whose move/click calls always fail. The screen probe still
    /// succeeds, so a dispatcher can be constructed around it.
    pub fn failing() -> Self {
        Self {
            fail_injection: true,
            ..Self::new()
        }
    }

    pub fn records(&self) -> MockRecords {
        self.records.clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MouseBackend for MockBackend {
    fn screen_size(&self) -> Result<(u32, u32), InputError> {
        Ok(self.screen)
    }

    async fn move_to(&mut self, x: f64, y: f64) -> Result<(), InputError> {
        if self.fail_injection {
            return Err(InputError::Injection("mock injection failure".into()));
        }
        self.records.moves.lock().unwrap().push((x, y));
        Ok(())
    }

    async fn click(&mut self, button: MouseButton) -> Result<(), InputError> {
        if self.fail_injection {
            return Err(InputError::Injection("mock injection failure".into()));
        }
        self.records.clicks.lock().unwrap().push(button);
        Ok(())
    }
}
