use airmouse_input::MouseDispatcher;

/// Shared application state accessible by all route handlers.
///
/// The dispatcher serializes backend access internally, so state needs no
/// locking of its own.
pub struct AppState {
    pub mouse: MouseDispatcher,
}

impl AppState {
    pub fn new(mouse: MouseDispatcher) -> Self {
        Self { mouse }
    }
}
