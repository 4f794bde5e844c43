pub mod backend;
pub mod dispatcher;

pub use backend::enigo::EnigoBackend;
pub use backend::mock::{MockBackend, MockRecords};
pub use dispatcher::MouseDispatcher;
