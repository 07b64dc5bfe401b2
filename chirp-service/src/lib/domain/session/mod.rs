pub mod errors;
pub mod models;
pub mod service;

pub use errors::SessionError;
pub use models::Session;
pub use service::SessionService;
