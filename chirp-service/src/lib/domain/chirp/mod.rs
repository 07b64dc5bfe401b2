pub mod errors;
pub mod models;
pub mod service;

pub use errors::ChirpBodyError;
pub use errors::ChirpError;
pub use models::Chirp;
pub use models::ChirpBody;
pub use service::ChirpService;
