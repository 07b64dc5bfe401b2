pub mod errors;
pub mod models;
pub mod service;

pub use errors::EmailError;
pub use errors::UserError;
pub use models::EmailAddress;
pub use models::User;
pub use models::UserUpdate;
pub use service::UserService;
