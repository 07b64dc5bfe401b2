pub mod chirp;
pub mod ports;
pub mod session;
pub mod user;
