pub mod auth_service;
pub mod navigation;

pub use auth_service::*;
pub use navigation::*;
