pub mod app;
pub mod auth;

pub use app::App;
pub use auth::LoginView;
