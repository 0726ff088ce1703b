pub mod validator;
pub mod login_viewmodel;

pub use validator::{validate, validated_credentials};
pub use login_viewmodel::LoginViewModel;
