/// URL base del backend
/// Configurada en tiempo de compilación (via BACKEND_URL env var)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

// Reglas de los campos (longitud tras recortar espacios)
pub const USERNAME_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 6;

// Mensajes visibles para el usuario
pub const USERNAME_TOO_SHORT_MESSAGE: &str = "Username must be at least 2 characters.";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

pub const USERNAME_PLACEHOLDER: &str = "puppy-saturation";
