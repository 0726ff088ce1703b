pub mod credentials;
pub mod validation;
pub mod outcome;

pub use credentials::{Credentials, CredentialsInput, Field};
pub use validation::ValidationResult;
pub use outcome::{AuthReply, AuthResponse, SubmissionOutcome};
