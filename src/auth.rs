//! Credential models and the user collaborator contract.

pub mod credentials;
pub mod secret;
pub mod user;

pub use credentials::*;
pub use secret::*;
pub use user::*;
