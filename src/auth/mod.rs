//! Authentication against the Microsoft identity platform

mod token;

pub use token::{acquire_token, AccessToken};
