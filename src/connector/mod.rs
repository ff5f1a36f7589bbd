//! Connector module
//!
//! The search connector, the credential validator, and the host traits they
//! implement.

mod search;
mod traits;
mod validator;

pub use search::SearchConnector;
pub use traits::*;
pub use validator::{CredentialValidator, CHECK_QUERY};
