//! Configuration module for graph-search
//!
//! Settings come from YAML files and environment variables; credentials are
//! supplied by the host on every invocation.

mod credentials;
mod settings;

pub use credentials::*;
pub use settings::*;
