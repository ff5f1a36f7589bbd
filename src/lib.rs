//! graph-search: Microsoft Graph content search connector
//!
//! Authenticates with the client-credentials grant, runs a search query
//! against SharePoint and OneDrive content, and renders the hits as text for
//! a tool-calling host.

pub mod auth;
pub mod config;
pub mod connector;
pub mod errors;
pub mod logging;
pub mod network;
pub mod results;
pub mod search;

pub use config::{Credentials, RuntimeConfig, Settings};
pub use connector::{CredentialValidator, SearchConnector, Tool, ToolProvider};
pub use errors::{GraphError, GraphResult};
pub use results::{extract_relevant_data, format_results, SearchResultItem};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
