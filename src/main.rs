//! graph-search command line host
//!
//! Runs one query (or a credential check) with credentials taken from
//! settings.yml and GRAPH_SEARCH_* environment variables.

use anyhow::{bail, Result};
use graph_search::{
    config::{Credentials, RuntimeConfig, Settings},
    logging, CredentialValidator, SearchConnector,
};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// What one command line run does
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    Validate,
    Search(String),
}

/// Flags may appear anywhere; words after `--` are query text even if they
/// start with a dash
fn parse_args(args: &[String]) -> Result<Command> {
    let mut validate = false;
    let mut words = Vec::new();
    let mut rest = args.iter();

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--validate" => validate = true,
            "--" => {
                words.extend(rest.by_ref().map(String::as_str));
                break;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                bail!("unknown option '{}' (see --help)", flag)
            }
            word => words.push(word),
        }
    }

    if validate {
        if !words.is_empty() {
            bail!("--validate does not take a query");
        }
        return Ok(Command::Validate);
    }

    let query = words.join(" ");
    if query.trim().is_empty() {
        bail!("no query given");
    }
    Ok(Command::Search(query))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            print_usage();
            return Err(e);
        }
    };

    let query = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("graph-search {}", graph_search::VERSION);
            return Ok(());
        }
        Command::Validate => None,
        Command::Search(query) => Some(query),
    };

    let settings = load_settings()?;
    let dispatch = logging::dispatch_from_settings(&settings.logging)?;

    let Some(query) = query else {
        let credentials: HashMap<String, Value> = settings
            .credentials
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        CredentialValidator::with_settings(settings)
            .with_dispatch(dispatch)
            .validate(&credentials)
            .await?;
        println!("Credentials are valid");
        return Ok(());
    };

    let runtime = RuntimeConfig::new(Credentials::from_strings(&settings.credentials)?);
    let connector = SearchConnector::with_settings(runtime, &settings)?.with_dispatch(dispatch);

    let mut parameters = HashMap::new();
    parameters.insert("query".to_string(), Value::String(query));

    let report = connector.invoke("cli", &parameters).await?;
    print!("{}", report);

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("graph-search/settings.yml"))
            .unwrap_or_default(),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("GRAPH_SEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
graph-search v{}
Search SharePoint and OneDrive content through Microsoft Graph

USAGE:
    graph-search <QUERY>...
    graph-search [--] <QUERY>...
    graph-search --validate

OPTIONS:
    --validate             Check the configured credentials with a test search
    -h, --help             Print help information
    -V, --version          Print version information
    --                     Treat every following word as query text

ENVIRONMENT VARIABLES:
    GRAPH_SEARCH_SETTINGS_PATH   Path to settings.yml
    GRAPH_SEARCH_CLIENT_ID       Application (client) id
    GRAPH_SEARCH_CLIENT_SECRET   Client secret
    GRAPH_SEARCH_TENANT_ID       Directory (tenant) id
    GRAPH_SEARCH_REGION          Search region (default US)
    GRAPH_SEARCH_LOG_LEVEL       Log filter (default info)
    GRAPH_SEARCH_LOG_FILE        Write logs to this file
    GRAPH_SEARCH_TIMEOUT         Request timeout in seconds
"#,
        graph_search::VERSION
    );
}
