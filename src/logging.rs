//! Logging sinks
//!
//! The connector never installs a global subscriber. Callers hand it a
//! [`Dispatch`] and every operation runs under that dispatch.

use crate::config::LoggingSettings;
use anyhow::Result;
use std::fs::OpenOptions;
use std::future::Future;
use std::sync::Mutex;
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Run `fut` under `dispatch` when one is given, under the ambient one otherwise
pub(crate) async fn dispatched<F: Future>(dispatch: Option<&Dispatch>, fut: F) -> F::Output {
    match dispatch {
        Some(dispatch) => fut.with_subscriber(dispatch.clone()).await,
        None => fut.await,
    }
}

/// Build a fmt dispatch from settings, writing to the configured file or stderr
pub fn dispatch_from_settings(settings: &LoggingSettings) -> Result<Dispatch> {
    let filter = EnvFilter::try_new(&settings.level)?;

    let dispatch = match settings.file {
        Some(ref path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Dispatch::new(
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .finish(),
            )
        }
        None => Dispatch::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .finish(),
        ),
    };

    Ok(dispatch)
}
