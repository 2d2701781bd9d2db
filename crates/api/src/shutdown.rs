//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;

#[derive(Debug, Error)]
pub(crate) enum ShutdownError {
    #[error("failed to install {signal} handler: {source}")]
    Install {
        signal: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Wait for a termination signal, then stop the server gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownError> {
    let ctrl_c = async {
        signal::ctrl_c().await.map_err(|source| ShutdownError::Install {
            signal: "Ctrl+C",
            source,
        })
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(|source| ShutdownError::Install {
                signal: "SIGTERM",
                source,
            })?
            .recv()
            .await;

        Ok::<(), ShutdownError>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<(), ShutdownError>>();

    tokio::select! {
        result = ctrl_c => {
            result?;
            tracing::info!("ctrl_c signal received");
        }
        result = terminate => {
            result?;
            tracing::info!("terminate signal received");
        }
    }

    handle.stop_graceful(None);

    Ok(())
}
