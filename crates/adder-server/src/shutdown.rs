//! Termination signal handling for graceful shutdown.

use anyhow::Result;
use tokio::signal;

/// Resolves once Ctrl+C or SIGTERM is received.
///
/// If a signal handler cannot be installed the error is logged and the
/// future never resolves, so the server keeps running.
pub async fn shutdown_signal() {
    let received = tokio::select! {
        result = wait_ctrl_c() => result,
        result = wait_sigterm() => result,
    };

    match received {
        Ok(name) => tracing::info!(signal = name, "Shutdown signal received, draining connections"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signals");
            std::future::pending::<()>().await;
        }
    }
}

async fn wait_ctrl_c() -> Result<&'static str> {
    signal::ctrl_c().await?;
    Ok("ctrl_c")
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<&'static str> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    terminate.recv().await;
    Ok("sigterm")
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<&'static str> {
    std::future::pending().await
}
