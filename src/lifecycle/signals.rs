//! OS signal handling.
//!
//! A single async helper that completes when the process receives a
//! termination signal.
//!
//! On Unix, SIGINT and SIGTERM are handled, with [`tokio::signal::ctrl_c`]
//! as a fallback. On other platforms only Ctrl-C is awaited.

#[cfg(unix)]
pub async fn wait_for_termination() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {},
        _ = sigint.recv() => {},
        _ = sigterm.recv() => {},
    }
    Ok(())
}

#[cfg(not(unix))]
pub async fn wait_for_termination() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
