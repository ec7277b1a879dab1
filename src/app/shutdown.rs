//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on the first Ctrl-C or, on Unix, SIGTERM.
///
/// Run it as a background task next to the server; the server stops accepting
/// connections once the token fires.
pub async fn cancel_on_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig_term) => {
                sig_term.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("Ctrl-C received"),
        _ = terminate => log::info!("SIGTERM received"),
        _ = cancel.cancelled() => return,
    }

    cancel.cancel();
}
