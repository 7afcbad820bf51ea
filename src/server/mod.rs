//! HTTP facade over the expander, stemmer and aligner.
//!
//! The listener binds before the lexical database is loaded. Until the
//! loader finishes, lexicon-backed endpoints answer 503.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::config::{LexalignConfig, LexiconConfig};
use crate::error::{LexalignError, Result};
use crate::lexicon::LexiconSlot;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use router::create_router;
pub use state::AppState;

/// Open the configured lexicon on the blocking pool and install it into
/// `slot`.
pub fn spawn_lexicon_loader(
    slot: Arc<LexiconSlot>,
    lexicon: LexiconConfig,
) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        info!("loading lexical database");
        let database = tokio::task::spawn_blocking(move || lexicon.open())
            .await
            .map_err(|e| LexalignError::other(format!("lexicon loader failed: {e}")))??;
        let name = database.name();
        slot.install(database)?;
        info!("{name} lexicon ready");
        Ok(())
    })
}

/// Run the server until Ctrl+C or SIGTERM.
pub async fn serve(config: LexalignConfig) -> Result<()> {
    config.validate()?;

    let slot = Arc::new(LexiconSlot::new());
    let state = AppState::new(&config, slot.clone())?;
    let app = create_router(state);

    let listener = TcpListener::bind(config.server.address()).await?;
    info!("listening on {}", listener.local_addr()?);

    if config.lexicon.synonyms_file.is_some() || config.lexicon.wordnet_dir.is_some() {
        let loader = spawn_lexicon_loader(slot, config.lexicon.clone());
        tokio::spawn(async move {
            match loader.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => error!("failed to load lexicon: {e}"),
                Err(e) => error!("lexicon loader panicked: {e}"),
            }
        });
    } else {
        warn!("no lexical database configured, synonym lookups will answer 503");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
