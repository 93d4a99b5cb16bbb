pub mod config;
pub mod core;
pub mod shared;

use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use crate::core::geolocation::GeolocationClient;
use crate::core::session::TranslatorSession;
use crate::shared::emit::EventEmitter;
use crate::shared::error::AppResult;
use crate::shared::settings::AppSettings;

/// Install the global log subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (tests, embedding hosts) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load settings, falling back to built-in defaults when the file is unusable.
pub async fn load_settings() -> AppSettings {
    AppSettings::load().await.unwrap_or_else(|e| {
        tracing::error!("Failed to load settings: {}", e);
        AppSettings::default()
    })
}

/// Build a session against the configured completion API.
pub fn start_session(settings: &AppSettings, emitter: EventEmitter) -> AppResult<TranslatorSession> {
    let session = TranslatorSession::from_settings(settings, emitter)?;
    if !settings.api.has_usable_key() {
        tracing::warn!("[Session] No API key configured; translations will fail until one is set");
    }
    tracing::info!(
        "[Session] Ready with {} languages, debounce {:?}",
        session.orchestrator().languages().list_all_languages().len(),
        settings.debounce()
    );
    Ok(session)
}

/// Detect the user's location in the background and offer its language as
/// the target. The session keeps the current target when the lookup fails
/// or the user picked one in the meantime.
pub fn spawn_location_detection(session: &TranslatorSession, settings: &AppSettings) -> JoinHandle<()> {
    let session = session.clone();
    let client = GeolocationClient::new(settings.geolocation.endpoint.clone());
    let lookup = session.begin_location_lookup();
    tokio::spawn(async move {
        tracing::info!("[Geolocation] Detecting location...");
        let located = client
            .locate_language(session.orchestrator().languages())
            .await;
        session.on_location_resolved(lookup, located);
    })
}
