use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_gateway::controllers::{tts::TtsController, voices::VoiceController};
use tts_gateway::domain::tts::TtsService;
use tts_gateway::domain::voice::{VoiceCache, VoiceService};
use tts_gateway::infrastructure::config::{Config, LogFormat, ProviderConfig};
use tts_gateway::infrastructure::http::{create_router, start_http_server};
use tts_gateway::infrastructure::repositories::create_tts_repository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS gateway on {}:{}",
        config.host,
        config.port
    );

    // Missing credentials must not stop the server; the error is reported once here
    let provider_config = ProviderConfig::from_env();
    if let Ok(provider) = &provider_config {
        tracing::info!(provider = %provider.kind(), "TTS provider configured");
    }

    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the provider repository
    let tts_repo = create_tts_repository(provider_config, http_client);

    // 2. Instantiate services (inject repository and cache)
    tracing::info!(
        ttl_secs = config.voice_cache_ttl_secs,
        "Instantiating services..."
    );
    let voice_cache = VoiceCache::new(config.voice_cache_ttl());
    let voice_service = Arc::new(VoiceService::new(
        tts_repo.clone(),
        voice_cache,
        config.default_voice.clone(),
    ));
    let tts_service = Arc::new(TtsService::new(
        tts_repo.clone(),
        voice_service.clone(),
        config.clean_text,
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let voice_controller = Arc::new(VoiceController::new(voice_service, tts_repo.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    let app = create_router(tts_repo, voice_controller, tts_controller);

    // Start HTTP server with all routes
    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.is_development() {
        "tts_gateway=debug,tower_http=debug"
    } else {
        "tts_gateway=info,tower_http=info"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
