use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use whisper_stt::application::services::TranscriptionService;
use whisper_stt::infrastructure::audio::{CandleWhisperEngine, HoundWavValidator};
use whisper_stt::infrastructure::observability::{init_tracing, TracingConfig};
use whisper_stt::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let engine = Arc::new(CandleWhisperEngine::new(&settings.model.model_id)?);
    let validator = Arc::new(HoundWavValidator::new(settings.upload.max_duration_secs));

    let transcription_service = Arc::new(TranscriptionService::new(
        validator,
        engine,
        settings.upload.max_upload_bytes,
        settings.upload.lock_timeout(),
    ));

    let state = AppState {
        transcription_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
