// main.rs

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use traffic_predictor::api::{self, AppState};
use traffic_predictor::inference::model_store::ModelStore;
use traffic_predictor::shared_data::RoadObservation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);
    let model_path = PathBuf::from(
        std::env::var("MODEL_PATH").unwrap_or_else(|_| "model/traffic_lstm.json".to_string()),
    );
    let scaler_path = PathBuf::from(
        std::env::var("SCALER_PATH").unwrap_or_else(|_| "model/scaler.json".to_string()),
    );

    let store = Arc::new(ModelStore::new(model_path, scaler_path));

    // Warm load so the first request doesn't pay for artifact parsing. A
    // missing artifact only logs a warning here; the store retries on the
    // next request.
    match store.get_or_load() {
        Ok(predictor) => {
            let warmup = RoadObservation {
                hour: 0.0,
                day: 0.0,
                speed: 0.0,
                vehicles: 0.0,
                time: 0.0,
            };
            match predictor.predict(&warmup) {
                Ok(_) => log::info!("model warmup forward ok"),
                Err(e) => log::warn!("model warmup forward failed: {}", e),
            }
        }
        Err(e) => log::warn!("model not loaded at startup: {}", e),
    }

    let app = api::build_router(AppState {
        models: Arc::clone(&store),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    log::info!("traffic predictor listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
