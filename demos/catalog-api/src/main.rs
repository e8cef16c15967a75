mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ServerConfig;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "optcg_catalog=debug,catalog_api=debug,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        addr = %config.bind_addr(),
        upstream = %config.upstream_base_url,
        image_mode = ?config.image_mode,
        "Loaded server configuration"
    );

    let catalog = optcg_catalog::AsyncCatalogClient::builder()
        .base_url(config.upstream_base_url.clone())
        .timeout(config.upstream_timeout)
        .build()
        .await
        .expect("Failed to initialize catalog client");

    let state = Arc::new(AppState {
        catalog,
        image_mode: config.image_mode,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/onepiece", get(routes::cards::search_cards))
        .route("/onepiece/random", get(routes::cards::random_card))
        .route("/onepiece/{set_id}", get(routes::cards::get_card))
        .route("/image-proxy", get(routes::images::image_proxy))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Listening on http://{addr}/onepiece");
    axum::serve(listener, app).await.expect("Server error");
}
