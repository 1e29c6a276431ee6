#![deny(unsafe_code)]
#![deny(unused_must_use)]
#![deny(unused_features)]
#![warn(unused_crate_dependencies)]

pub mod api;
pub mod api_doc;
pub mod app;
pub mod data;
pub mod perf;

use std::sync::Arc;

use axum::Router;
use config::Config;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use utoipa_swagger_ui::SwaggerUi;

use self::{api_doc::ApiDoc, app::AppState};

pub struct BirthdayAppServer {
    config: Arc<Config>,
}

impl BirthdayAppServer {
    pub fn new(config: Config) -> Self {
        Self {
            config: config.into(),
        }
    }

    pub async fn run(self) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init();

        info!(
            "{} version: {}",
            self.config.app_name(),
            self.config.backend_semver_version()
        );

        if self.config.database_url().is_none() {
            info!("No database configured. Using in-memory user store.");
        }

        let state = AppState::new(self.config.clone());
        let router = self.create_public_api_router(&state);

        let listener = match TcpListener::bind(self.config.socket_addr()).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Binding public API socket failed: {e}");
                return;
            }
        };

        info!("Public API is available on {}", self.config.socket_addr());

        let result = axum::serve(listener, router)
            .with_graceful_shutdown(wait_shutdown_signal())
            .await;

        if let Err(e) = result {
            error!("Server error: {e}");
        }
    }

    fn create_public_api_router(&self, state: &AppState) -> Router {
        let router = Router::new()
            .merge(api::common::health_check_router(state.clone()))
            .merge(api::hello::hello_router(state.clone()))
            .layer(TraceLayer::new_for_http());

        // Swagger UI is enabled only in debug mode.
        if self.config.debug_mode() {
            router.merge(
                SwaggerUi::new("/swagger-ui")
                    .url("/api-doc/openapi.json", ApiDoc::all(state.clone())),
            )
        } else {
            router
        }
    }
}

async fn wait_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Listening ctrl-c failed: {e}");
        }
    };

    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                error!("Listening terminate signal failed: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        () = ctrl_c => (),
        () = terminate => (),
    }

    info!("Shutdown signal received");
}
