//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Seed the driver store and the team roster from configuration
//! - Create the Axum Router with every endpoint under the API base path
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Apply roster reloads while running
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc, RwLock};
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::StandingsConfig;
use crate::http::middleware::track_metrics;
use crate::http::request::request_span;
use crate::http::{drivers, status, teams};
use crate::observability::metrics;
use crate::standings::error::StandingsResult;
use crate::standings::ids::{IdGenerator, UuidIds};
use crate::standings::seed::seed_store;
use crate::standings::store::DriverStore;
use crate::standings::teams::SharedRoster;

/// Application state injected into handlers.
///
/// All store access goes through the lock, so mutations are serialized.
#[derive(Clone)]
pub struct AppState {
    pub drivers: Arc<RwLock<DriverStore>>,
    pub roster: SharedRoster,
}

impl AppState {
    /// Build the store and roster described by `config`.
    pub fn from_config(config: &StandingsConfig, ids: Arc<dyn IdGenerator>) -> StandingsResult<Self> {
        let mut store = DriverStore::new(ids).with_rerank_on_update(config.api.rerank_on_update);
        seed_store(&mut store, &config.seed)?;
        metrics::record_driver_count(store.len());

        Ok(Self {
            drivers: Arc::new(RwLock::new(store)),
            roster: SharedRoster::new(config.teams.clone()),
        })
    }
}

/// HTTP server for the standings API.
pub struct HttpServer {
    router: Router,
    state: AppState,
    config: StandingsConfig,
}

impl HttpServer {
    /// Create a server whose drivers get random UUID ids.
    pub fn new(config: StandingsConfig) -> StandingsResult<Self> {
        Self::with_id_generator(config, Arc::new(UuidIds))
    }

    /// Create a server with a custom id generator.
    pub fn with_id_generator(config: StandingsConfig, ids: Arc<dyn IdGenerator>) -> StandingsResult<Self> {
        let state = AppState::from_config(&config, ids)?;
        let router = Self::build_router(&config, state.clone());
        Ok(Self {
            router,
            state,
            config,
        })
    }

    fn api_routes() -> Router<AppState> {
        Router::new()
            .route("/drivers", get(drivers::list_drivers).post(drivers::create_driver))
            .route("/drivers/standings/{position}", get(drivers::driver_standing))
            .route(
                "/drivers/{id}",
                get(drivers::get_driver)
                    .put(drivers::update_driver)
                    .delete(drivers::delete_driver),
            )
            .route("/teams", get(teams::list_teams))
            .route("/teams/standings/{position}", get(teams::team_standing))
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &StandingsConfig, state: AppState) -> Router {
        let base_path = config.api.base_path.as_str();
        let routes = if base_path.is_empty() {
            Router::new().merge(Self::api_routes())
        } else {
            Router::new().nest(base_path, Self::api_routes())
        };

        routes
            .route("/status", get(status::get_status))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(RequestBodyLimitLayer::new(config.api.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Reloaded configurations arriving on `config_updates` replace the team
    /// roster; the server stops once `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<StandingsConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.api.base_path,
            "HTTP server starting"
        );

        let roster = self.state.roster.clone();
        let reloads = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                if roster.replace(config.teams) {
                    tracing::info!(teams = roster.current().len(), "Team roster updated");
                } else {
                    tracing::debug!("Team roster unchanged");
                }
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reloads.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Shared state, for inspecting the store from outside the server.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &StandingsConfig {
        &self.config
    }
}
