//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use driver_standings::config::StandingsConfig;
use driver_standings::http::{AppState, HttpServer};
use driver_standings::lifecycle::Shutdown;
use driver_standings::standings::{IdGenerator, SeedDriver, SequentialIds, TeamRoster};

/// A running server on an ephemeral port. Shuts down when dropped.
pub struct TestServer {
    /// Root URL, e.g. `http://127.0.0.1:41234`.
    pub root: String,
    /// Root URL plus the API base path.
    pub api: String,
    pub state: AppState,
    pub config_tx: mpsc::UnboundedSender<StandingsConfig>,
    shutdown: Shutdown,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server whose created drivers get ids `driver-1`, `driver-2`, ...
pub async fn start_server(config: StandingsConfig) -> TestServer {
    start_server_with_ids(config, Arc::new(SequentialIds::new("driver"))).await
}

pub async fn start_server_with_ids(config: StandingsConfig, ids: Arc<dyn IdGenerator>) -> TestServer {
    let base_path = config.api.base_path.clone();
    let server = HttpServer::with_id_generator(config, ids).expect("server should build");
    let state = server.state().clone();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let (config_tx, config_updates) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let _ = server.run(listener, config_updates, server_shutdown).await;
    });

    let root = format!("http://{}", addr);
    TestServer {
        api: format!("{}{}", root, base_path),
        root,
        state,
        config_tx,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

fn seed(id: &str, name: &str, time: &str, points: u32) -> SeedDriver {
    SeedDriver {
        id: Some(id.to_string()),
        name: name.to_string(),
        time: time.to_string(),
        points,
    }
}

/// Three drivers with fixed ids and two teams.
///
/// Standings: senna (30), prost (20), mansell (10).
/// Teams: McLaren (50), Williams (10).
pub fn small_config() -> StandingsConfig {
    let mut config = StandingsConfig::default();
    config.seed = vec![
        seed("prost", "Alain Prost", "1:31.200", 20),
        seed("mansell", "Nigel Mansell", "1:31.900", 10),
        seed("senna", "Ayrton Senna", "1:30.100", 30),
    ];
    config.teams = vec![
        TeamRoster {
            name: "Williams".into(),
            drivers: vec!["Nigel Mansell".into(), "Nelson Piquet".into()],
        },
        TeamRoster {
            name: "McLaren".into(),
            drivers: vec!["Ayrton Senna".into(), "Alain Prost".into()],
        },
    ];
    config
}
