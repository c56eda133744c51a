//! Common utilities for integration tests

use assert_cmd::Command;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use startup_tracker::config::ServerConfig;
use startup_tracker::dashboard::server::{create_router, DashboardServer};
use startup_tracker::registry::StartupRegistry;
use startup_tracker::sources::CandidateSource;
use tokio::task::JoinHandle;

/// Path to the `startup-tracker` binary built for this test run
#[allow(dead_code)]
pub fn tracker_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_startup-tracker"))
}

/// Command for `startup-tracker` with the environment isolated from the
/// developer's shell (no inherited `DATABASE_PATH`, no home directory).
#[allow(dead_code)]
pub fn tracker_command() -> Command {
    let mut cmd = Command::new(tracker_binary());
    cmd.env_remove("DATABASE_PATH")
        .env_remove("RUST_LOG")
        .env("HOME", "/nonexistent")
        .env("USERPROFILE", "/nonexistent");
    cmd
}

/// Dashboard served in-process on an ephemeral port.
/// The server task is aborted on drop.
#[allow(dead_code)]
pub struct TestDashboard {
    pub addr: SocketAddr,
    pub registry: Arc<StartupRegistry>,
    handle: JoinHandle<()>,
}

#[allow(dead_code)]
impl TestDashboard {
    pub async fn start(registry: Arc<StartupRegistry>, static_dir: PathBuf) -> Self {
        Self::start_with_sources(registry, static_dir, Vec::new()).await
    }

    pub async fn start_with_sources(
        registry: Arc<StartupRegistry>,
        static_dir: PathBuf,
        live_sources: Vec<Box<dyn CandidateSource>>,
    ) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir,
        };
        let server = DashboardServer::with_sources(config, registry.clone(), live_sources);
        let app = create_router(server.state());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self {
            addr,
            registry,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestDashboard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
