//! Common test utilities - in-process server harness

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use envpage::{Config, Page, RuntimeEnv, Server};
use reqwest::Client;
use tokio::task::JoinHandle;

/// Test harness that runs an envpage server on a random port
pub struct EnvPageTest {
    pub addr: SocketAddr,
    pub client: Client,
    server: Arc<Server>,
    _handle: JoinHandle<()>,
}

impl EnvPageTest {
    /// Start a server for the given runtime environment
    pub async fn start(runtime: RuntimeEnv) -> Result<Self> {
        // Find a random available port
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);

        let config = Config { bind_addr: addr };
        let server = Arc::new(Server::new(config, Page::resolve(&runtime)));
        let server_clone = server.clone();

        // Spawn the server in a background task
        let handle = tokio::spawn(async move {
            if let Err(e) = server_clone.run().await {
                eprintln!("Server error: {}", e);
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;

        // Poll until server is ready (max 2 seconds)
        let mut ready = false;
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if client
                .get(format!("http://{}/health", addr))
                .send()
                .await
                .is_ok()
            {
                ready = true;
                break;
            }
        }

        if !ready {
            panic!("Server failed to start within 2 seconds");
        }

        Ok(Self {
            addr,
            client,
            server,
            _handle: handle,
        })
    }

    /// Start a server with only APP_ENV set
    pub async fn with_app_env(app_env: &str) -> Result<Self> {
        Self::start(RuntimeEnv {
            app_env: Some(app_env.to_string()),
            ..RuntimeEnv::default()
        })
        .await
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }

    /// Address the server was configured with
    pub fn bind_addr(&self) -> SocketAddr {
        self.server.bind_addr()
    }

    /// Shutdown the server gracefully
    pub fn shutdown(&self) {
        self.server.shutdown();
    }
}

impl Drop for EnvPageTest {
    fn drop(&mut self) {
        self.server.shutdown();
    }
}
