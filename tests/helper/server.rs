//! Mock listing server

use mc_version_catalog::config::{CatalogConfig, EndpointsConfig, FetchConfig};
use mockito::{Mock, Server, ServerGuard};

pub const STABLE_PATH: &str = "/MinecraftDownload/";
pub const ASSETS_PATH: &str = "/assets/";
pub const FEED_PATH: &str = "/mcnweb.py";

/// Serves the stable listing, the assets listing and the nostalgia feed
pub struct ListingServer {
    pub server: ServerGuard,
}

impl ListingServer {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn config(&self) -> CatalogConfig {
        test_config(&self.server.url())
    }

    pub async fn serve(&mut self, path: &str, content_type: &str, body: String) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", content_type)
            .with_body(body)
            .expect(1)
            .create_async()
            .await
    }

    pub async fn fail(&mut self, path: &str, status: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .expect(1)
            .create_async()
            .await
    }

    pub async fn serve_stable(&mut self, body: String) -> Mock {
        self.serve(STABLE_PATH, "application/xml", body).await
    }

    pub async fn serve_assets(&mut self, body: String) -> Mock {
        self.serve(ASSETS_PATH, "application/xml", body).await
    }

    pub async fn serve_feed(&mut self, body: String) -> Mock {
        self.serve(FEED_PATH, "application/json", body).await
    }
}

/// Configuration pointing every endpoint at `base_url`
pub fn test_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        endpoints: EndpointsConfig {
            stable_listing: format!("{}{}", base_url, STABLE_PATH),
            assets_listing: format!("{}{}", base_url, ASSETS_PATH),
            nostalgia_feed: format!("{}{}", base_url, FEED_PATH),
        },
        fetch: FetchConfig { timeout_ms: 5_000 },
        ..CatalogConfig::default()
    }
}
