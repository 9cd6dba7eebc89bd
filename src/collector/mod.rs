//! Configuration-driven wiring for a pre-built event-collection server.
//!
//! The wrapped server library is an opaque collaborator behind the
//! `EventBackend` trait; this module only carries static options to it and
//! registers endpoints. Startup failures propagate unmodified — there is no
//! retry and no recovery beyond what the wrapped library does itself.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TimelineError, TimelineResult};

/// Static options handed to the wrapped server. Keys mirror the
/// configuration map format consumed by the collector family of tools.
/// No validation happens beyond deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(rename = "mongo-host")]
    pub mongo_host: String,
    #[serde(rename = "mongo-port")]
    pub mongo_port: u16,
    #[serde(rename = "mongo-database")]
    pub mongo_database: String,
    #[serde(rename = "mongo-username")]
    pub mongo_username: Option<String>,
    #[serde(rename = "mongo-password")]
    pub mongo_password: Option<String>,
    #[serde(rename = "http-port")]
    pub http_port: u16,
    #[serde(rename = "udp-port")]
    pub udp_port: Option<u16>,
}

impl ServerConfig {
    /// Collector defaults: event ingest over HTTP and UDP.
    #[must_use]
    pub fn collector_defaults() -> Self {
        Self {
            mongo_host: "127.0.0.1".to_owned(),
            mongo_port: 27017,
            mongo_database: "safety_framework".to_owned(),
            mongo_username: None,
            mongo_password: None,
            http_port: 1080,
            udp_port: Some(1180),
        }
    }

    /// Evaluator defaults: query endpoint only, no datagram listener.
    #[must_use]
    pub fn evaluator_defaults() -> Self {
        Self {
            http_port: 1081,
            udp_port: None,
            ..Self::collector_defaults()
        }
    }
}

/// Parses a configuration map document.
pub fn parse_config(json: &str) -> TimelineResult<ServerConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Endpoints a backend exposes once started.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EndpointRegistry {
    endpoints: Vec<String>,
}

impl EndpointRegistry {
    pub fn put(&mut self, path: &str) {
        self.endpoints.push(path.to_owned());
    }

    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }
}

/// The pre-built server library this crate only parameterizes.
pub trait EventBackend {
    /// Registers the endpoints this backend serves.
    fn register(&mut self, registry: &mut EndpointRegistry);

    /// Starts listening with the given options.
    fn start(
        &mut self,
        config: &ServerConfig,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Registers endpoints, then starts the backend with `config`.
pub fn run_server<B: EventBackend>(
    backend: &mut B,
    config: &ServerConfig,
) -> TimelineResult<EndpointRegistry> {
    let mut registry = EndpointRegistry::default();
    backend.register(&mut registry);
    debug!(
        endpoints = registry.endpoints().len(),
        http_port = config.http_port,
        "starting event server"
    );
    backend.start(config).map_err(TimelineError::Server)?;
    Ok(registry)
}

/// Starts an event collector with its stock configuration.
pub fn run_collector<B: EventBackend>(backend: &mut B) -> TimelineResult<EndpointRegistry> {
    run_server(backend, &ServerConfig::collector_defaults())
}

/// Starts an event evaluator with its stock configuration.
pub fn run_evaluator<B: EventBackend>(backend: &mut B) -> TimelineResult<EndpointRegistry> {
    run_server(backend, &ServerConfig::evaluator_defaults())
}
