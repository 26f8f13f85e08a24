//! HTTP server configuration object and helpers.

use std::net::{SocketAddr, ToSocketAddrs};

use thiserror::Error;

use super::ServerSettings;

/// Errors raised while turning settings into a server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The host/port pair could not be resolved.
    #[error("failed to resolve bind address {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    /// The host resolved to no addresses.
    #[error("bind address {host}:{port} resolved to nothing")]
    NoAddress { host: String, port: u16 },
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) development: bool,
    pub(crate) seed_data: bool,
    pub(crate) password_cost: u32,
}

impl ServerConfig {
    /// Production configuration with seed data and the default bcrypt cost.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            development: false,
            seed_data: true,
            password_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Resolve loaded settings into a configuration.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, ConfigError> {
        let host = settings.host();
        let port = settings.port();
        let bind_addr = (host, port)
            .to_socket_addrs()
            .map_err(|source| ConfigError::Resolve {
                host: host.to_owned(),
                port,
                source,
            })?
            .next()
            .ok_or_else(|| ConfigError::NoAddress {
                host: host.to_owned(),
                port,
            })?;
        Ok(Self::new(bind_addr)
            .with_development(settings.development)
            .with_seed_data(settings.seed_data())
            .with_password_cost(settings.password_cost()))
    }

    /// Expose internal error text in 500 bodies.
    #[must_use]
    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    /// Load seed records at startup.
    #[must_use]
    pub fn with_seed_data(mut self, seed_data: bool) -> Self {
        self.seed_data = seed_data;
        self
    }

    /// bcrypt work factor for seeded passwords.
    #[must_use]
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
