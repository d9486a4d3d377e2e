//! HTTP server configuration object and helpers.

use petdex::config::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) json_limit: usize,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: (String, u16), json_limit: usize) -> Self {
        Self {
            bind_addr,
            json_limit,
        }
    }

    /// Derive the server configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self::new(settings.bind_addr(), settings.json_limit())
    }

    /// Return the address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }
}
