//! Server settings loaded via OrthoConfig.
//!
//! Values come from `--host`/`--port`/`--json-limit` flags, `PETDEX_*`
//! environment variables or a configuration file; the accessors apply the
//! defaults for anything left unset.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Interface bound when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when none is configured.
pub const DEFAULT_PORT: u16 = 8080;
/// Largest accepted JSON body, in bytes, when none is configured.
pub const DEFAULT_JSON_LIMIT: usize = 65_536;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PETDEX")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Maximum JSON request body size in bytes.
    pub json_limit: Option<usize>,
}

impl ServerSettings {
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    #[must_use]
    pub fn json_limit(&self) -> usize {
        self.json_limit.unwrap_or(DEFAULT_JSON_LIMIT)
    }

    /// Address tuple accepted by `HttpServer::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }
}
