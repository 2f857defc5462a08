//! Node configuration.
//!
//! A node is configured from a JSON document, for example:
//!
//! ```json
//! {
//!   "server_base_url": "https://node-b.example.org/fhir",
//!   "local_organization": "org-b",
//!   "local_user_thumbprints": [
//!     "9f2c...<128 hex digits>"
//!   ]
//! }
//! ```

use crate::identity::domain::{CertificateThumbprint, OrganizationId};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating node configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for [`NodeConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The server base URL is not an absolute http(s) URL.
    #[error("server base URL '{0}' must start with 'http://' or 'https://'")]
    InvalidServerBase(String),
}

/// Settings of a single federation node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    /// Absolute base URL under which this node serves resources.
    pub server_base_url: String,
    /// Organization hosted by this node.
    pub local_organization: OrganizationId,
    /// Client certificate thumbprints authenticated as local users.
    #[serde(default)]
    pub local_user_thumbprints: Vec<CertificateThumbprint>,
}

impl NodeConfig {
    /// Creates a configuration without local user thumbprints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerBase`] when the base URL is not an
    /// http(s) URL.
    pub fn new(
        server_base_url: impl Into<String>,
        local_organization: OrganizationId,
    ) -> Result<Self, ConfigError> {
        Self {
            server_base_url: server_base_url.into(),
            local_organization,
            local_user_thumbprints: Vec::new(),
        }
        .validated()
    }

    /// Adds a thumbprint authenticated as a local user.
    #[must_use]
    pub fn with_local_user_thumbprint(mut self, thumbprint: CertificateThumbprint) -> Self {
        if !self.local_user_thumbprints.contains(&thumbprint) {
            self.local_user_thumbprints.push(thumbprint);
        }
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::InvalidServerBase`] for invalid base URLs.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validated()
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`NodeConfig::from_json_str`].
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let document = read_config_file(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&document)
    }

    /// Returns the server base URL without a trailing slash.
    #[must_use]
    pub fn server_base(&self) -> &str {
        self.server_base_url.trim_end_matches('/')
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.server_base_url.trim();
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
        if !has_host {
            return Err(ConfigError::InvalidServerBase(self.server_base_url));
        }
        self.server_base_url = trimmed.trim_end_matches('/').to_owned();
        Ok(self)
    }
}

fn read_config_file(path: &Utf8Path) -> std::io::Result<String> {
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "configuration path must include a file name",
        )
    })?;
    let parent = path
        .parent()
        .filter(|candidate| !candidate.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
