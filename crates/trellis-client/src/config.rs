//! Endpoint configuration and process credentials.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the store username.
pub const USERNAME_VAR: &str = "TRELLIS_USERNAME";
/// Environment variable holding the store password.
pub const PASSWORD_VAR: &str = "TRELLIS_PASSWORD";

/// Errors reading process configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential variable is absent from the environment.
    /// Fatal at startup, never a per-request condition.
    #[error("{0} is not set in the environment")]
    MissingCredentials(&'static str),
}

/// Basic-auth credentials for the remote store.
///
/// Sourced from process configuration, never from caller input.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Credentials from explicit values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read both credential values from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username =
            std::env::var(USERNAME_VAR).map_err(|_| ConfigError::MissingCredentials(USERNAME_VAR))?;
        let password =
            std::env::var(PASSWORD_VAR).map_err(|_| ConfigError::MissingCredentials(PASSWORD_VAR))?;
        Ok(Self { username, password })
    }

    /// The username; also part of the cache key's credential scope.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where and how the executor talks to the remote store.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// SPARQL endpoint URL.
    pub sparql_url: String,
    /// Identifier-lookup URL stub; `{action}` is replaced per lookup.
    pub lookup_url_stub: String,
    /// Bounded request timeout so a submission cannot block a serving
    /// thread indefinitely.
    pub timeout: Duration,
    /// Fixed response-cache expiry.
    pub cache_ttl: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            sparql_url: "https://knowledgestore.fbk.eu/nwr/cars-hackathon/sparql".to_string(),
            lookup_url_stub: "https://knowledgestore.fbk.eu/nwr/cars-hackathon/{action}"
                .to_string(),
            timeout: Duration::from_secs(30),
            cache_ttl: Duration::from_secs(48 * 60 * 60),
        }
    }
}

impl EndpointConfig {
    /// Create a new builder for endpoint configuration.
    pub fn builder() -> EndpointConfigBuilder {
        EndpointConfigBuilder::default()
    }

    /// The lookup URL for one action segment.
    pub fn lookup_url(&self, action: &str) -> String {
        self.lookup_url_stub.replace("{action}", action)
    }
}

/// Builder for [`EndpointConfig`].
#[derive(Debug, Default)]
pub struct EndpointConfigBuilder {
    sparql_url: Option<String>,
    lookup_url_stub: Option<String>,
    timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl EndpointConfigBuilder {
    /// Set the SPARQL endpoint URL.
    pub fn sparql_url(mut self, url: impl Into<String>) -> Self {
        self.sparql_url = Some(url.into());
        self
    }

    /// Set the identifier-lookup URL stub.
    pub fn lookup_url_stub(mut self, stub: impl Into<String>) -> Self {
        self.lookup_url_stub = Some(stub.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the response-cache expiry.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Build the configuration, filling unset fields from the defaults.
    pub fn build(self) -> EndpointConfig {
        let defaults = EndpointConfig::default();
        EndpointConfig {
            sparql_url: self.sparql_url.unwrap_or(defaults.sparql_url),
            lookup_url_stub: self.lookup_url_stub.unwrap_or(defaults.lookup_url_stub),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            cache_ttl: self.cache_ttl.unwrap_or(defaults.cache_ttl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_unset_fields_from_defaults() {
        let config = EndpointConfig::builder()
            .sparql_url("http://localhost:9999/sparql")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.sparql_url, "http://localhost:9999/sparql");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.cache_ttl, Duration::from_secs(172_800));
    }

    #[test]
    fn lookup_url_substitutes_the_action_segment() {
        let config = EndpointConfig::builder()
            .lookup_url_stub("http://localhost:9999/{action}")
            .build();
        assert_eq!(config.lookup_url("resources"), "http://localhost:9999/resources");
    }

    #[test]
    fn credentials_debug_redacts_the_password() {
        let credentials = Credentials::new("user", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn missing_environment_credentials_fail_at_startup() {
        // The variables are not set in the test environment.
        std::env::remove_var(USERNAME_VAR);
        std::env::remove_var(PASSWORD_VAR);
        assert!(matches!(
            Credentials::from_env(),
            Err(ConfigError::MissingCredentials(USERNAME_VAR))
        ));
    }
}
