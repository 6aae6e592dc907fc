//! Graph generation settings and the simulated server endpoint.
//!
//! Everything here has a default, so a YAML file is only needed to change
//! pause times or the transfer annotations.

use serde::Deserialize;

use crate::utils::duration::parse_duration_to_seconds;

/// Settings that shape the generated traffic graph
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    /// Candidate wait times for the entry pause, one is picked per replay
    pub entry_pause: Vec<String>,
    /// Fixed wait time before the replay loops back to start
    pub exit_pause: String,
    /// Transfer kind written on every transfer node
    pub transfer_type: String,
    /// Wire protocol written on every transfer node
    pub protocol: String,
    pub log_level: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            entry_pause: (1..=15).map(|seconds| seconds.to_string()).collect(),
            exit_pause: "60".to_string(),
            transfer_type: "get".to_string(),
            protocol: "tcp".to_string(),
            log_level: None,
        }
    }
}

impl GraphConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.entry_pause.is_empty() {
            return Err(ValidationError::InvalidPause(
                "entry_pause must list at least one wait time".to_string(),
            ));
        }
        self.entry_pause_seconds()?;
        self.exit_pause_seconds()?;

        if self.transfer_type.trim().is_empty() {
            return Err(ValidationError::InvalidTransfer(
                "transfer_type cannot be empty".to_string(),
            ));
        }
        if self.protocol.trim().is_empty() {
            return Err(ValidationError::InvalidTransfer(
                "protocol cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Entry pause candidates in seconds, in configured order
    pub fn entry_pause_seconds(&self) -> Result<Vec<u64>, ValidationError> {
        self.entry_pause
            .iter()
            .map(|value| {
                parse_duration_to_seconds(value)
                    .map_err(|e| ValidationError::InvalidPause(format!("entry_pause: {}", e)))
            })
            .collect()
    }

    /// Exit pause in seconds
    pub fn exit_pause_seconds(&self) -> Result<u64, ValidationError> {
        parse_duration_to_seconds(&self.exit_pause)
            .map_err(|e| ValidationError::InvalidPause(format!("exit_pause: {}", e)))
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid pause configuration: {0}")]
    InvalidPause(String),
    #[error("Invalid transfer configuration: {0}")]
    InvalidTransfer(String),
}

/// Errors raised while parsing a `host:port` server argument
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EndpointError {
    #[error("Server '{0}' must be given as host:port")]
    MissingPort(String),
    #[error("Server '{0}' has an empty host")]
    EmptyHost(String),
    #[error("Server '{value}' has an invalid port '{port}'")]
    InvalidPort { value: String, port: String },
}

/// The server that replayed transfers are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServerEndpoint {
    /// Parse a `host:port` string, splitting on the last colon
    pub fn parse(value: &str) -> Result<Self, EndpointError> {
        let (host, port) = value
            .rsplit_once(':')
            .ok_or_else(|| EndpointError::MissingPort(value.to_string()))?;

        if host.is_empty() {
            return Err(EndpointError::EmptyHost(value.to_string()));
        }

        let port = port.parse::<u16>().map_err(|_| EndpointError::InvalidPort {
            value: value.to_string(),
            port: port.to_string(),
        })?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    /// Value of the `peers` attribute on the start node
    pub fn peers(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl std::str::FromStr for ServerEndpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ServerEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.entry_pause_seconds().unwrap(), (1..=15).collect::<Vec<u64>>());
        assert_eq!(config.exit_pause_seconds().unwrap(), 60);
        assert_eq!(config.transfer_type, "get");
        assert_eq!(config.protocol, "tcp");
    }

    #[test]
    fn test_validate_rejects_bad_pauses() {
        let mut config = GraphConfig::default();
        config.entry_pause.clear();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPause(_))));

        let mut config = GraphConfig::default();
        config.exit_pause = "later".to_string();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPause(_))));

        let mut config = GraphConfig::default();
        config.entry_pause = vec!["5s".to_string(), "often".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_transfer_fields() {
        let mut config = GraphConfig::default();
        config.protocol = " ".to_string();
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTransfer(_))));
    }

    #[test]
    fn test_endpoint_parse() {
        let endpoint = ServerEndpoint::parse("server1:443").unwrap();
        assert_eq!(endpoint.host, "server1");
        assert_eq!(endpoint.port, 443);
        assert_eq!(endpoint.peers(), "server1:443");
        assert_eq!(endpoint.to_string(), "server1:443");
    }

    #[test]
    fn test_endpoint_parse_errors() {
        assert_eq!(
            ServerEndpoint::parse("server1"),
            Err(EndpointError::MissingPort("server1".to_string()))
        );
        assert_eq!(
            ServerEndpoint::parse(":80"),
            Err(EndpointError::EmptyHost(":80".to_string()))
        );
        assert!(matches!(
            ServerEndpoint::parse("server1:https"),
            Err(EndpointError::InvalidPort { .. })
        ));
        assert!(ServerEndpoint::parse("server1:").is_err());
        assert!(ServerEndpoint::parse("server1:70000").is_err());
    }
}
