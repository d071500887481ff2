use std::env;
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, warn};

use crate::config::ConfigError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| {
            debug!("APP_HOST not set, using default: 127.0.0.1");
            "127.0.0.1".to_string()
        });
        let port = match env::var("APP_PORT") {
            Ok(s) => s.parse().unwrap_or_else(|_| {
                warn!("Invalid APP_PORT value {:?}, using default: 8080", s);
                8080
            }),
            Err(_) => 8080,
        };
        AppConfig { host, port }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            ConfigError::InvalidValue(format!("APP_HOST {:?} is not an IP address: {}", self.host, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_socket_addr() {
        let addr = AppConfig::default().socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_host() {
        let config = AppConfig {
            host: "not-an-ip".to_string(),
            port: 80,
        };
        assert!(matches!(config.socket_addr(), Err(ConfigError::InvalidValue(_))));
    }
}
