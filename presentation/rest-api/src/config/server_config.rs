use std::env;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            ip: non_blank(ip).unwrap_or_else(|| "127.0.0.1".to_string()),
            port: non_blank(port).unwrap_or_else(|| "8080".to_string()),
        }
    }

    /// "ip:port" for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_variables_are_missing() {
        let config = ServerConfig::from_values(None, None);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_treat_blank_values_as_missing() {
        let config = ServerConfig::from_values(Some(" ".to_string()), Some(String::new()));

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_bind_to_configured_ip_and_port() {
        let config =
            ServerConfig::from_values(Some("0.0.0.0".to_string()), Some("9002".to_string()));

        assert_eq!(config.bind_address(), "0.0.0.0:9002");
    }
}
