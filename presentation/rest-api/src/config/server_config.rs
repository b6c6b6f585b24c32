use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// HTTP listener address.
///
/// Environment variables:
/// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
/// - SERVICE_PORT: Port to bind (default: 8000, also used when unparseable)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Self {
        Self {
            ip: ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
            port: port
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
