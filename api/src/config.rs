use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL URL; todos are kept in memory when unset
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(port = %raw, "Invalid PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(host = %raw, "Invalid HOST, binding all interfaces");
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            }),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host,
            port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
