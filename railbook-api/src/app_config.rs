use serde::Deserialize;
use std::env;
use std::time::Duration;
use railbook_booking::DEFAULT_SESSION_TTL_SECS;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub booking: BookingConfig,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// Per-passenger fee in whole rupees
    pub service_fee: u32,
    /// Idle sessions older than this are dropped
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl BookingConfig {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

fn default_session_ttl_secs() -> u64 {
    DEFAULT_SESSION_TTL_SECS as u64
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    pub payment_delay_ms: u64,
    pub search_delay_ms: u64,
}

impl SimulationConfig {
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allow_any_origin")]
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allow_any_origin: default_allow_any_origin() }
    }
}

fn default_allow_any_origin() -> bool { true }

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 8080 },
            booking: BookingConfig {
                service_fee: 30,
                session_ttl_secs: default_session_ttl_secs(),
            },
            simulation: SimulationConfig {
                payment_delay_ms: 2000,
                search_delay_ms: 1000,
            },
            cors: CorsConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked developer overrides
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. RAILBOOK_SERVER__PORT=9000
            .add_source(config::Environment::with_prefix("RAILBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_toml() {
        let raw = r#"
            [server]
            port = 9000

            [booking]
            service_fee = 45

            [simulation]
            payment_delay_ms = 10
            search_delay_ms = 0
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.booking.service_fee, 45);
        assert_eq!(config.simulation.payment_delay(), Duration::from_millis(10));
        assert_eq!(config.booking.session_ttl(), Duration::from_secs(1800));
        assert!(config.cors.allow_any_origin);
    }
}
