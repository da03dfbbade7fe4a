//! The web service's configuration, read from the environment

use std::env;
use std::net::SocketAddr;

pub const ADDR_VAR: &str = "BANK_LEDGER_ADDR";
pub const DEMO_VAR: &str = "BANK_LEDGER_DEMO";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// **Start-up settings of the web service**
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    /// Where to listen
    pub addr: SocketAddr,
    /// Whether to start with the demo accounts
    pub seed_demo_data: bool,
}

impl ServiceConfig {
    /// Reads [`ADDR_VAR`] and [`DEMO_VAR`].
    ///
    /// Missing variables fall back to the defaults,
    /// and so do malformed addresses, with a warning.
    pub fn from_env() -> Self {
        Self::from_values(env::var(ADDR_VAR).ok(), env::var(DEMO_VAR).ok())
    }

    fn from_values(addr: Option<String>, demo: Option<String>) -> Self {
        ServiceConfig {
            addr: parse_addr(addr),
            seed_demo_data: parse_flag(demo),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn parse_addr(addr: Option<String>) -> SocketAddr {
    match addr {
        None => default_addr(),
        Some(addr) => addr.trim().parse().unwrap_or_else(|_| {
            log::warn!(
                "{} could not be parsed: \"{}\"; using default: {}",
                ADDR_VAR,
                addr,
                DEFAULT_ADDR
            );
            default_addr()
        }),
    }
}

/// Everything except an explicit "off" turns seeding on.
fn parse_flag(flag: Option<String>) -> bool {
    match flag {
        None => true,
        Some(flag) => !matches!(
            flag.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServiceConfig::from_values(None, None);

        assert_eq!(DEFAULT_ADDR, config.addr.to_string());
        assert!(config.seed_demo_data);
    }

    #[test]
    fn valid_addr_is_used() {
        let config = ServiceConfig::from_values(Some("0.0.0.0:3333".to_string()), None);

        assert_eq!("0.0.0.0:3333", config.addr.to_string());
    }

    #[test]
    fn bad_addr_falls_back_to_default() {
        let config = ServiceConfig::from_values(Some("localhost:port".to_string()), None);

        assert_eq!(DEFAULT_ADDR, config.addr.to_string());
    }

    #[test]
    fn demo_data_can_be_switched_off() {
        for off in ["0", "false", "NO", " off "] {
            assert!(!ServiceConfig::from_values(None, Some(off.to_string())).seed_demo_data);
        }
        for on in ["1", "true", "yes"] {
            assert!(ServiceConfig::from_values(None, Some(on.to_string())).seed_demo_data);
        }
    }
}
