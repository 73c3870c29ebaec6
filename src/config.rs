//! Server configuration from the environment

/// Runtime configuration for the binary
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Whether to load the demo data set into an empty store at startup
    pub seed: bool,
}

impl Config {
    pub const DEFAULT_BIND_ADDR: &'static str = "127.0.0.1:3000";

    /// Read configuration from `POKEREVIEW_ADDR` and `POKEREVIEW_SEED`;
    /// missing variables fall back to defaults
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("POKEREVIEW_ADDR")
            .unwrap_or_else(|_| Self::DEFAULT_BIND_ADDR.to_string());
        let seed = std::env::var("POKEREVIEW_SEED")
            .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);
        Self { bind_addr, seed }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: Self::DEFAULT_BIND_ADDR.to_string(),
            seed: true,
        }
    }
}
