use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

/// Sentinel left in place by the sample `.env` file when the user never
/// configured a real token.
pub const TOKEN_PLACEHOLDER: &str = "your_hf_token_here";

const LISTEN_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub hf_token: String,
    pub asset_dir: PathBuf,
}

impl AppConfig {
    /// Reads the single recognized environment variable, `HF_TOKEN`. A missing
    /// token is a reportable state, not a startup failure: the server still
    /// runs and `/generate` answers 401 until a real token is supplied.
    pub fn from_env() -> Self {
        let hf_token = env::var("HF_TOKEN").unwrap_or_default();

        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), LISTEN_PORT),
            hf_token,
            asset_dir: PathBuf::from("views"),
        }
    }

    /// True when a real token is present: non-empty and not the placeholder.
    pub fn token_configured(&self) -> bool {
        !self.hf_token.is_empty() && self.hf_token != TOKEN_PLACEHOLDER
    }
}
