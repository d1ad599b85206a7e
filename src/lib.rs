pub mod config;
pub mod error;
pub mod relay;
pub mod server;

pub use config::AppConfig;
pub use error::RelayError;
pub use relay::{FluxClient, GenerateResponse, GenerationRequest};
pub use server::build_router;
