pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod session;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use server::{app_config, run_server};
pub use session::{HeaderSessionResolver, SessionResolver, UserSession};
pub use state::{AppState, CredentialSource, EnvCredential, StaticCredential};
