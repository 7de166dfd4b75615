pub mod config;
pub mod pipeline;
pub mod session;
pub mod transport;

pub use config::ConfigError;
pub use pipeline::PipelineError;
pub use session::SessionError;
pub use transport::TransportError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),

    #[error(transparent)]
    Session(#[from] session::SessionError),

    #[error(transparent)]
    Transport(#[from] transport::TransportError),
}
