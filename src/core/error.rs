//! Server start-up errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load leptos configuration: {0}")]
    Config(#[from] leptos::config::errors::LeptosConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
