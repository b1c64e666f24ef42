//! Host startup errors.

/// Errors that stop the host before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment setting could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: std::net::SocketAddr, source: std::io::Error },

    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
