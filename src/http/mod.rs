//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, middleware)
//!     → wait_times_handler (extract parkID, call upstream, reindex)
//!     → error.rs (map fetch failures to a 500 with the wrapped error text)
//!     → Send to client
//! ```

pub mod error;
pub mod server;

pub use error::HandlerError;
pub use server::HttpServer;
