//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ProxyConfig::default() (fixed service contract)
//!     → validation.rs (semantic checks at startup)
//!     → ProxyConfig (validated, immutable)
//!     → handed to HttpServer / WaitTimeClient
//! ```
//!
//! # Design Decisions
//! - The service has no flag or env-var configuration surface; the config is
//!   an explicit object constructed in code, so handlers stay unit-testable
//!   with an injected upstream address.
//! - Validation separates syntactic (serde) from semantic checks and reports
//!   all errors, not just the first.

pub mod schema;
pub mod validation;

pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProxyConfig;
pub use schema::UpstreamConfig;
