//! Upstream theme-park API subsystem.
//!
//! # Data Flow
//! ```text
//! park identifier (route path segment, verbatim)
//!     → client.rs (GET {base_url}/parks/{parkID}/waittime, bounded timeouts)
//!     → types.rs (deserialize into Vec<Attraction>)
//!     → handler reindexes by attraction ID
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per invocation; no retry, no caching
//! - The response body is read on every path so the connection is released
//!   whether the call succeeded or not
//! - Failures are wrapped with a prefix naming the stage that failed

pub mod client;
pub mod types;

pub use client::{FetchError, WaitTimeClient};
pub use types::{Attraction, AttractionMeta, ReturnTime, WaitTimeMap};
