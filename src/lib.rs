//! Park Wait-Time Proxy
//!
//! A small reverse-proxy endpoint built with Tokio and Axum: it accepts a
//! park identifier, fetches the live attraction wait times from the upstream
//! theme-park API, reindexes the list by attraction ID, and returns the map
//! as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │               WAIT-TIME PROXY                │
//!                         │                                              │
//!   GET /{parkID}/        │  ┌─────────┐    ┌──────────────────────┐     │
//!   waittimes ────────────┼─▶│  http   │───▶│  upstream::client    │─────┼──▶ api.themeparks.wiki
//!                         │  │ server  │    │  (reqwest, timeouts) │     │
//!                         │  └────┬────┘    └──────────┬───────────┘     │
//!                         │       │                    │                 │
//!                         │       ▼                    ▼                 │
//!   200 {id: Attraction}  │  ┌─────────┐    ┌──────────────────────┐     │
//!   ◀─────────────────────┼──│ reshape │◀───│  upstream::types     │     │
//!                         │  │ by id   │    │  (Attraction model)  │     │
//!                         │  └─────────┘    └──────────────────────┘     │
//!                         │                                              │
//!                         │  ┌────────────────────────────────────────┐  │
//!                         │  │         Cross-Cutting Concerns         │  │
//!                         │  │  ┌─────────┐  ┌──────────────────────┐ │  │
//!                         │  │  │ config  │  │    observability     │ │  │
//!                         │  │  │         │  │  (logging, metrics)  │ │  │
//!                         │  │  └─────────┘  └──────────────────────┘ │  │
//!                         │  └────────────────────────────────────────┘  │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! There is deliberately no retry, caching, or fan-out: a single upstream
//! failure produces a single handler failure.

pub mod config;
pub mod http;
pub mod observability;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use upstream::{Attraction, WaitTimeClient};
