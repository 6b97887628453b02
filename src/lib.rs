//! JSON-envelope HTTP request relay.
//!
//! Accepts a JSON-wrapped request descriptor on `POST /reset-timer` and
//! replays it as exactly one outbound HTTP request to the declared target,
//! discarding the forwarded response. Stateless; every call is independent.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────────┐
//!                     │                 WEBHOOK RELAY                  │
//!                     │                                                │
//!   POST /reset-timer │  ┌─────────┐    ┌──────────┐    ┌───────────┐ │
//!   ──────────────────┼─▶│  http   │───▶│ envelope │───▶│ forwarder │─┼──▶ Target
//!                     │  │ server  │    │ decoder  │    │ dispatch  │ │
//!                     │  └─────────┘    └──────────┘    └───────────┘ │
//!                     │                                                │
//!                     │  ┌──────────────────────────────────────────┐ │
//!                     │  │         Cross-Cutting Concerns            │ │
//!                     │  │    ┌─────────┐       ┌──────────────┐    │ │
//!                     │  │    │ config  │       │ observability │    │ │
//!                     │  │    └─────────┘       └──────────────┘    │ │
//!                     │  └──────────────────────────────────────────┘ │
//!                     └───────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use relay::{Envelope, ForwardSpec, Forwarder, RelayError};
