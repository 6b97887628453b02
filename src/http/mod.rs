//! HTTP endpoint subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → reset_timer handler (envelope decode → spec decode → dispatch)
//!     → success or mapped error status back to the caller
//! ```

pub mod server;

pub use server::HttpServer;
