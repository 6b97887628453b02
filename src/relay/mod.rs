//! Request relay subsystem.
//!
//! # Data Flow
//! ```text
//! raw POST body bytes
//!     → envelope.rs (strict JSON decode, inner payload kept verbatim)
//!     → envelope.rs (decode inner payload into ForwardSpec)
//!     → forwarder.rs (construct outbound request, apply headers)
//!     → forwarder.rs (dispatch once, drop the response unread)
//! ```
//!
//! # Design Decisions
//! - Single linear pass with early exit; no state survives a call
//! - The inner payload stays opaque until the forwarder needs it, so a
//!   malformed spec is reported distinctly from a malformed envelope
//! - The forwarded response is deliberately discarded (fire-and-forget);
//!   relaying it back is a separate decision that has not been made

pub mod envelope;
pub mod error;
pub mod forwarder;

pub use envelope::{Envelope, ForwardSpec};
pub use error::RelayError;
pub use forwarder::Forwarder;
