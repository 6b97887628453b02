//! Envelope and forward spec decoding.
//!
//! # Responsibilities
//! - Decode the outer JSON envelope strictly (id, time, opaque payload)
//! - Decode the inner payload into a ForwardSpec on demand
//! - Keep the inner payload and body verbatim until they are needed

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;

use crate::relay::error::RelayError;

/// Outer JSON envelope received on the relay endpoint.
///
/// `id` and `time` are logged and otherwise unused; no uniqueness or ordering
/// is enforced on them. The envelope lives only long enough for the inner
/// payload to be extracted.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub id: String,
    pub time: i64,
    /// Inner payload, preserved verbatim until the forwarder decodes it.
    pub request: Box<RawValue>,
}

impl Envelope {
    /// Decode raw request-body bytes into an envelope.
    pub fn decode(bytes: &[u8]) -> Result<Self, RelayError> {
        serde_json::from_slice(bytes).map_err(RelayError::EnvelopeDecode)
    }

    /// Decode the opaque inner payload into a forward spec.
    pub fn forward_spec(&self) -> Result<ForwardSpec, RelayError> {
        serde_json::from_str(self.request.get()).map_err(RelayError::SpecDecode)
    }
}

/// Declarative description of the outbound request to construct.
#[derive(Debug, Deserialize)]
pub struct ForwardSpec {
    pub url: String,
    pub method: String,
    /// Header map; duplicate keys overwrite, iteration order is unspecified.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Optional body, forwarded as its raw JSON text with no content-type
    /// inference.
    pub body: Option<Box<RawValue>>,
}

impl ForwardSpec {
    /// Raw body bytes to forward, if any. An absent or empty body means the
    /// outbound request carries no body at all.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.body
            .as_deref()
            .map(|raw| raw.get().as_bytes())
            .filter(|bytes| !bytes.is_empty())
    }
}
