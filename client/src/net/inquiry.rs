//! Contact-inquiry delivery capability.
//!
//! Client-side (hydrate): the simulated submitter waits on a `gloo-timers`
//! sleep before resolving. Elsewhere (SSR, native tests) it resolves
//! immediately so callers stay deterministic.
//!
//! ERROR HANDLING
//! ==============
//! Delivery returns `Result` so a future network-backed submitter can report
//! rejection without changing the form's call site.

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

use std::future::Future;
use std::time::Duration;

use crate::state::contact::ContactFields;

/// Default latency of the simulated submission.
pub const DEFAULT_INQUIRY_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InquiryError {
    #[error("inquiry payload could not be encoded: {0}")]
    Encode(String),
    #[error("inquiry rejected: {0}")]
    Rejected(String),
}

/// Acknowledgement of a delivered inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InquiryReceipt {
    /// Size of the encoded JSON payload.
    pub payload_bytes: usize,
}

/// Deliver a contact inquiry somewhere.
pub trait InquirySubmitter {
    fn submit_inquiry(&self, fields: ContactFields) -> impl Future<Output = Result<InquiryReceipt, InquiryError>>;
}

/// Stand-in for a backend: encodes the payload, waits, and always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedInquiry {
    delay: Duration,
}

impl SimulatedInquiry {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedInquiry {
    fn default() -> Self {
        Self::new(DEFAULT_INQUIRY_DELAY)
    }
}

/// Encode an inquiry the way an HTTP submitter would post it.
pub(crate) fn encode_payload(fields: &ContactFields) -> Result<String, InquiryError> {
    serde_json::to_string(fields).map_err(|e| InquiryError::Encode(e.to_string()))
}

impl InquirySubmitter for SimulatedInquiry {
    fn submit_inquiry(&self, fields: ContactFields) -> impl Future<Output = Result<InquiryReceipt, InquiryError>> {
        let delay = self.delay;
        async move {
            let payload = encode_payload(&fields)?;
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(delay).await;
            #[cfg(not(feature = "hydrate"))]
            let _ = delay;
            leptos::logging::log!("simulated inquiry delivered ({} bytes)", payload.len());
            Ok(InquiryReceipt { payload_bytes: payload.len() })
        }
    }
}
