//! Wire and normalized result types for the account API. Payloads carry
//! credentials, so they must never be logged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app_lib::AppError;

/// Current value of every rendered field, keyed by the field key. Serialized
/// as-is into the URL-encoded request body.
pub type FormValues = BTreeMap<&'static str, String>;

/// JSON envelope used by the account endpoints. Success and rejection bodies
/// share this shape; `error` decides which side is meaningful.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Normalized result of exactly one submission attempt. Every transport and
/// server failure is folded into a variant here; nothing downstream of the
/// client ever sees a raw error.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted the request; `data` is the optional payload.
    Accepted { data: Option<serde_json::Value> },
    /// The server replied and rejected the request.
    Rejected { message: String },
    /// No usable server reply (network failure, timeout, undecodable body).
    Unreachable { message: String },
}

impl SubmitOutcome {
    /// Folds a decoded envelope into the outcome it represents.
    pub fn from_envelope(envelope: ApiEnvelope) -> Self {
        if envelope.error {
            Self::Rejected {
                message: envelope.message.unwrap_or_default(),
            }
        } else {
            Self::Accepted {
                data: envelope.data,
            }
        }
    }

    /// Folds a transport-level failure into a resolved outcome. An `Http`
    /// error means the server did answer, so it counts as a rejection; every
    /// other variant never produced a reply.
    pub fn from_transport(error: AppError) -> Self {
        match error {
            AppError::Http { message, .. } => Self::Rejected { message },
            other => Self::Unreachable {
                message: other.to_string(),
            },
        }
    }
}
