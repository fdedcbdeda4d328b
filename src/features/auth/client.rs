//! API client for the account endpoints. Every call resolves to a
//! [`SubmitOutcome`]; transport failures are folded in rather than escaping
//! to the UI as raw errors. Request bodies carry credentials and must never
//! be logged.

use crate::app_lib::post_form;
use crate::features::auth::types::{ApiEnvelope, FormValues, SubmitOutcome};

/// Submits the form once to `path` under the configured API base.
///
/// One URL-encoded HTTP POST per call, no retries. The caller keeps at most
/// one submission in flight per form.
pub async fn submit(path: &str, values: &FormValues) -> SubmitOutcome {
    match post_form::<_, ApiEnvelope>(path, values).await {
        Ok(envelope) => SubmitOutcome::from_envelope(envelope),
        Err(error) => SubmitOutcome::from_transport(error),
    }
}
