//! Account-entry feature: static form metadata, client-side validation, the
//! submission state machine, and the API client. Screens render through
//! [`form::AuthForm`]; everything else in here is pure and testable off the
//! browser.
//!
//! Flow overview: the controller validates against the rendered field list,
//! dispatches one POST through the client, and applies the normalized outcome
//! to the state machine, which owns the button, spinner, and result banners.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod fields;
#[cfg(target_arch = "wasm32")]
pub(crate) mod form;
pub(crate) mod submission;
pub(crate) mod types;
pub(crate) mod validate;
