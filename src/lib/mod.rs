//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata. Centralizing these keeps network behavior consistent across
//! screens. Nothing in this layer logs, so credentials typed into the forms
//! cannot leak through it.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_form;
pub(crate) use errors::AppError;
