//! Domain-level frontend features. Routes import these modules so view code
//! stays thin while validation and API handling live in dedicated areas.

pub(crate) mod auth;
