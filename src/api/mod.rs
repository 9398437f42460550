//! HTTP access to the remote API
//!
//! - `request`: endpoint descriptors (method, path, auth, contract) and requests
//! - `endpoints`: the static endpoint table
//! - `dispatcher`: credential injection, sending, outcome normalization

mod dispatcher;
pub mod endpoints;
mod request;

pub use dispatcher::{RawResponse, RequestDispatcher};
pub use request::{Auth, Contract, Endpoint, Request};
