//! Networking: REST calls to the authentication backend.

pub mod api;
