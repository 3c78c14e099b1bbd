//! Networking modules for REST calls to the backend.

pub mod api;
