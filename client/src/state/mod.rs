//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Pages own the signals; components only read them.

pub mod password_form;
pub mod school;
