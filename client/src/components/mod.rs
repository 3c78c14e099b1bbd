//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure render functions over caller-owned state: the hosting
//! page supplies `Signal` props and callbacks, and components forward DOM
//! events upward without interpreting them.

pub mod info_card;
pub mod password_change_modal;
