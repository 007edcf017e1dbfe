//! Presentational form controls for Dioxus applications.
//!
//! Every component here is pure: it renders from its props alone, holds no
//! state of its own, and reports user interaction back through caller-supplied
//! event handlers.

pub mod components;

pub use components::*;
