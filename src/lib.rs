//! opsdeck - terminal operator console.
//!
//! The crate is split the same way the binary behaves: `domain` holds the
//! wire-shaped data types, `application` is the headless core (panels, view
//! routing, notifications and remote-call orchestration), `infrastructure`
//! talks HTTP and loads configuration, and `presentation` is the thin
//! terminal surface that turns key presses into application actions.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
