//! # Companion Core
//!
//! Backend core for a mental-health companion: classifies free-text
//! messages into concern categories via regex matching, estimates how much
//! empathetic framing a reply needs from coarse sentiment heuristics, and
//! composes a templated reply bundling canned resource lists.
//!
//! The crate is pure computation: no I/O, no persistence, no shared mutable
//! state. The surrounding service layer owns routing, session lifecycle,
//! and input validation; the sentiment primitive is consumed through the
//! [`guide::SentimentModel`] trait.
//!
//! ```
//! use companion_core::Companion;
//!
//! let companion = Companion::new();
//! let response = companion.respond("I'm having a panic attack");
//! assert_eq!(response.response_type.label(), "anxiety_support");
//! ```

pub mod guide;

pub use guide::{Companion, CompanionResponse, ResponseKind, SAFETY_NOTE};

#[cfg(test)]
mod tests;
