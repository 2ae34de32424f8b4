//! Core message transformation pipeline for Veil
//!
//! Pure, synchronous transforms applied to outgoing chat messages:
//!
//! - [`emoji`]: `:code:` token substitution
//! - [`template`]: embedding text into language-specific code skeletons
//! - [`cloak`]: reversible base64 display encoding
//! - [`pipeline`]: the mode-driven combination of the three
//!
//! No I/O, no async, no shared mutable state. Template selection takes
//! an injected [`rand::Rng`] so callers control determinism.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cloak;
pub mod emoji;
pub mod pipeline;
pub mod template;

pub use pipeline::{LocalEcho, Outgoing, SessionMode, transform};
pub use template::{Language, UnknownLanguage};
