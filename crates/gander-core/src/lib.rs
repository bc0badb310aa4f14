//! Core vocabulary for the gander front end.
//!
//! This crate holds the pieces the checking engine is built from:
//!
//! - [`Span`]: source locations carried by diagnostics
//! - [`CheckError`]: the checker's error taxonomy
//! - [`types`]: resolved type descriptors and their predicate set
//! - [`constant`]: exact arbitrary-precision literal values

pub mod constant;
mod error;
mod span;
pub mod types;

pub use constant::{Complex, Kind, Value};
pub use error::CheckError;
pub use span::Span;
pub use types::{BasicKind, ChanDir, KindInfo, MethodSet, Type, TypeKind};
