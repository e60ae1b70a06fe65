//! Core types for the Eddy fluid solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared across the workspace: step identifiers, the field and
//! wall rules that drive the boundary enforcer, the impulse commands
//! external callers inject between steps, and the per-step error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod field;
pub mod id;

pub use command::Impulse;
pub use error::{ReadError, StepError};
pub use field::{Boundary, FieldKind};
pub use id::TickId;
