//! # Entity Records and Mappers
//!
//! Fixed-shape records for the two entities, with explicit field-by-field
//! mapping between store documents and wire shapes. A stored document that
//! does not match the expected shape surfaces as a typed internal error,
//! never as a panic.

pub mod errors;
pub mod project;
pub mod user;

pub use errors::{MapError, MapResult};
pub use project::{ProjectOut, ProjectRecord};
pub use user::{UserOut, UserRecord};
