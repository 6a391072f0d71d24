//! Resume Model - Core resume data structures and validation
//!
//! This crate provides the resume aggregate edited by the UI layer and
//! consumed read-only by the export pipeline, together with export options
//! and the pure validation/completeness functions.

mod resume;
mod experience;
mod education;
mod skill;
mod certificate;
mod language;
mod options;
mod validate;
mod completeness;
mod error;

pub use resume::*;
pub use experience::*;
pub use education::*;
pub use skill::*;
pub use certificate::*;
pub use language::*;
pub use options::*;
pub use validate::*;
pub use completeness::*;
pub use error::*;
