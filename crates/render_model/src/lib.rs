//! Render Model - Canonical rendered-resume representation
//!
//! The template renderer produces one direction-aware, display-ready
//! representation of a resume. Both visual serializers (PDF and HTML)
//! consume this single representation, so the two outputs cannot drift
//! apart section by section.

mod direction;
mod theme;
mod labels;
mod section;
mod renderer;

pub use direction::*;
pub use theme::*;
pub use labels::*;
pub use section::*;
pub use renderer::*;
