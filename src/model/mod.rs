//! Resume data model.
//!
//! [`Resume`] is the record shared by every stage of the pipeline and by the
//! external tailoring service.

mod resume;

pub use resume::Resume;
