//! Document schema registry for MoDocs.
//!
//! Declares, for each of the eleven document type tags, the editable field
//! shape the form editor and template renderer share, plus fixed sample
//! bodies used to seed previews.

mod registry;
mod samples;

pub use registry::{FieldInput, FieldSpec, fields_for};
pub use samples::sample_body;
