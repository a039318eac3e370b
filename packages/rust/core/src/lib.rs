//! Core wizard orchestration and domain logic for MoDocs.
//!
//! This crate ties the schema, validation, and storage layers together into
//! the interactive flows: the four-step wizard state machine, the
//! save-after-quiet-period auto-save policy, and the document manager
//! service.

pub mod autosave;
pub mod manager;
pub mod wizard;

pub use autosave::{AutosavePolicy, AutosaveTimer, Clock, SystemClock};
pub use manager::DocumentManager;
pub use wizard::{GENERATE_DELAY, Wizard, WizardStep};
