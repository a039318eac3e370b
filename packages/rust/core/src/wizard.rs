//! The four-step document wizard state machine.
//!
//! `SelectType (1) → SelectTone (2) → FillDetails (3) → Preview (4)`,
//! linear, no skip-ahead. Forward transitions are gated by validation; a
//! refused transition leaves the step unchanged and records the error map
//! for inline display.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use modocs_shared::{
    Document, DocumentBody, DocumentKind, DocumentStatus, Result, Tone,
};
use modocs_validation::{FieldErrors, validate, validate_type_selection};

/// Simulated generation pause applied between a successful `generate` and
/// showing the preview.
pub const GENERATE_DELAY: Duration = Duration::from_millis(600);

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    SelectType,
    SelectTone,
    FillDetails,
    Preview,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            Self::SelectType => 1,
            Self::SelectTone => 2,
            Self::FillDetails => 3,
            Self::Preview => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SelectType => "Document Type",
            Self::SelectTone => "Tone",
            Self::FillDetails => "Details",
            Self::Preview => "Preview",
        }
    }
}

/// Wizard state: the working document plus step, errors, and dirtiness.
pub struct Wizard {
    step: WizardStep,
    doc: Option<Document>,
    errors: FieldErrors,
    editing_existing: bool,
    dirty: bool,
    generated: bool,
    author: String,
    default_tone: Tone,
}

impl Wizard {
    /// Start a fresh wizard at step 1.
    pub fn new(author: impl Into<String>, default_tone: Tone) -> Self {
        Self {
            step: WizardStep::SelectType,
            doc: None,
            errors: FieldErrors::new(),
            editing_existing: false,
            dirty: false,
            generated: false,
            author: author.into(),
            default_tone,
        }
    }

    /// Edit an existing document: pre-seed everything and jump straight to
    /// the details step.
    pub fn edit(doc: Document) -> Self {
        let author = doc.author.clone();
        let default_tone = doc.tone;
        Self {
            step: WizardStep::FillDetails,
            doc: Some(doc),
            errors: FieldErrors::new(),
            editing_existing: true,
            dirty: false,
            generated: false,
            author,
            default_tone,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn document(&self) -> Option<&Document> {
        self.doc.as_ref()
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        self.doc.as_ref().map(Document::kind)
    }

    pub fn is_editing_existing(&self) -> bool {
        self.editing_existing
    }

    /// Select (or switch) the document type. Switching type pre-completion
    /// starts a new in-progress document with a fresh id; while editing an
    /// existing document the id and creation time are preserved.
    pub fn select_kind(&mut self, kind: DocumentKind, now: DateTime<Utc>) {
        if self.doc.as_ref().map(Document::kind) == Some(kind) {
            return;
        }

        let tone = self
            .doc
            .as_ref()
            .map(|d| d.tone)
            .unwrap_or(self.default_tone);
        let mut doc = Document::new(kind, self.author.clone(), now);
        doc.tone = tone;

        if self.editing_existing {
            if let Some(existing) = &self.doc {
                doc.id = existing.id.clone();
                doc.created_at = existing.created_at;
            }
        }

        debug!(kind = %kind, id = %doc.id, "document type selected");
        self.doc = Some(doc);
        self.errors.clear();
        self.dirty = false;
        self.generated = false;
    }

    /// Custom type name for "Other" documents (the step-1 extra input).
    pub fn set_custom_kind(&mut self, name: &str, now: DateTime<Utc>) {
        if let Some(doc) = &mut self.doc {
            if let DocumentBody::Other(fields) = &mut doc.body {
                fields.custom_type = name.to_string();
                doc.touch(now);
                self.dirty = true;
                self.errors.remove("customType");
            }
        }
    }

    pub fn set_title(&mut self, title: &str, now: DateTime<Utc>) {
        if let Some(doc) = &mut self.doc {
            doc.title = title.to_string();
            doc.touch(now);
            self.dirty = true;
            self.errors.remove("title");
        }
    }

    pub fn set_tone(&mut self, tone: Tone, now: DateTime<Utc>) {
        if let Some(doc) = &mut self.doc {
            doc.tone = tone;
            doc.touch(now);
            self.dirty = true;
        }
    }

    /// Edit one body field. Clears the field's inline error on success.
    pub fn set_field(&mut self, path: &[&str], value: Value, now: DateTime<Utc>) -> Result<()> {
        let Some(doc) = &mut self.doc else {
            return Ok(());
        };
        doc.body.set_field(path, value)?;
        doc.touch(now);
        self.dirty = true;
        self.errors.remove(&path.join("."));
        Ok(())
    }

    /// Advance one step. Returns whether the transition happened; on refusal
    /// the error map is populated and the step is unchanged.
    pub fn next(&mut self) -> bool {
        match self.step {
            WizardStep::SelectType => {
                let custom = self.custom_kind_value();
                let errors = validate_type_selection(self.kind(), &custom);
                if !errors.is_empty() {
                    self.errors = errors;
                    return false;
                }
                self.errors.clear();
                self.step = WizardStep::SelectTone;
                true
            }
            WizardStep::SelectTone => {
                self.step = WizardStep::FillDetails;
                true
            }
            WizardStep::FillDetails => self.run_generate_gate(),
            WizardStep::Preview => false,
        }
    }

    /// Step back. Allowed everywhere except step 1, where it is a no-op.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::SelectType => WizardStep::SelectType,
            WizardStep::SelectTone => WizardStep::SelectType,
            WizardStep::FillDetails => WizardStep::SelectTone,
            WizardStep::Preview => WizardStep::FillDetails,
        };
    }

    /// Generate from the details step: full validation, then the preview.
    /// The caller applies [`GENERATE_DELAY`] before showing the result.
    pub fn generate(&mut self) -> bool {
        if self.step != WizardStep::FillDetails {
            return false;
        }
        self.run_generate_gate()
    }

    fn run_generate_gate(&mut self) -> bool {
        let Some(doc) = &self.doc else {
            return false;
        };
        let errors = validate(&doc.body, &doc.title);
        if !errors.is_empty() {
            debug!(count = errors.len(), "generate blocked by validation");
            self.errors = errors;
            return false;
        }
        self.errors.clear();
        self.generated = true;
        self.step = WizardStep::Preview;
        true
    }

    /// The completed snapshot for persistence and export. Only available
    /// once `generate` has succeeded.
    pub fn finalize(&mut self, now: DateTime<Utc>) -> Option<Document> {
        if !self.generated {
            return None;
        }
        let doc = self.doc.as_mut()?;
        doc.status = DocumentStatus::Completed;
        doc.touch(now);
        Some(doc.clone())
    }

    /// Best-effort auto-save snapshot: only when minimal content exists and
    /// the document has not been completed. Empty titles are defaulted.
    pub fn snapshot_in_progress(&self, now: DateTime<Utc>) -> Option<Document> {
        let doc = self.doc.as_ref()?;
        if doc.status.is_completed() {
            return None;
        }
        if doc.title.trim().is_empty() && !doc.body.has_content() {
            return None;
        }

        let mut snapshot = doc.clone();
        if snapshot.title.trim().is_empty() {
            snapshot.title = "Untitled Document".into();
        }
        snapshot.status = DocumentStatus::InProgress;
        snapshot.updated_at = now;
        Some(snapshot)
    }

    /// Whether leaving the wizard should prompt to save or discard.
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
            && self
                .doc
                .as_ref()
                .is_some_and(|d| !d.status.is_completed())
    }

    /// Mark the working copy as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    fn custom_kind_value(&self) -> String {
        match self.doc.as_ref().map(|d| &d.body) {
            Some(DocumentBody::Other(fields)) => fields.custom_type.clone(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modocs_schema::sample_body;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn wizard_with_valid_invoice() -> Wizard {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        wizard.select_kind(DocumentKind::Invoice, now());
        wizard.next();
        wizard.next();
        wizard.set_title("Q4 Invoice", now());
        if let Some(doc) = &mut wizard.doc {
            doc.body = sample_body(DocumentKind::Invoice);
        }
        wizard
    }

    #[test]
    fn next_without_type_stays_on_step_one() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        assert!(!wizard.next());
        assert_eq!(wizard.step(), WizardStep::SelectType);
        assert!(wizard.errors().contains_key("documentType"));
    }

    #[test]
    fn other_requires_custom_name() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        wizard.select_kind(DocumentKind::Other, now());
        assert!(!wizard.next());
        assert!(wizard.errors().contains_key("customType"));

        wizard.set_custom_kind("Meeting Minutes", now());
        assert!(wizard.next());
        assert_eq!(wizard.step(), WizardStep::SelectTone);
    }

    #[test]
    fn invalid_details_block_generate() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        wizard.select_kind(DocumentKind::Invoice, now());
        wizard.next();
        wizard.next();
        assert_eq!(wizard.step(), WizardStep::FillDetails);

        assert!(!wizard.generate());
        assert_eq!(wizard.step(), WizardStep::FillDetails);
        assert!(wizard.errors().contains_key("title"));
        assert!(wizard.errors().contains_key("invoiceNumber"));
    }

    #[test]
    fn valid_details_reach_preview_and_finalize() {
        let mut wizard = wizard_with_valid_invoice();
        assert!(wizard.generate());
        assert_eq!(wizard.step(), WizardStep::Preview);

        let doc = wizard.finalize(now()).expect("finalized document");
        assert_eq!(doc.status, DocumentStatus::Completed);
        assert_eq!(doc.title, "Q4 Invoice");
    }

    #[test]
    fn finalize_requires_generate() {
        let mut wizard = wizard_with_valid_invoice();
        assert!(wizard.finalize(now()).is_none());
    }

    #[test]
    fn back_is_linear_and_floors_at_step_one() {
        let mut wizard = wizard_with_valid_invoice();
        assert!(wizard.generate());
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::FillDetails);
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectType);
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::SelectType);
    }

    #[test]
    fn switching_type_starts_a_new_document() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        wizard.select_kind(DocumentKind::Invoice, now());
        let first_id = wizard.document().unwrap().id.clone();

        // Different creation instant so the derived ids differ.
        let later = now() + chrono::Duration::milliseconds(5);
        wizard.select_kind(DocumentKind::Memo, later);
        let doc = wizard.document().unwrap();
        assert_ne!(doc.id, first_id);
        assert_eq!(doc.kind(), DocumentKind::Memo);
    }

    #[test]
    fn editing_existing_keeps_identity_across_type_switch() {
        let mut original = Document::new(DocumentKind::Invoice, "Jane", now());
        original.title = "Q4 Invoice".into();
        let id = original.id.clone();
        let created = original.created_at;

        let mut wizard = Wizard::edit(original);
        assert_eq!(wizard.step(), WizardStep::FillDetails);

        wizard.select_kind(DocumentKind::Memo, now() + chrono::Duration::seconds(1));
        let doc = wizard.document().unwrap();
        assert_eq!(doc.id, id);
        assert_eq!(doc.created_at, created);
    }

    #[test]
    fn snapshot_skips_empty_stubs_and_completed_documents() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        wizard.select_kind(DocumentKind::Invoice, now());
        // A bare stub has no content worth saving.
        assert!(wizard.snapshot_in_progress(now()).is_none());

        wizard.set_title("Q4", now());
        let snapshot = wizard.snapshot_in_progress(now()).unwrap();
        assert_eq!(snapshot.status, DocumentStatus::InProgress);

        // Completed documents are never auto-saved back to in-progress.
        let mut wizard = wizard_with_valid_invoice();
        wizard.generate();
        wizard.finalize(now());
        assert!(wizard.snapshot_in_progress(now()).is_none());
    }

    #[test]
    fn untitled_snapshots_get_a_default_title() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        wizard.select_kind(DocumentKind::Memo, now());
        wizard
            .set_field(&["subject"], Value::from("Budget"), now())
            .unwrap();
        let snapshot = wizard.snapshot_in_progress(now()).unwrap();
        assert_eq!(snapshot.title, "Untitled Document");
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        wizard.select_kind(DocumentKind::Invoice, now());
        wizard.next();
        wizard.next();
        wizard.generate();
        assert!(wizard.errors().contains_key("invoiceNumber"));

        wizard
            .set_field(&["invoiceNumber"], Value::from("INV-1"), now())
            .unwrap();
        assert!(!wizard.errors().contains_key("invoiceNumber"));
        // Other errors remain until revalidation.
        assert!(wizard.errors().contains_key("clientInfo.name"));
    }

    #[test]
    fn unsaved_changes_guard() {
        let mut wizard = Wizard::new("Current User", Tone::Professional);
        assert!(!wizard.has_unsaved_changes());

        wizard.select_kind(DocumentKind::Memo, now());
        wizard.set_title("Weekly memo", now());
        assert!(wizard.has_unsaved_changes());

        wizard.mark_saved();
        assert!(!wizard.has_unsaved_changes());
    }
}
