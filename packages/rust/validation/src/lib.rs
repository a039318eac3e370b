//! Validation rules engine for MoDocs documents.
//!
//! Pure functions over a form snapshot: no side effects, no exceptions for
//! invalid user input. The caller decides whether a non-empty error map
//! blocks a wizard transition.
//!
//! Keys are dotted field paths (`clientInfo.name`); values are the messages
//! surfaced inline next to the field.

use std::collections::BTreeMap;

use modocs_shared::{DocumentBody, DocumentKind};

/// Field path → message. `BTreeMap` keeps error ordering stable for display
/// and tests.
pub type FieldErrors = BTreeMap<String, String>;

/// Minimum length for free-text content fields (recitals, letter body, …).
const MIN_CONTENT_LEN: usize = 10;

/// Title length bounds (trimmed).
const TITLE_MIN: usize = 3;
const TITLE_MAX: usize = 100;

/// Validate a full form snapshot: title plus the type-specific rules.
/// Returns the complete error set for the snapshot.
pub fn validate(body: &DocumentBody, title: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    validate_title(title, &mut errors);

    match body {
        DocumentBody::Invoice(f) => {
            require(&mut errors, "invoiceNumber", &f.invoice_number, "Invoice number is required");
            require(&mut errors, "invoiceDate", &f.invoice_date, "Invoice date is required");
            require(
                &mut errors,
                "companyInfo.name",
                &f.company_info.name,
                "Company name is required",
            );
            require(
                &mut errors,
                "clientInfo.name",
                &f.client_info.name,
                "Client name is required",
            );
            if f.total_amount <= 0.0 {
                errors.insert(
                    "totalAmount".into(),
                    "Total amount must be greater than 0".into(),
                );
            }
        }
        DocumentBody::Contract(f) => {
            require(
                &mut errors,
                "contractTitle",
                &f.contract_title,
                "Contract title is required",
            );
            require_min_len(
                &mut errors,
                "recitals",
                &f.recitals,
                "Recitals must be at least 10 characters",
            );
            require(&mut errors, "duration", &f.duration, "Duration is required");
        }
        DocumentBody::BusinessLetter(f) => {
            // Either a structured address or at least a recipient name.
            if f.recipient_address.trim().is_empty() && f.recipient_name.trim().is_empty() {
                errors.insert(
                    "recipientAddress".into(),
                    "Recipient address is required".into(),
                );
            }
            require_min_len(
                &mut errors,
                "body",
                &f.body,
                "Letter body must be at least 10 characters",
            );
        }
        DocumentBody::Memo(f) => {
            require(&mut errors, "to", &f.to, "Recipient is required");
            require(&mut errors, "subject", &f.subject, "Subject is required");
            require_min_len(
                &mut errors,
                "mainContent",
                &f.main_content,
                "Main content must be at least 10 characters",
            );
        }
        DocumentBody::Other(f) => {
            require(
                &mut errors,
                "customType",
                &f.custom_type,
                "Document type is required",
            );
            require_min_len(
                &mut errors,
                "content",
                &f.content,
                "Content must be at least 10 characters",
            );
        }
        // The remaining types have no required body fields beyond the title.
        DocumentBody::PurchaseOrder(_)
        | DocumentBody::Report(_)
        | DocumentBody::FinancialStatement(_)
        | DocumentBody::WorkOrder(_)
        | DocumentBody::Proposal(_)
        | DocumentBody::Receipt(_) => {}
    }

    errors
}

/// Step-1 gate: a type must be selected, and "Other" needs a custom name.
pub fn validate_type_selection(kind: Option<DocumentKind>, custom_name: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match kind {
        None => {
            errors.insert("documentType".into(), "Document type is required".into());
        }
        Some(DocumentKind::Other) if custom_name.trim().is_empty() => {
            errors.insert("customType".into(), "Document type is required".into());
        }
        Some(_) => {}
    }
    errors
}

fn validate_title(title: &str, errors: &mut FieldErrors) {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.insert("title".into(), "Document title is required".into());
    } else if trimmed.chars().count() < TITLE_MIN {
        errors.insert(
            "title".into(),
            "Document title must be at least 3 characters".into(),
        );
    } else if title.chars().count() > TITLE_MAX {
        errors.insert(
            "title".into(),
            "Document title must be less than 100 characters".into(),
        );
    }
}

fn require(errors: &mut FieldErrors, key: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(key.into(), message.into());
    }
}

fn require_min_len(errors: &mut FieldErrors, key: &str, value: &str, message: &str) {
    if value.trim().chars().count() < MIN_CONTENT_LEN {
        errors.insert(key.into(), message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modocs_schema::{fields_for, sample_body};
    use modocs_shared::DocumentBody;

    const GOOD_TITLE: &str = "Q4 2024 Consulting Agreement";

    #[test]
    fn title_rules() {
        let body = DocumentBody::new_for(DocumentKind::Report);

        let errors = validate(&body, "");
        assert_eq!(errors.get("title").unwrap(), "Document title is required");

        let errors = validate(&body, "ab");
        assert!(errors.get("title").unwrap().contains("at least 3"));

        let errors = validate(&body, &"x".repeat(101));
        assert!(errors.get("title").unwrap().contains("less than 100"));

        let errors = validate(&body, "Quarterly Report");
        assert!(!errors.contains_key("title"));
    }

    #[test]
    fn empty_required_fields_are_all_reported() {
        // The error set for an all-empty form covers exactly the fields the
        // schema registry marks required (plus the title).
        for kind in DocumentKind::ALL {
            let body = DocumentBody::new_for(kind);
            let errors = validate(&body, "");

            let mut expected: Vec<String> = fields_for(kind)
                .iter()
                .filter(|f| f.required)
                .map(|f| f.dotted())
                .collect();
            if kind == DocumentKind::Other {
                expected.push("customType".into());
            }
            expected.push("title".into());
            expected.sort();

            let got: Vec<String> = errors.keys().cloned().collect();
            assert_eq!(got, expected, "error set mismatch for {kind}");
        }
    }

    #[test]
    fn populated_samples_pass() {
        for kind in DocumentKind::ALL {
            let errors = validate(&sample_body(kind), GOOD_TITLE);
            assert!(errors.is_empty(), "sample for {kind} fails: {errors:?}");
        }
    }

    #[test]
    fn invoice_total_must_be_positive() {
        let DocumentBody::Invoice(mut invoice) = sample_body(DocumentKind::Invoice) else {
            panic!("expected invoice sample");
        };
        invoice.total_amount = 0.0;
        let errors = validate(&DocumentBody::Invoice(invoice), GOOD_TITLE);
        assert_eq!(
            errors.get("totalAmount").unwrap(),
            "Total amount must be greater than 0"
        );
    }

    #[test]
    fn short_content_fields_are_rejected() {
        let DocumentBody::Contract(mut contract) = sample_body(DocumentKind::Contract) else {
            panic!("expected contract sample");
        };
        contract.recitals = "too short".into();
        let errors = validate(&DocumentBody::Contract(contract), GOOD_TITLE);
        assert!(errors.get("recitals").unwrap().contains("10 characters"));
    }

    #[test]
    fn letter_accepts_recipient_name_without_address() {
        let DocumentBody::BusinessLetter(mut letter) =
            sample_body(DocumentKind::BusinessLetter)
        else {
            panic!("expected letter sample");
        };
        letter.recipient_address.clear();
        // Name alone satisfies the recipient rule.
        let errors = validate(&DocumentBody::BusinessLetter(letter.clone()), GOOD_TITLE);
        assert!(errors.is_empty());

        letter.recipient_name.clear();
        let errors = validate(&DocumentBody::BusinessLetter(letter), GOOD_TITLE);
        assert!(errors.contains_key("recipientAddress"));
    }

    #[test]
    fn type_selection_gate() {
        let errors = validate_type_selection(None, "");
        assert_eq!(errors.get("documentType").unwrap(), "Document type is required");

        let errors = validate_type_selection(Some(DocumentKind::Other), "  ");
        assert!(errors.contains_key("customType"));

        let errors = validate_type_selection(Some(DocumentKind::Other), "Meeting Minutes");
        assert!(errors.is_empty());

        let errors = validate_type_selection(Some(DocumentKind::Invoice), "");
        assert!(errors.is_empty());
    }
}
