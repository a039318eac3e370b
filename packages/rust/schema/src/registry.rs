//! Field registry: the editable field shape for each document type.
//!
//! Purely declarative — a lookup table the form editor and template renderer
//! share. It is not a validator; required flags here only mark which fields
//! the rules engine will check.

use modocs_shared::DocumentKind;

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Text,
    Multiline,
    Date,
    Number,
    Choice(&'static [&'static str]),
}

/// One editable field of a document type.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Path into the document body, segment per nesting level.
    pub path: &'static [&'static str],
    /// Form label.
    pub label: &'static str,
    pub input: FieldInput,
    /// Whether the validation engine requires this field.
    pub required: bool,
    /// Example value shown as a hint when the field is empty.
    pub hint: &'static str,
}

impl FieldSpec {
    /// The dotted path used as the key in validation error maps.
    pub fn dotted(&self) -> String {
        self.path.join(".")
    }
}

const fn text(
    path: &'static [&'static str],
    label: &'static str,
    required: bool,
    hint: &'static str,
) -> FieldSpec {
    FieldSpec {
        path,
        label,
        input: FieldInput::Text,
        required,
        hint,
    }
}

const fn multiline(
    path: &'static [&'static str],
    label: &'static str,
    required: bool,
    hint: &'static str,
) -> FieldSpec {
    FieldSpec {
        path,
        label,
        input: FieldInput::Multiline,
        required,
        hint,
    }
}

const fn date(path: &'static [&'static str], label: &'static str, required: bool) -> FieldSpec {
    FieldSpec {
        path,
        label,
        input: FieldInput::Date,
        required,
        hint: "2025-11-06",
    }
}

const fn number(
    path: &'static [&'static str],
    label: &'static str,
    required: bool,
    hint: &'static str,
) -> FieldSpec {
    FieldSpec {
        path,
        label,
        input: FieldInput::Number,
        required,
        hint,
    }
}

const INVOICE_FIELDS: &[FieldSpec] = &[
    text(&["invoiceNumber"], "Invoice Number", true, "INV-2025-001"),
    date(&["invoiceDate"], "Invoice Date", true),
    date(&["dueDate"], "Due Date", false),
    text(
        &["companyInfo", "name"],
        "Company Name",
        true,
        "Your Company LLC",
    ),
    multiline(
        &["companyInfo", "address"],
        "Company Address",
        false,
        "123 Business St, Suite 100, City, State 12345",
    ),
    text(
        &["companyInfo", "phone"],
        "Company Phone",
        false,
        "+1 (555) 123-4567",
    ),
    text(
        &["companyInfo", "email"],
        "Company Email",
        false,
        "billing@yourcompany.com",
    ),
    text(
        &["clientInfo", "name"],
        "Client Name",
        true,
        "Client Company Inc",
    ),
    multiline(
        &["clientInfo", "address"],
        "Client Address",
        false,
        "456 Client Ave, City, State 67890",
    ),
    number(&["subtotal"], "Subtotal", false, "10000.00"),
    number(&["taxAmount"], "Tax Amount", false, "800.00"),
    number(&["totalAmount"], "Total Amount", true, "10800.00"),
    multiline(
        &["paymentTerms"],
        "Payment Terms",
        false,
        "Payment due within 30 days.",
    ),
    multiline(
        &["notes"],
        "Notes",
        false,
        "Additional notes or special instructions",
    ),
];

const PURCHASE_ORDER_FIELDS: &[FieldSpec] = &[
    text(&["poNumber"], "PO Number", false, "PO-2025-001"),
    date(&["poDate"], "PO Date", false),
    date(&["deliveryDate"], "Delivery Date", false),
    text(
        &["buyerInfo", "company"],
        "Buyer Company",
        false,
        "ABC Manufacturing Inc",
    ),
    multiline(
        &["buyerInfo", "address"],
        "Buyer Address",
        false,
        "123 Industrial Pkwy, City, State 12345",
    ),
    text(
        &["buyerInfo", "contact"],
        "Buyer Contact",
        false,
        "John Doe, Procurement Manager",
    ),
    text(
        &["supplierInfo", "company"],
        "Supplier Company",
        false,
        "XYZ Supplies Co",
    ),
    multiline(
        &["supplierInfo", "address"],
        "Supplier Address",
        false,
        "456 Supply Rd, City, State 67890",
    ),
    text(
        &["supplierInfo", "contact"],
        "Supplier Contact",
        false,
        "Jane Brown, Sales Representative",
    ),
    number(&["totalAmount"], "Total Amount", false, "15000.00"),
    multiline(
        &["paymentTerms"],
        "Payment Terms",
        false,
        "Net 30 days from delivery date",
    ),
    text(
        &["approvalSignature"],
        "Approval Signature",
        false,
        "Jane Smith",
    ),
];

const CONTRACT_FIELDS: &[FieldSpec] = &[
    text(
        &["contractTitle"],
        "Contract Title",
        true,
        "Professional Services Agreement",
    ),
    multiline(
        &["recitals"],
        "Recitals",
        true,
        "WHEREAS, the parties wish to enter into an agreement...",
    ),
    multiline(
        &["paymentTerms"],
        "Payment Terms",
        false,
        "Client shall pay $X per month for services rendered",
    ),
    text(
        &["duration"],
        "Duration",
        true,
        "12 months from effective date",
    ),
    multiline(
        &["terminationClause"],
        "Termination Clause",
        false,
        "Either party may terminate with 30 days written notice",
    ),
    multiline(
        &["confidentiality"],
        "Confidentiality",
        false,
        "Both parties agree to maintain confidentiality...",
    ),
    text(
        &["governingLaw"],
        "Governing Law",
        false,
        "State of California",
    ),
];

const BUSINESS_LETTER_FIELDS: &[FieldSpec] = &[
    multiline(
        &["senderAddress"],
        "Sender Address",
        false,
        "Your Company Name\n123 Business St\nCity, State 12345",
    ),
    text(&["recipientName"], "Recipient Name", false, "Ms. Rodriguez"),
    multiline(
        &["recipientAddress"],
        "Recipient Address",
        true,
        "Recipient Name\n456 Client Ave\nCity, State 67890",
    ),
    text(&["date"], "Date", false, "November 6, 2025"),
    text(
        &["salutation"],
        "Salutation",
        false,
        "Dear Mr./Ms. [Last Name],",
    ),
    text(&["subject"], "Subject", false, "Re: Business Proposal"),
    multiline(
        &["body"],
        "Body",
        true,
        "Write the main content of your letter here...",
    ),
    text(&["closing"], "Closing", false, "Sincerely,"),
    text(&["senderName"], "Sender Name", false, "Jane Smith"),
    text(
        &["senderTitle"],
        "Sender Title",
        false,
        "Chief Executive Officer",
    ),
];

const MEMO_FIELDS: &[FieldSpec] = &[
    text(&["to"], "To", true, "All Staff"),
    text(&["from"], "From", false, "Management"),
    text(&["date"], "Date", false, "November 6, 2025"),
    text(&["subject"], "Subject", true, "Important Update"),
    multiline(
        &["purpose"],
        "Purpose",
        false,
        "The purpose of this memo is to...",
    ),
    multiline(
        &["mainContent"],
        "Main Content",
        true,
        "Write the main content of your memo here...",
    ),
    multiline(
        &["closingRemarks"],
        "Closing Remarks",
        false,
        "Thank you for your attention to this matter.",
    ),
];

const REPORT_FIELDS: &[FieldSpec] = &[
    text(
        &["reportTitle"],
        "Report Title",
        false,
        "Q4 2024 Financial Analysis",
    ),
    multiline(
        &["executiveSummary"],
        "Executive Summary",
        false,
        "Provide a brief overview of the key findings...",
    ),
    multiline(
        &["introduction"],
        "Introduction",
        false,
        "Introduce the purpose and scope of this report...",
    ),
    multiline(
        &["methodology"],
        "Methodology",
        false,
        "Describe the research methods and data collection...",
    ),
    multiline(
        &["conclusions"],
        "Conclusions",
        false,
        "Summarize the findings and provide recommendations...",
    ),
];

const FINANCIAL_STATEMENT_FIELDS: &[FieldSpec] = &[
    text(
        &["companyInfo", "name"],
        "Company Name",
        false,
        "ABC Corporation",
    ),
    text(
        &["companyInfo", "reportingPeriod"],
        "Reporting Period",
        false,
        "Q4 2024",
    ),
    number(
        &["incomeStatement", "netIncome"],
        "Net Income",
        false,
        "250000.00",
    ),
    multiline(
        &["notes"],
        "Notes",
        false,
        "Additional notes about the financial statement...",
    ),
    text(&["preparer"], "Preparer", false, "Jane Smith, CPA"),
];

const WORK_ORDER_FIELDS: &[FieldSpec] = &[
    text(
        &["workOrderNumber"],
        "Work Order Number",
        false,
        "WO-2025-0001",
    ),
    date(&["workOrderDate"], "Work Order Date", false),
    text(
        &["clientInfo", "name"],
        "Client Name",
        false,
        "ABC Manufacturing",
    ),
    multiline(
        &["workDescription"],
        "Work Description",
        false,
        "Describe the work to be performed...",
    ),
    date(
        &["estimatedCompletionDate"],
        "Estimated Completion Date",
        false,
    ),
    FieldSpec {
        path: &["priority"],
        label: "Priority",
        input: FieldInput::Choice(&["Low", "Medium", "High", "Urgent"]),
        required: false,
        hint: "Medium",
    },
];

const PROPOSAL_FIELDS: &[FieldSpec] = &[
    text(
        &["proposalTitle"],
        "Proposal Title",
        false,
        "Digital Marketing Campaign",
    ),
    multiline(
        &["coverLetter"],
        "Cover Letter",
        false,
        "Dear [Client Name], we are pleased to submit this proposal...",
    ),
    multiline(
        &["introduction"],
        "Introduction",
        false,
        "Introduce your company and the purpose of the proposal...",
    ),
    multiline(
        &["background"],
        "Background",
        false,
        "Provide context and background information...",
    ),
    multiline(
        &["proposedSolution"],
        "Proposed Solution",
        false,
        "Describe your proposed solution and approach...",
    ),
    number(&["totalCost"], "Total Cost", false, "50000.00"),
    multiline(
        &["termsAndConditions"],
        "Terms and Conditions",
        false,
        "Outline the terms and conditions of the proposal...",
    ),
    multiline(
        &["conclusion"],
        "Conclusion",
        false,
        "Thank you for considering our proposal...",
    ),
];

const RECEIPT_FIELDS: &[FieldSpec] = &[
    text(&["receiptNumber"], "Receipt Number", false, "REC-2025-00001"),
    date(&["receiptDate"], "Receipt Date", false),
    text(
        &["companyInfo", "name"],
        "Company Name",
        false,
        "Tech Retailers Inc",
    ),
    text(&["customerInfo", "name"], "Customer Name", false, "John Doe"),
    text(
        &["customerInfo", "email"],
        "Customer Email",
        false,
        "john.doe@email.com",
    ),
    number(&["subtotal"], "Subtotal", false, "1000.00"),
    number(&["taxAmount"], "Tax Amount", false, "80.00"),
    number(&["totalAmount"], "Total Amount", false, "1080.00"),
    text(
        &["paymentMethod"],
        "Payment Method",
        false,
        "Credit Card (Visa ending in 1234)",
    ),
];

const OTHER_FIELDS: &[FieldSpec] = &[
    text(
        &["category"],
        "Category",
        false,
        "e.g., Policy Document, Meeting Minutes, etc.",
    ),
    multiline(
        &["summary"],
        "Summary",
        false,
        "Brief summary of the document...",
    ),
    multiline(
        &["content"],
        "Content",
        true,
        "Enter the main content of your document here...",
    ),
    multiline(
        &["additionalNotes"],
        "Additional Notes",
        false,
        "Any additional information or notes...",
    ),
];

/// Look up the editable fields for a document type.
pub fn fields_for(kind: DocumentKind) -> &'static [FieldSpec] {
    match kind {
        DocumentKind::Invoice => INVOICE_FIELDS,
        DocumentKind::PurchaseOrder => PURCHASE_ORDER_FIELDS,
        DocumentKind::Contract => CONTRACT_FIELDS,
        DocumentKind::BusinessLetter => BUSINESS_LETTER_FIELDS,
        DocumentKind::Memo => MEMO_FIELDS,
        DocumentKind::Report => REPORT_FIELDS,
        DocumentKind::FinancialStatement => FINANCIAL_STATEMENT_FIELDS,
        DocumentKind::WorkOrder => WORK_ORDER_FIELDS,
        DocumentKind::Proposal => PROPOSAL_FIELDS,
        DocumentKind::Receipt => RECEIPT_FIELDS,
        DocumentKind::Other => OTHER_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modocs_shared::DocumentBody;

    #[test]
    fn every_kind_has_fields() {
        for kind in DocumentKind::ALL {
            assert!(
                !fields_for(kind).is_empty(),
                "no fields registered for {kind}"
            );
        }
    }

    #[test]
    fn every_path_resolves_on_an_empty_body() {
        for kind in DocumentKind::ALL {
            let body = DocumentBody::new_for(kind);
            for spec in fields_for(kind) {
                assert!(
                    body.get_field(spec.path).is_some(),
                    "{kind}: path {} does not resolve",
                    spec.dotted()
                );
            }
        }
    }

    #[test]
    fn every_path_is_settable() {
        for kind in DocumentKind::ALL {
            let mut body = DocumentBody::new_for(kind);
            for spec in fields_for(kind) {
                let value = match spec.input {
                    FieldInput::Number => serde_json::Value::from(42.0),
                    FieldInput::Choice(options) => serde_json::Value::from(options[0]),
                    _ => serde_json::Value::from("sample"),
                };
                body.set_field(spec.path, value).unwrap_or_else(|e| {
                    panic!("{kind}: cannot set {}: {e}", spec.dotted());
                });
            }
        }
    }

    #[test]
    fn invoice_required_fields() {
        let required: Vec<String> = fields_for(DocumentKind::Invoice)
            .iter()
            .filter(|f| f.required)
            .map(|f| f.dotted())
            .collect();
        assert_eq!(
            required,
            vec![
                "invoiceNumber",
                "invoiceDate",
                "companyInfo.name",
                "clientInfo.name",
                "totalAmount",
            ]
        );
    }
}
