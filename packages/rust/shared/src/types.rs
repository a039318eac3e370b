//! Core domain types for MoDocs business documents.
//!
//! A [`Document`] is a common envelope (id, title, status, tone, author,
//! timestamps) plus a [`DocumentBody`] — a union tagged by `documentType`
//! and flattened into the envelope, so the persisted JSON stays a single
//! flat object per document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModocsError, Result};

// ---------------------------------------------------------------------------
// DocId
// ---------------------------------------------------------------------------

/// An opaque, stable document identifier following the `doc-<unix-millis>`
/// pattern. Assigned once at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub String);

impl DocId {
    /// Generate a new identifier from the current wall clock.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Generate an identifier for a specific instant (injectable-clock path).
    pub fn at(ts: DateTime<Utc>) -> Self {
        Self(format!("doc-{}", ts.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DocId {
    type Err = ModocsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ModocsError::validation("document id cannot be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// DocumentStatus
// ---------------------------------------------------------------------------

/// Lifecycle status. Transitions only forward: `in-progress → completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    InProgress,
    Completed,
}

impl DocumentStatus {
    /// Records predating the status field count as completed.
    pub(crate) fn legacy() -> Self {
        Self::Completed
    }

    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Writing tone driving literal boilerplate substitution in rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Formal,
    Casual,
}

impl Tone {
    /// All tones, in presentation order.
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Formal,
        Tone::Casual,
    ];
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Professional => write!(f, "professional"),
            Self::Friendly => write!(f, "friendly"),
            Self::Formal => write!(f, "formal"),
            Self::Casual => write!(f, "casual"),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = ModocsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "friendly" => Ok(Self::Friendly),
            "formal" => Ok(Self::Formal),
            "casual" => Ok(Self::Casual),
            other => Err(ModocsError::validation(format!("unknown tone: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// The eleven document type tags (ten fixed + custom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Invoice,
    #[serde(rename = "Purchase Order")]
    PurchaseOrder,
    Contract,
    #[serde(rename = "Business Letter")]
    BusinessLetter,
    Memo,
    Report,
    #[serde(rename = "Financial Statement")]
    FinancialStatement,
    #[serde(rename = "Work Order")]
    WorkOrder,
    Proposal,
    Receipt,
    Other,
}

impl DocumentKind {
    /// All kinds, in the order they appear in the type picker.
    pub const ALL: [DocumentKind; 11] = [
        DocumentKind::Invoice,
        DocumentKind::PurchaseOrder,
        DocumentKind::Contract,
        DocumentKind::BusinessLetter,
        DocumentKind::Memo,
        DocumentKind::Report,
        DocumentKind::FinancialStatement,
        DocumentKind::WorkOrder,
        DocumentKind::Proposal,
        DocumentKind::Receipt,
        DocumentKind::Other,
    ];

    /// The human-readable tag, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Invoice => "Invoice",
            Self::PurchaseOrder => "Purchase Order",
            Self::Contract => "Contract",
            Self::BusinessLetter => "Business Letter",
            Self::Memo => "Memo",
            Self::Report => "Report",
            Self::FinancialStatement => "Financial Statement",
            Self::WorkOrder => "Work Order",
            Self::Proposal => "Proposal",
            Self::Receipt => "Receipt",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = ModocsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|k| k.label().to_lowercase() == normalized)
            .ok_or_else(|| ModocsError::validation(format!("unknown document type: {s}")))
    }
}

// ---------------------------------------------------------------------------
// Nested field groups
// ---------------------------------------------------------------------------

/// Full billing contact (invoices).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartyInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Organization contact without email (work orders, receipts).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrgContact {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Trading-party contact (purchase orders).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TradeContact {
    pub company: String,
    pub address: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
}

/// Reporting entity header for financial statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingEntity {
    pub name: String,
    pub address: String,
    pub reporting_period: String,
}

/// A billable line item (invoices, purchase orders).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// A receipt line (description + amount only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiptItem {
    pub description: String,
    pub amount: f64,
}

/// A heading/content pair (contract terms, report findings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Section {
    pub heading: String,
    pub content: String,
}

/// A named amount line (balance sheet, income statement).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmountLine {
    pub item: String,
    pub amount: f64,
}

/// A contract party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub role: String,
    pub address: String,
}

/// A signature block entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignatureEntry {
    pub party: String,
    pub signature: String,
    pub date: String,
}

/// A proposal timeline milestone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Milestone {
    pub milestone: String,
    pub date: String,
}

/// A proposal budget line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostLine {
    pub item: String,
    pub cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BalanceSheet {
    pub assets: Vec<AmountLine>,
    pub liabilities: Vec<AmountLine>,
    pub equity: Vec<AmountLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncomeStatement {
    pub revenue: Vec<AmountLine>,
    pub expenses: Vec<AmountLine>,
    pub net_income: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CashFlow {
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
}

/// Work order priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Urgent => write!(f, "Urgent"),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-type field structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceFields {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub company_info: PartyInfo,
    pub client_info: PartyInfo,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub payment_terms: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseOrderFields {
    pub po_number: String,
    pub po_date: String,
    pub delivery_date: String,
    pub buyer_info: TradeContact,
    pub supplier_info: TradeContact,
    pub items: Vec<LineItem>,
    pub total_amount: f64,
    pub payment_terms: String,
    pub approval_signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractFields {
    pub contract_title: String,
    pub parties: Vec<Party>,
    pub recitals: String,
    pub terms: Vec<Section>,
    pub payment_terms: String,
    pub duration: String,
    pub termination_clause: String,
    pub confidentiality: String,
    pub governing_law: String,
    pub signatures: Vec<SignatureEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessLetterFields {
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub date: String,
    pub salutation: String,
    pub subject: String,
    pub body: String,
    pub closing: String,
    pub sender_name: String,
    pub sender_title: String,
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemoFields {
    pub to: String,
    pub from: String,
    pub date: String,
    pub subject: String,
    pub purpose: String,
    pub main_content: String,
    pub action_items: Vec<String>,
    pub closing_remarks: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportFields {
    pub report_title: String,
    pub executive_summary: String,
    pub introduction: String,
    pub objectives: Vec<String>,
    pub methodology: String,
    pub findings: Vec<Section>,
    pub conclusions: String,
    pub recommendations: Vec<String>,
    pub appendices: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancialStatementFields {
    pub company_info: ReportingEntity,
    pub balance_sheet: BalanceSheet,
    pub income_statement: IncomeStatement,
    pub cash_flow: CashFlow,
    pub notes: String,
    pub preparer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkOrderFields {
    pub work_order_number: String,
    pub work_order_date: String,
    pub client_info: OrgContact,
    pub work_description: String,
    pub assigned_personnel: Vec<String>,
    pub materials_required: Vec<String>,
    pub estimated_completion_date: String,
    pub priority: Option<Priority>,
    pub approval_signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposalFields {
    pub proposal_title: String,
    pub cover_letter: String,
    pub introduction: String,
    pub background: String,
    pub objectives: Vec<String>,
    pub proposed_solution: String,
    pub timeline: Vec<Milestone>,
    pub budget: Vec<CostLine>,
    pub total_cost: f64,
    pub terms_and_conditions: String,
    pub conclusion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceiptFields {
    pub receipt_number: String,
    pub receipt_date: String,
    pub company_info: OrgContact,
    pub customer_info: CustomerInfo,
    pub items: Vec<ReceiptItem>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
    pub payment_method: String,
}

/// Free-form "Other" documents. The user-supplied type name lives in
/// `custom_type` so the `documentType` tag stays stable across edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomFields {
    pub custom_type: String,
    pub category: String,
    pub summary: String,
    pub content: String,
    pub additional_notes: String,
}

// ---------------------------------------------------------------------------
// DocumentBody
// ---------------------------------------------------------------------------

/// Type-specific document content, tagged by `documentType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "documentType")]
pub enum DocumentBody {
    Invoice(InvoiceFields),
    #[serde(rename = "Purchase Order")]
    PurchaseOrder(PurchaseOrderFields),
    Contract(ContractFields),
    #[serde(rename = "Business Letter")]
    BusinessLetter(BusinessLetterFields),
    Memo(MemoFields),
    Report(ReportFields),
    #[serde(rename = "Financial Statement")]
    FinancialStatement(FinancialStatementFields),
    #[serde(rename = "Work Order")]
    WorkOrder(WorkOrderFields),
    Proposal(ProposalFields),
    Receipt(ReceiptFields),
    Other(CustomFields),
}

impl DocumentBody {
    /// Create an empty body for the given kind.
    pub fn new_for(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Invoice => Self::Invoice(InvoiceFields::default()),
            DocumentKind::PurchaseOrder => Self::PurchaseOrder(PurchaseOrderFields::default()),
            DocumentKind::Contract => Self::Contract(ContractFields::default()),
            DocumentKind::BusinessLetter => Self::BusinessLetter(BusinessLetterFields::default()),
            DocumentKind::Memo => Self::Memo(MemoFields::default()),
            DocumentKind::Report => Self::Report(ReportFields::default()),
            DocumentKind::FinancialStatement => {
                Self::FinancialStatement(FinancialStatementFields::default())
            }
            DocumentKind::WorkOrder => Self::WorkOrder(WorkOrderFields::default()),
            DocumentKind::Proposal => Self::Proposal(ProposalFields::default()),
            DocumentKind::Receipt => Self::Receipt(ReceiptFields::default()),
            DocumentKind::Other => Self::Other(CustomFields::default()),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Invoice(_) => DocumentKind::Invoice,
            Self::PurchaseOrder(_) => DocumentKind::PurchaseOrder,
            Self::Contract(_) => DocumentKind::Contract,
            Self::BusinessLetter(_) => DocumentKind::BusinessLetter,
            Self::Memo(_) => DocumentKind::Memo,
            Self::Report(_) => DocumentKind::Report,
            Self::FinancialStatement(_) => DocumentKind::FinancialStatement,
            Self::WorkOrder(_) => DocumentKind::WorkOrder,
            Self::Proposal(_) => DocumentKind::Proposal,
            Self::Receipt(_) => DocumentKind::Receipt,
            Self::Other(_) => DocumentKind::Other,
        }
    }

    /// The display label for this body's type — the custom name for
    /// "Other" documents when one is set.
    pub fn kind_label(&self) -> String {
        match self {
            Self::Other(fields) if !fields.custom_type.trim().is_empty() => {
                fields.custom_type.clone()
            }
            other => other.kind().label().to_string(),
        }
    }

    /// Whether any user-entered content exists beyond the empty shape.
    pub fn has_content(&self) -> bool {
        *self != Self::new_for(self.kind())
    }

    /// Set a leaf field by dotted path, keeping leaf types checked via the
    /// serde data model. Unknown paths and type-mismatched values are
    /// validation errors.
    pub fn set_field(&mut self, path: &[&str], value: Value) -> Result<()> {
        let Some((last, parents)) = path.split_last() else {
            return Err(ModocsError::validation("empty field path"));
        };
        if path[0] == "documentType" {
            return Err(ModocsError::validation("documentType is immutable"));
        }

        let mut tree = serde_json::to_value(&*self)
            .map_err(|e| ModocsError::validation(format!("serialize body: {e}")))?;

        let joined = path.join(".");
        let mut cursor = &mut tree;
        for segment in parents {
            cursor = cursor
                .get_mut(*segment)
                .ok_or_else(|| ModocsError::validation(format!("unknown field path: {joined}")))?;
        }
        let object = cursor
            .as_object_mut()
            .ok_or_else(|| ModocsError::validation(format!("unknown field path: {joined}")))?;
        if !object.contains_key(*last) {
            return Err(ModocsError::validation(format!(
                "unknown field path: {joined}"
            )));
        }
        object.insert((*last).to_string(), value);

        *self = serde_json::from_value(tree)
            .map_err(|e| ModocsError::validation(format!("invalid value for {joined}: {e}")))?;
        Ok(())
    }

    /// Read a leaf field by dotted path, if present.
    pub fn get_field(&self, path: &[&str]) -> Option<Value> {
        let tree = serde_json::to_value(self).ok()?;
        let mut cursor = &tree;
        for segment in path {
            cursor = cursor.get(*segment)?;
        }
        Some(cursor.clone())
    }

    /// Title fallback derived from the body when the envelope title is
    /// empty: numbered documents use their number, titled documents their
    /// own title field, everything else the type label.
    pub fn display_title(&self) -> String {
        let fallback = |s: &str, prefix: &str, kind: DocumentKind| {
            if s.trim().is_empty() {
                kind.label().to_string()
            } else if prefix.is_empty() {
                s.to_string()
            } else {
                format!("{prefix} {s}")
            }
        };
        match self {
            Self::Invoice(f) => fallback(&f.invoice_number, "Invoice", DocumentKind::Invoice),
            Self::PurchaseOrder(f) => fallback(&f.po_number, "PO", DocumentKind::PurchaseOrder),
            Self::Contract(f) => fallback(&f.contract_title, "", DocumentKind::Contract),
            Self::Receipt(f) => fallback(&f.receipt_number, "Receipt", DocumentKind::Receipt),
            Self::WorkOrder(f) => {
                fallback(&f.work_order_number, "Work Order", DocumentKind::WorkOrder)
            }
            Self::Proposal(f) => fallback(&f.proposal_title, "", DocumentKind::Proposal),
            Self::Report(f) => fallback(&f.report_title, "", DocumentKind::Report),
            other => other.kind_label(),
        }
    }

    /// Monetary total for list views, when the variant carries one.
    pub fn total_amount(&self) -> Option<f64> {
        let amount = match self {
            Self::Invoice(f) => f.total_amount,
            Self::PurchaseOrder(f) => f.total_amount,
            Self::Receipt(f) => f.total_amount,
            Self::Proposal(f) => f.total_cost,
            _ => return None,
        };
        (amount > 0.0).then_some(amount)
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A complete business document: common envelope + type-specific body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    #[serde(default)]
    pub title: String,
    #[serde(default = "DocumentStatus::legacy")]
    pub status: DocumentStatus,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: DocumentBody,
}

impl Document {
    /// Create a fresh in-progress stub for the given kind.
    pub fn new(kind: DocumentKind, author: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: DocId::at(now),
            title: String::new(),
            status: DocumentStatus::InProgress,
            tone: Tone::default(),
            author: author.into(),
            created_at: now,
            updated_at: now,
            body: DocumentBody::new_for(kind),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.body.kind()
    }

    /// Envelope title, falling back to a body-derived one.
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            self.body.display_title()
        } else {
            self.title.clone()
        }
    }

    /// Bump `updated_at` after a mutation.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_invoice(now: DateTime<Utc>) -> Document {
        let mut doc = Document::new(DocumentKind::Invoice, "Current User", now);
        doc.title = "Q4 Invoice".into();
        if let DocumentBody::Invoice(fields) = &mut doc.body {
            fields.invoice_number = "INV-2025-001".into();
            fields.client_info.name = "Acme Co".into();
            fields.total_amount = 1080.0;
        }
        doc
    }

    #[test]
    fn doc_id_pattern() {
        let ts = DateTime::parse_from_rfc3339("2025-11-06T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(DocId::at(ts).as_str(), "doc-1762430400000");
    }

    #[test]
    fn document_serializes_flat() {
        let now = Utc::now();
        let doc = sample_invoice(now);

        let json = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(json["documentType"], "Invoice");
        assert_eq!(json["title"], "Q4 Invoice");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["tone"], "professional");
        assert_eq!(json["invoiceNumber"], "INV-2025-001");
        assert_eq!(json["clientInfo"]["name"], "Acme Co");
        assert_eq!(json["totalAmount"], 1080.0);
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn document_roundtrip() {
        let doc = sample_invoice(Utc::now());
        let json = serde_json::to_string(&doc).expect("serialize");
        let parsed: Document = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, doc);
    }

    #[test]
    fn legacy_record_without_status_counts_completed() {
        let json = r#"{
            "id": "doc-1730000000000",
            "documentType": "Memo",
            "title": "Old memo",
            "author": "Jane",
            "createdAt": "2025-11-06T14:00:00Z",
            "updatedAt": "2025-11-06T14:00:00Z",
            "to": "All Staff",
            "subject": "Heads up",
            "mainContent": "The office closes early on Friday."
        }"#;
        let doc: Document = serde_json::from_str(json).expect("deserialize legacy");
        assert_eq!(doc.status, DocumentStatus::Completed);
        assert_eq!(doc.tone, Tone::Professional);
        assert_eq!(doc.kind(), DocumentKind::Memo);
    }

    #[test]
    fn partial_body_deserializes_with_defaults() {
        let json = r#"{"documentType": "Invoice", "invoiceNumber": "INV-7"}"#;
        let body: DocumentBody = serde_json::from_str(json).expect("deserialize partial");
        let DocumentBody::Invoice(fields) = body else {
            panic!("expected invoice variant");
        };
        assert_eq!(fields.invoice_number, "INV-7");
        assert_eq!(fields.total_amount, 0.0);
        assert!(fields.client_info.name.is_empty());
    }

    #[test]
    fn set_field_nested_path() {
        let mut body = DocumentBody::new_for(DocumentKind::Invoice);
        body.set_field(&["companyInfo", "name"], Value::from("Acme Corporation"))
            .expect("set nested");
        body.set_field(&["totalAmount"], Value::from(11880.0))
            .expect("set scalar");

        let DocumentBody::Invoice(fields) = &body else {
            panic!("expected invoice variant");
        };
        assert_eq!(fields.company_info.name, "Acme Corporation");
        assert_eq!(fields.total_amount, 11880.0);
    }

    #[test]
    fn set_field_rejects_unknown_path() {
        let mut body = DocumentBody::new_for(DocumentKind::Invoice);
        let err = body
            .set_field(&["clientInfo", "fax"], Value::from("n/a"))
            .unwrap_err();
        assert!(err.to_string().contains("clientInfo.fax"));
    }

    #[test]
    fn set_field_rejects_type_mismatch() {
        let mut body = DocumentBody::new_for(DocumentKind::Invoice);
        let result = body.set_field(&["totalAmount"], Value::from("lots"));
        assert!(result.is_err());
        // The body is left untouched on failure.
        assert!(!body.has_content());
    }

    #[test]
    fn has_content_detects_edits() {
        let mut body = DocumentBody::new_for(DocumentKind::Memo);
        assert!(!body.has_content());
        body.set_field(&["subject"], Value::from("Budget review"))
            .unwrap();
        assert!(body.has_content());
    }

    #[test]
    fn display_title_fallbacks() {
        let mut doc = Document::new(DocumentKind::Invoice, "Jane", Utc::now());
        assert_eq!(doc.display_title(), "Invoice");

        if let DocumentBody::Invoice(fields) = &mut doc.body {
            fields.invoice_number = "INV-9".into();
        }
        assert_eq!(doc.display_title(), "Invoice INV-9");

        doc.title = "November billing".into();
        assert_eq!(doc.display_title(), "November billing");
    }

    #[test]
    fn custom_documents_keep_other_tag() {
        let mut doc = Document::new(DocumentKind::Other, "Jane", Utc::now());
        if let DocumentBody::Other(fields) = &mut doc.body {
            fields.custom_type = "Meeting Minutes".into();
            fields.content = "Attendees agreed on the Q1 roadmap.".into();
        }

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["documentType"], "Other");
        assert_eq!(json["customType"], "Meeting Minutes");
        assert_eq!(doc.body.kind_label(), "Meeting Minutes");
    }

    #[test]
    fn kind_parses_human_names() {
        assert_eq!(
            "purchase order".parse::<DocumentKind>().unwrap(),
            DocumentKind::PurchaseOrder
        );
        assert_eq!(
            "business-letter".parse::<DocumentKind>().unwrap(),
            DocumentKind::BusinessLetter
        );
        assert!("flyer".parse::<DocumentKind>().is_err());
    }
}
