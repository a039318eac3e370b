//! Shared types, error model, and configuration for MoDocs.
//!
//! This crate is the foundation depended on by all other MoDocs crates.
//! It provides:
//! - [`ModocsError`] — the unified error type
//! - Domain types ([`Document`], [`DocumentBody`], [`DocumentKind`], [`Tone`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, AutosaveConfig, DefaultsConfig, PdfConfig, config_dir, config_file_path,
    expand_home, init_config, load_config, load_config_from,
};
pub use error::{ModocsError, Result};
pub use types::{
    AmountLine, BalanceSheet, BusinessLetterFields, CashFlow, ContractFields, CostLine,
    CustomFields, CustomerInfo, DocId, Document, DocumentBody, DocumentKind, DocumentStatus,
    FinancialStatementFields, IncomeStatement, InvoiceFields, LineItem, MemoFields, Milestone,
    OrgContact, Party, PartyInfo, Priority, ProposalFields, PurchaseOrderFields, ReceiptFields,
    ReceiptItem, ReportFields, ReportingEntity, Section, SignatureEntry, Tone, TradeContact,
    WorkOrderFields,
};
