//! Sample document bodies, one per type.
//!
//! These seed previews while the form is empty and back `modocs new
//! --sample`. Values are fixed fixtures, not generated content.

use modocs_shared::{
    AmountLine, BalanceSheet, BusinessLetterFields, CashFlow, ContractFields, CostLine,
    CustomFields, CustomerInfo, DocumentBody, DocumentKind, FinancialStatementFields,
    IncomeStatement, InvoiceFields, LineItem, MemoFields, Milestone, OrgContact, Party, PartyInfo,
    Priority, ProposalFields, PurchaseOrderFields, ReceiptFields, ReceiptItem, ReportFields,
    ReportingEntity, Section, SignatureEntry, TradeContact, WorkOrderFields,
};

/// A fully populated sample body for the given document type.
pub fn sample_body(kind: DocumentKind) -> DocumentBody {
    match kind {
        DocumentKind::Invoice => DocumentBody::Invoice(sample_invoice()),
        DocumentKind::PurchaseOrder => DocumentBody::PurchaseOrder(sample_purchase_order()),
        DocumentKind::Contract => DocumentBody::Contract(sample_contract()),
        DocumentKind::BusinessLetter => DocumentBody::BusinessLetter(sample_business_letter()),
        DocumentKind::Memo => DocumentBody::Memo(sample_memo()),
        DocumentKind::Report => DocumentBody::Report(sample_report()),
        DocumentKind::FinancialStatement => {
            DocumentBody::FinancialStatement(sample_financial_statement())
        }
        DocumentKind::WorkOrder => DocumentBody::WorkOrder(sample_work_order()),
        DocumentKind::Proposal => DocumentBody::Proposal(sample_proposal()),
        DocumentKind::Receipt => DocumentBody::Receipt(sample_receipt()),
        DocumentKind::Other => DocumentBody::Other(sample_custom()),
    }
}

fn sample_invoice() -> InvoiceFields {
    InvoiceFields {
        invoice_number: "INV-2025-001".into(),
        invoice_date: "2025-11-06".into(),
        due_date: "2025-12-06".into(),
        company_info: PartyInfo {
            name: "Acme Corporation".into(),
            address: "123 Business St, Suite 100, New York, NY 10001".into(),
            phone: "(555) 123-4567".into(),
            email: "billing@acme.com".into(),
        },
        client_info: PartyInfo {
            name: "Client Company Inc".into(),
            address: "456 Client Ave, Los Angeles, CA 90001".into(),
            phone: "(555) 987-6543".into(),
            email: "accounts@client.com".into(),
        },
        items: vec![
            LineItem {
                description: "Professional Services - Q4 2024".into(),
                quantity: 1.0,
                unit_price: 5000.0,
                total: 5000.0,
            },
            LineItem {
                description: "Consulting Hours (40 hrs @ $150/hr)".into(),
                quantity: 40.0,
                unit_price: 150.0,
                total: 6000.0,
            },
        ],
        subtotal: 11000.0,
        tax_rate: 0.08,
        tax_amount: 880.0,
        total_amount: 11880.0,
        payment_terms: "Net 30 days. Payment due within 30 days of invoice date.".into(),
        notes: "Thank you for your business. Please remit payment to the address above.".into(),
    }
}

fn sample_purchase_order() -> PurchaseOrderFields {
    PurchaseOrderFields {
        po_number: "PO-2025-001".into(),
        po_date: "2025-11-06".into(),
        delivery_date: "2025-11-20".into(),
        buyer_info: TradeContact {
            company: "TechCorp Industries".into(),
            address: "789 Tech Blvd, San Francisco, CA 94102".into(),
            contact: "Jane Smith, Procurement Manager".into(),
        },
        supplier_info: TradeContact {
            company: "Office Supplies Co".into(),
            address: "321 Supply Lane, Chicago, IL 60601".into(),
            contact: "John Brown, Sales Representative".into(),
        },
        items: vec![
            LineItem {
                description: "Ergonomic Office Chairs (Model X200)".into(),
                quantity: 25.0,
                unit_price: 350.0,
                total: 8750.0,
            },
            LineItem {
                description: "Standing Desks (Model SD-Pro)".into(),
                quantity: 15.0,
                unit_price: 800.0,
                total: 12000.0,
            },
        ],
        total_amount: 20750.0,
        payment_terms: "50% deposit upon order, balance due upon delivery".into(),
        approval_signature: "Jane Smith".into(),
    }
}

fn sample_contract() -> ContractFields {
    ContractFields {
        contract_title: "Professional Services Agreement".into(),
        parties: vec![
            Party {
                name: "ABC Company LLC".into(),
                role: "Client".into(),
                address: "100 Main St, Boston, MA 02101".into(),
            },
            Party {
                name: "XYZ Consulting Inc".into(),
                role: "Consultant".into(),
                address: "200 Park Ave, New York, NY 10001".into(),
            },
        ],
        recitals: "WHEREAS, Client desires to engage Consultant to provide professional \
                   consulting services; and WHEREAS, Consultant has the expertise and \
                   qualifications to provide such services."
            .into(),
        terms: vec![
            Section {
                heading: "Scope of Services".into(),
                content: "Consultant shall provide strategic business consulting services \
                          including market analysis, competitive research, and business \
                          development recommendations as detailed in Exhibit A."
                    .into(),
            },
            Section {
                heading: "Compensation".into(),
                content: "Client shall pay Consultant a fee of $150 per hour for services \
                          rendered, with invoices submitted monthly and payment due within \
                          30 days of receipt."
                    .into(),
            },
            Section {
                heading: "Term".into(),
                content: "This Agreement shall commence on January 1, 2025 and continue for \
                          a period of twelve (12) months."
                    .into(),
            },
        ],
        payment_terms: "Net 30 days from invoice date".into(),
        duration: "12 months from January 1, 2025".into(),
        termination_clause: "Either party may terminate this Agreement with 30 days written \
                             notice to the other party."
            .into(),
        confidentiality: "Both parties agree to maintain confidentiality of all proprietary \
                          information shared during the term of this Agreement."
            .into(),
        governing_law: "This Agreement shall be governed by the laws of the State of New York."
            .into(),
        signatures: vec![
            SignatureEntry {
                party: "ABC Company LLC".into(),
                signature: "Sarah Johnson, CEO".into(),
                date: "2025-01-01".into(),
            },
            SignatureEntry {
                party: "XYZ Consulting Inc".into(),
                signature: "Michael Chen, President".into(),
                date: "2025-01-01".into(),
            },
        ],
    }
}

fn sample_business_letter() -> BusinessLetterFields {
    BusinessLetterFields {
        sender_address: "Global Tech Solutions\n500 Innovation Drive\nAustin, TX 78701".into(),
        recipient_name: "Ms. Emily Rodriguez".into(),
        recipient_address: "Ms. Emily Rodriguez\nDirector of Operations\nFuture Industries Inc\n\
                            800 Commerce Blvd\nDallas, TX 75201"
            .into(),
        date: "November 6, 2025".into(),
        salutation: "Dear Ms. Rodriguez,".into(),
        subject: "Proposal for Technology Partnership".into(),
        body: "I am writing to express our interest in establishing a strategic technology \
               partnership with Future Industries Inc. Our team at Global Tech Solutions has \
               been following your company's impressive growth and innovation in the \
               manufacturing sector.\n\nWe believe that our cloud-based automation platform \
               could significantly enhance your operational efficiency and reduce costs by up \
               to 30%. We would welcome the opportunity to discuss this potential \
               collaboration in detail.\n\nI have enclosed our company brochure and a \
               preliminary proposal for your review. I will follow up with a phone call next \
               week to schedule a meeting at your convenience."
            .into(),
        closing: "Sincerely,".into(),
        sender_name: "David Park".into(),
        sender_title: "Vice President of Business Development".into(),
        attachments: vec![
            "Company Brochure".into(),
            "Preliminary Proposal Document".into(),
        ],
    }
}

fn sample_memo() -> MemoFields {
    MemoFields {
        to: "All Department Managers".into(),
        from: "Lisa Chang, Chief Operating Officer".into(),
        date: "November 6, 2025".into(),
        subject: "Q4 Budget Review and Planning Session".into(),
        purpose: "This memo serves to notify all department managers of the upcoming Q4 \
                  budget review meeting and outline the preparation requirements."
            .into(),
        main_content: "As we approach the end of Q4, it is essential that we conduct a \
                       comprehensive review of our departmental budgets and begin planning \
                       for Q1 2026. The budget review meeting is scheduled for November 15, \
                       2025, at 2:00 PM in Conference Room A.\n\nEach department should \
                       prepare:\n- Current quarter spending analysis\n- Variance reports \
                       comparing actual vs. budgeted amounts\n- Preliminary budget proposals \
                       for Q1 2026\n- Justification for any requested budget increases\n\n\
                       Please bring both digital and printed copies of your reports to the \
                       meeting."
            .into(),
        action_items: vec![
            "Prepare Q4 spending analysis by November 12".into(),
            "Submit preliminary Q1 2026 budget proposals by November 14".into(),
            "Attend budget review meeting on November 15 at 2:00 PM".into(),
            "Identify potential cost-saving opportunities in your department".into(),
        ],
        closing_remarks: "Your cooperation and timely preparation are crucial for effective \
                          budget planning. Please contact the Finance Department if you have \
                          any questions."
            .into(),
    }
}

fn sample_report() -> ReportFields {
    ReportFields {
        report_title: "Q3 2025 Market Analysis Report".into(),
        executive_summary: "This report provides a comprehensive analysis of market trends, \
                            competitive landscape, and customer behavior during Q3 2025. Key \
                            findings indicate a 15% growth in market demand and emerging \
                            opportunities in the digital services sector."
            .into(),
        introduction: "The purpose of this report is to analyze market conditions during Q3 \
                       2025 and provide strategic recommendations for business development. \
                       This analysis covers industry trends, competitive positioning, and \
                       customer insights."
            .into(),
        objectives: vec![
            "Identify key market trends and growth opportunities".into(),
            "Analyze competitive landscape and market positioning".into(),
            "Assess customer needs and preferences".into(),
            "Provide data-driven recommendations for strategic planning".into(),
        ],
        methodology: "This research employed a mixed-methods approach including quantitative \
                      surveys of 500 customers, qualitative interviews with 25 industry \
                      experts, and analysis of market data from leading industry reports and \
                      databases."
            .into(),
        findings: vec![
            Section {
                heading: "Market Growth Trends".into(),
                content: "The overall market grew by 15% in Q3 2025 compared to the previous \
                          quarter. Digital transformation services showed the highest growth \
                          rate at 28%, while traditional consulting services grew by 8%."
                    .into(),
            },
            Section {
                heading: "Competitive Analysis".into(),
                content: "Our market share increased to 23%, positioning us as the \
                          third-largest provider in the region. Top competitors include \
                          MarketLeader Corp (35% share) and InnovateTech Solutions (27% \
                          share)."
                    .into(),
            },
            Section {
                heading: "Customer Preferences".into(),
                content: "Survey results indicate that 72% of customers prioritize \
                          integration capabilities and 68% value responsive customer \
                          support. Price sensitivity decreased from Q2, with quality and \
                          reliability becoming primary decision factors."
                    .into(),
            },
        ],
        conclusions: "The market shows strong growth potential, particularly in digital \
                      services. Our competitive position has improved, but there is \
                      opportunity to gain additional market share by focusing on integration \
                      capabilities and customer support excellence."
            .into(),
        recommendations: vec![
            "Invest in enhancing product integration capabilities".into(),
            "Expand customer support team by 30% to improve response times".into(),
            "Develop targeted marketing campaigns for digital transformation services".into(),
            "Consider strategic partnerships with complementary service providers".into(),
        ],
        appendices: vec![
            "Survey questionnaire".into(),
            "Interview transcripts".into(),
            "Detailed statistical analysis".into(),
            "Market data sources".into(),
        ],
    }
}

fn sample_financial_statement() -> FinancialStatementFields {
    FinancialStatementFields {
        company_info: ReportingEntity {
            name: "Innovate Corp".into(),
            address: "123 Finance Street, New York, NY 10005".into(),
            reporting_period: "Q3 2025 (July 1 - September 30, 2025)".into(),
        },
        balance_sheet: BalanceSheet {
            assets: vec![
                AmountLine {
                    item: "Cash and Cash Equivalents".into(),
                    amount: 2_500_000.0,
                },
                AmountLine {
                    item: "Accounts Receivable".into(),
                    amount: 1_800_000.0,
                },
                AmountLine {
                    item: "Inventory".into(),
                    amount: 950_000.0,
                },
                AmountLine {
                    item: "Property and Equipment".into(),
                    amount: 3_200_000.0,
                },
                AmountLine {
                    item: "Intangible Assets".into(),
                    amount: 1_500_000.0,
                },
            ],
            liabilities: vec![
                AmountLine {
                    item: "Accounts Payable".into(),
                    amount: 850_000.0,
                },
                AmountLine {
                    item: "Short-term Debt".into(),
                    amount: 1_200_000.0,
                },
                AmountLine {
                    item: "Long-term Debt".into(),
                    amount: 2_800_000.0,
                },
                AmountLine {
                    item: "Deferred Revenue".into(),
                    amount: 450_000.0,
                },
            ],
            equity: vec![
                AmountLine {
                    item: "Common Stock".into(),
                    amount: 2_000_000.0,
                },
                AmountLine {
                    item: "Retained Earnings".into(),
                    amount: 2_650_000.0,
                },
            ],
        },
        income_statement: IncomeStatement {
            revenue: vec![
                AmountLine {
                    item: "Product Sales".into(),
                    amount: 4_500_000.0,
                },
                AmountLine {
                    item: "Service Revenue".into(),
                    amount: 2_300_000.0,
                },
                AmountLine {
                    item: "Other Income".into(),
                    amount: 150_000.0,
                },
            ],
            expenses: vec![
                AmountLine {
                    item: "Cost of Goods Sold".into(),
                    amount: 2_800_000.0,
                },
                AmountLine {
                    item: "Operating Expenses".into(),
                    amount: 1_900_000.0,
                },
                AmountLine {
                    item: "Interest Expense".into(),
                    amount: 180_000.0,
                },
                AmountLine {
                    item: "Taxes".into(),
                    amount: 420_000.0,
                },
            ],
            net_income: 1_650_000.0,
        },
        cash_flow: CashFlow {
            operating: 1_850_000.0,
            investing: -950_000.0,
            financing: -450_000.0,
        },
        notes: "These financial statements have been prepared in accordance with Generally \
                Accepted Accounting Principles (GAAP). All amounts are expressed in USD."
            .into(),
        preparer: "Jennifer Williams, CPA - Chief Financial Officer".into(),
    }
}

fn sample_work_order() -> WorkOrderFields {
    WorkOrderFields {
        work_order_number: "WO-2025-0156".into(),
        work_order_date: "2025-11-06".into(),
        client_info: OrgContact {
            name: "Metro City Hospital".into(),
            address: "789 Healthcare Ave, Medical District, Chicago, IL 60611".into(),
            phone: "(312) 555-0199".into(),
        },
        work_description: "Complete maintenance and inspection of HVAC system in Building C, \
                           including filter replacement, duct cleaning, and system \
                           calibration. Address reported temperature control issues in rooms \
                           301-315."
            .into(),
        assigned_personnel: vec![
            "Tom Richards - Lead HVAC Technician".into(),
            "Maria Santos - HVAC Specialist".into(),
            "Kevin Lee - Maintenance Assistant".into(),
        ],
        materials_required: vec![
            "20 HEPA filters (24x24x2)".into(),
            "Duct cleaning equipment".into(),
            "Refrigerant R-410A (2 cylinders)".into(),
            "Thermostat calibration tools".into(),
            "Safety equipment and PPE".into(),
        ],
        estimated_completion_date: "2025-11-08".into(),
        priority: Some(Priority::High),
        approval_signature: "Robert Anderson - Facilities Manager".into(),
    }
}

fn sample_proposal() -> ProposalFields {
    ProposalFields {
        proposal_title: "Digital Marketing Campaign Proposal for SpringFresh Products".into(),
        cover_letter: "Dear SpringFresh Marketing Team,\n\nThank you for the opportunity to \
                       submit this proposal for your upcoming digital marketing campaign. Our \
                       agency, Digital Dynamics, has extensive experience in the consumer \
                       products sector and is excited to help SpringFresh achieve its growth \
                       objectives."
            .into(),
        introduction: "This proposal outlines a comprehensive digital marketing strategy \
                       designed to increase SpringFresh's online presence, drive website \
                       traffic, and boost product sales by 40% over the next six months."
            .into(),
        background: "SpringFresh Products has established a strong reputation for \
                     eco-friendly household cleaning products. However, the brand's digital \
                     presence does not fully reflect its market position. Our analysis \
                     indicates significant opportunities to expand reach through targeted \
                     digital campaigns."
            .into(),
        objectives: vec![
            "Increase website traffic by 60% within six months".into(),
            "Grow social media followers by 100,000 across all platforms".into(),
            "Achieve 40% increase in online product sales".into(),
            "Improve brand awareness metrics by 50%".into(),
            "Generate 5,000 qualified leads for B2B partnerships".into(),
        ],
        proposed_solution: "Our integrated digital marketing approach combines SEO \
                            optimization, targeted social media advertising, influencer \
                            partnerships, email marketing campaigns, and content marketing. \
                            We will create engaging content highlighting SpringFresh's \
                            sustainability mission while driving conversion through \
                            strategic calls-to-action."
            .into(),
        timeline: vec![
            Milestone {
                milestone: "Campaign Strategy Finalization".into(),
                date: "November 15, 2025".into(),
            },
            Milestone {
                milestone: "Website SEO Optimization".into(),
                date: "December 1, 2025".into(),
            },
            Milestone {
                milestone: "Social Media Campaign Launch".into(),
                date: "December 15, 2025".into(),
            },
            Milestone {
                milestone: "Influencer Partnership Activation".into(),
                date: "January 5, 2026".into(),
            },
            Milestone {
                milestone: "Mid-Campaign Review and Optimization".into(),
                date: "February 15, 2026".into(),
            },
            Milestone {
                milestone: "Campaign Completion and Final Report".into(),
                date: "April 30, 2026".into(),
            },
        ],
        budget: vec![
            CostLine {
                item: "SEO Optimization and Content Creation".into(),
                cost: 15000.0,
            },
            CostLine {
                item: "Social Media Advertising".into(),
                cost: 25000.0,
            },
            CostLine {
                item: "Influencer Partnerships".into(),
                cost: 20000.0,
            },
            CostLine {
                item: "Email Marketing Platform and Management".into(),
                cost: 8000.0,
            },
            CostLine {
                item: "Analytics and Reporting Tools".into(),
                cost: 5000.0,
            },
            CostLine {
                item: "Project Management and Strategy".into(),
                cost: 12000.0,
            },
        ],
        total_cost: 85000.0,
        terms_and_conditions: "Payment terms: 30% deposit upon contract signing, 40% at \
                               mid-campaign milestone, 30% upon completion. All deliverables \
                               remain property of SpringFresh Products. Campaign performance \
                               will be measured against agreed KPIs with monthly reporting."
            .into(),
        conclusion: "We are confident that this comprehensive digital marketing strategy \
                     will significantly enhance SpringFresh's market position and drive \
                     measurable business results. We look forward to partnering with you on \
                     this exciting initiative."
            .into(),
    }
}

fn sample_receipt() -> ReceiptFields {
    ReceiptFields {
        receipt_number: "REC-2025-00892".into(),
        receipt_date: "2025-11-06".into(),
        company_info: OrgContact {
            name: "TechGear Electronics Store".into(),
            address: "456 Commerce Plaza, Seattle, WA 98101".into(),
            phone: "(206) 555-0177".into(),
        },
        customer_info: CustomerInfo {
            name: "Alex Thompson".into(),
            email: "alex.thompson@email.com".into(),
        },
        items: vec![
            ReceiptItem {
                description: "Laptop - Model Pro X15".into(),
                amount: 1299.99,
            },
            ReceiptItem {
                description: "Wireless Mouse".into(),
                amount: 49.99,
            },
            ReceiptItem {
                description: "Laptop Sleeve".into(),
                amount: 29.99,
            },
            ReceiptItem {
                description: "2-Year Extended Warranty".into(),
                amount: 199.99,
            },
        ],
        subtotal: 1579.96,
        tax_amount: 142.2,
        total_amount: 1722.16,
        payment_method: "Credit Card - Visa ending in 4532".into(),
    }
}

fn sample_custom() -> CustomFields {
    CustomFields {
        custom_type: "Meeting Minutes".into(),
        category: "Internal Operations".into(),
        summary: "Minutes from the weekly product planning sync.".into(),
        content: "Attendees reviewed the Q1 roadmap and agreed to prioritize the reporting \
                  dashboard. Engineering will provide estimates by Friday, and the launch \
                  checklist owner rotates to the platform team next sprint."
            .into(),
        additional_notes: "Next sync scheduled for the same time next week.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_requested_kind() {
        for kind in DocumentKind::ALL {
            assert_eq!(sample_body(kind).kind(), kind);
        }
    }

    #[test]
    fn samples_carry_content() {
        for kind in DocumentKind::ALL {
            assert!(
                sample_body(kind).has_content(),
                "sample for {kind} is empty"
            );
        }
    }

    #[test]
    fn invoice_sample_totals_line_up() {
        let DocumentBody::Invoice(invoice) = sample_body(DocumentKind::Invoice) else {
            panic!("expected invoice sample");
        };
        let items_total: f64 = invoice.items.iter().map(|i| i.total).sum();
        assert_eq!(items_total, invoice.subtotal);
        assert_eq!(invoice.subtotal + invoice.tax_amount, invoice.total_amount);
    }
}
