//! IT consulting firm based in Karnataka.

use chrono::Weekday;

use tallygen_accounting::KeywordMap;
use tallygen_core::DomainResult;
use tallygen_gst::GstRate;
use tallygen_parties::{Gstin, Party};
use tallygen_products::CatalogEntry;

use super::date;
use crate::profile::{
    CompanyProfile, ContraPolicy, DateWindow, JournalPolicy, JournalTemplate, PaymentEntry,
    PurchasePolicy, ReceiptEntry, ReceiptPolicy, SalesPolicy, VendorBill, VoucherMix,
};

pub fn services() -> DomainResult<CompanyProfile> {
    let clients = vec![
        Party::customer("TechCorp Solutions Pvt Ltd", "Karnataka", "29AAACT1234P1Z5")?,
        Party::customer("GlobalInfotech Inc", "Haryana", "06AAACG5678Q1Z3")?,
        Party::customer("DataSoft Systems", "Telangana", "36AAACD9012R1Z1")?,
        Party::customer("CloudNine Technologies", "Maharashtra", "27AAACC3456S1Z8")?,
        Party::customer("StartupHub Innovations", "Delhi", "07AAACS7890T1Z2")?,
    ];

    let vendors = vec![
        Party::supplier("AWS India Pvt Ltd", "Karnataka", "29AAACA1234U1Z6")?,
        Party::supplier("Microsoft India", "Telangana", "36AAACM5678V1Z4")?,
        Party::supplier("Google Cloud India", "Haryana", "06AAACG9012W1Z9")?,
        Party::supplier("Office Supplies Co", "Karnataka", "29AAACO3456X1Z7")?,
    ];

    let catalog = vec![
        CatalogEntry::service("IT Consulting", "998311", 5_000, 18),
        CatalogEntry::service("Software Development", "998313", 8_000, 18),
        CatalogEntry::service("Cloud Migration Services", "998314", 6_000, 18),
        CatalogEntry::service("Data Analytics", "998312", 7_000, 18),
        CatalogEntry::service("Mobile App Development", "998313", 9_000, 18),
        CatalogEntry::service("Web Development", "998313", 4_000, 18),
        CatalogEntry::service("DevOps Consulting", "998311", 6_500, 18),
        CatalogEntry::service("Cybersecurity Audit", "998311", 10_000, 18),
        CatalogEntry::service("AI/ML Implementation", "998312", 12_000, 18),
        CatalogEntry::service("Technical Support", "998315", 3_000, 18),
    ];

    let income_ledgers = KeywordMap::new("Software Development Income".to_string())
        .rule("Consulting", "IT Consulting Income".to_string())
        .rule("Development", "Software Development Income".to_string())
        .rule("Support", "Maintenance & Support Income".to_string())
        .rule("Cloud", "Cloud Services Income".to_string());

    let bill = |expense: &str, lo: i64, hi: i64, narration: &str| VendorBill {
        expense_ledger: expense.to_string(),
        amount: lo..=hi,
        narration: narration.to_string(),
    };
    let bills = KeywordMap::new(bill("Office Expenses", 5_000, 20_000, "Office supplies purchase"))
        .rule(
            "AWS",
            bill("Cloud Infrastructure Charges", 30_000, 150_000, "AWS cloud services - monthly bill"),
        )
        .rule(
            "Microsoft",
            bill("Software License Fees", 50_000, 200_000, "Microsoft licenses (Office 365, Azure)"),
        )
        .rule(
            "Google",
            bill("Cloud Infrastructure Charges", 25_000, 100_000, "Google Cloud Platform services"),
        );

    let payments = [
        ("Salary - Technical Staff", 200_000, 500_000, "Monthly salary payment"),
        ("Salary - Admin Staff", 80_000, 150_000, "Admin staff salary"),
        ("Office Rent", 80_000, 120_000, "Monthly office rent"),
        ("Electricity & Water", 15_000, 30_000, "Utility bills"),
        ("Internet & Telecom", 10_000, 20_000, "Internet and phone charges"),
        ("Professional Fees", 25_000, 50_000, "CA/Legal fees"),
        ("Travel Expenses", 15_000, 40_000, "Client visit expenses"),
        ("Training & Development", 20_000, 60_000, "Employee training"),
    ]
    .into_iter()
    .map(|(ledger, lo, hi, narration)| PaymentEntry {
        ledger: ledger.to_string(),
        amount: lo..=hi,
        narration: narration.to_string(),
    })
    .collect();

    Ok(CompanyProfile {
        company_name: "Test Services Company".to_string(),
        gstin: Gstin::parse("29AAACS9012E1Z1")?,
        home_state: "Karnataka".to_string(),
        window: DateWindow {
            start: date(2023, 4, 1)?,
            end: date(2025, 12, 31)?,
            excluded_weekday: Weekday::Sun,
        },
        daily_vouchers: 3..=5,
        mix: VoucherMix {
            sales: 40,
            purchase: 20,
            payment: 20,
            receipt: 8,
            contra: 7,
            journal: 5,
        },
        standard_gst_rate: GstRate::percent(18),
        customers: clients,
        suppliers: vendors,
        catalog,
        banks: vec!["HDFC Bank".to_string(), "ICICI Bank".to_string()],
        sales: SalesPolicy::Engagement {
            services: 1..=3,
            hours: 10..=100,
            project_fee: 50_000..=300_000,
            hourly_share: 0.5,
            income_ledgers,
        },
        purchases: PurchasePolicy::VendorBills { bills },
        payments,
        receipts: ReceiptPolicy {
            amount: 5_000..=50_000,
            entries: vec![ReceiptEntry {
                ledger: "Interest Income".to_string(),
                narration: "Interest received from bank".to_string(),
            }],
        },
        contra: ContraPolicy {
            amount: 20_000..=100_000,
            cash_ledger: "Cash".to_string(),
        },
        journals: JournalPolicy {
            amount: 5_000..=25_000,
            entries: vec![
                JournalTemplate {
                    category: "Depreciation".to_string(),
                    narration: "Depreciation on assets".to_string(),
                    debit_ledger: "Depreciation".to_string(),
                    credit_ledger: "Office Equipment".to_string(),
                },
                JournalTemplate {
                    category: "Round Off".to_string(),
                    narration: "Round off adjustment".to_string(),
                    debit_ledger: "Round Off".to_string(),
                    credit_ledger: "Office Expenses".to_string(),
                },
            ],
        },
    })
}
