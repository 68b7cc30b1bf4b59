//! Electronics trader based in Maharashtra.

use chrono::Weekday;

use tallygen_core::DomainResult;
use tallygen_gst::GstRate;
use tallygen_parties::{Gstin, Party};
use tallygen_products::CatalogEntry;

use super::date;
use crate::profile::{
    CompanyProfile, ContraPolicy, DateWindow, JournalPolicy, JournalTemplate, PaymentEntry,
    PurchasePolicy, ReceiptEntry, ReceiptPolicy, SalesPolicy, VoucherMix,
};

pub fn trading() -> DomainResult<CompanyProfile> {
    let customers = vec![
        Party::customer("Acme Electronics Pvt Ltd", "Maharashtra", "27AAACA1234B1Z5")?,
        Party::customer("TechWorld Solutions", "Delhi", "07AAACT5678C1Z3")?,
        Party::customer("Digital Systems Inc", "Karnataka", "29AAACD9012D1Z1")?,
        Party::customer("Sharma Electronics", "Maharashtra", "27AAACS3456E1Z8")?,
        Party::customer("Patel Trading Co", "Gujarat", "24AAACP7890F1Z2")?,
    ];

    let suppliers = vec![
        Party::supplier("Samsung India Electronics Ltd", "Uttar Pradesh", "09AAACS1234G1Z6")?,
        Party::supplier("LG Electronics India", "Haryana", "06AAACL5678H1Z4")?,
        Party::supplier("Sony India Pvt Ltd", "Haryana", "06AAACS9012I1Z9")?,
        Party::supplier("Wholesale Electronics Hub", "Maharashtra", "27AAACW3456J1Z7")?,
        Party::supplier("Mumbai Tech Distributors", "Maharashtra", "27AAACM7890K1Z5")?,
    ];

    let catalog = vec![
        CatalogEntry::stock_item("Samsung 43\" Smart TV", "8528", 25_000, 18),
        CatalogEntry::stock_item("LG 50\" 4K TV", "8528", 35_000, 18),
        CatalogEntry::stock_item("Sony Headphones WH-1000XM4", "8518", 12_000, 18),
        CatalogEntry::stock_item("Samsung Galaxy Tab", "8471", 28_000, 18),
        CatalogEntry::stock_item("LG Washing Machine 7kg", "8450", 18_000, 18),
        CatalogEntry::stock_item("Sony Bluetooth Speaker", "8518", 5_000, 18),
        CatalogEntry::stock_item("HDMI Cable 2m", "8544", 500, 18),
        CatalogEntry::stock_item("USB Cable Type-C", "8544", 300, 18),
        CatalogEntry::stock_item("Power Bank 10000mAh", "8507", 1_500, 18),
        CatalogEntry::stock_item("Wireless Mouse", "8471", 800, 18),
        CatalogEntry::stock_item("Keyboard Wireless", "8471", 1_200, 18),
        CatalogEntry::stock_item("Webcam HD 1080p", "8525", 2_500, 18),
        CatalogEntry::stock_item("External HDD 1TB", "8471", 4_000, 18),
        CatalogEntry::stock_item("Pen Drive 64GB", "8471", 600, 18),
        CatalogEntry::stock_item("Mobile Charger Fast", "8504", 1_000, 18),
    ];

    let payments = [
        ("Rent Expense", "Monthly office rent"),
        ("Salary Expense", "Staff salary payment"),
        ("Electricity Charges", "Electricity bill payment"),
        ("Internet & Phone", "Internet and phone charges"),
        ("Transport Charges", "Transport expenses"),
    ]
    .into_iter()
    .map(|(ledger, narration)| PaymentEntry {
        ledger: ledger.to_string(),
        amount: 5_000..=50_000,
        narration: narration.to_string(),
    })
    .collect();

    Ok(CompanyProfile {
        company_name: "Test Trading Company".to_string(),
        gstin: Gstin::parse("27AAACT1234C1Z5")?,
        home_state: "Maharashtra".to_string(),
        window: DateWindow {
            start: date(2023, 4, 1)?,
            end: date(2025, 12, 31)?,
            excluded_weekday: Weekday::Sun,
        },
        daily_vouchers: 5..=8,
        mix: VoucherMix {
            sales: 30,
            purchase: 30,
            payment: 15,
            receipt: 10,
            contra: 10,
            journal: 5,
        },
        standard_gst_rate: GstRate::percent(18),
        customers,
        suppliers,
        catalog,
        banks: vec!["HDFC Bank".to_string(), "ICICI Bank".to_string()],
        sales: SalesPolicy::Itemized {
            items: 2..=4,
            quantity: 1..=10,
            local_ledger: "Sales - Local".to_string(),
            interstate_ledger: "Sales - Interstate".to_string(),
        },
        purchases: PurchasePolicy::Itemized {
            items: 2..=5,
            quantity: 2..=20,
            local_ledger: "Purchase - Local".to_string(),
            interstate_ledger: "Purchase - Interstate".to_string(),
        },
        payments,
        receipts: ReceiptPolicy {
            amount: 10_000..=100_000,
            entries: vec![
                ReceiptEntry {
                    ledger: "Interest Income".to_string(),
                    narration: "Interest received from bank".to_string(),
                },
                ReceiptEntry {
                    ledger: "Discount Received".to_string(),
                    narration: "Discount from supplier".to_string(),
                },
            ],
        },
        contra: ContraPolicy {
            amount: 10_000..=50_000,
            cash_ledger: "Cash".to_string(),
        },
        journals: JournalPolicy {
            amount: 1_000..=10_000,
            entries: vec![
                JournalTemplate {
                    category: "Depreciation".to_string(),
                    narration: "Depreciation on assets".to_string(),
                    debit_ledger: "Office Expenses".to_string(),
                    credit_ledger: "Drawings".to_string(),
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
