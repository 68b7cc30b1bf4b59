//! Voucher builders, one per voucher kind.
//!
//! Each builder is a pure function of the profile, the date, the voucher
//! number and the random source. All amounts are whole rupees drawn uniformly
//! from the profile's inclusive ranges.

use core::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;

use tallygen_accounting::{LedgerLine, Voucher, VoucherKind};
use tallygen_core::{DomainError, DomainResult, Money};
use tallygen_gst::{GstRate, SupplyKind, TaxType, compute_gst};
use tallygen_products::CatalogEntry;

use crate::profile::{CompanyProfile, PurchasePolicy, SalesPolicy};

/// Dispatches to the builder for `kind`.
pub fn build_voucher<R: Rng + ?Sized>(
    kind: VoucherKind,
    profile: &CompanyProfile,
    date: NaiveDate,
    number: u32,
    rng: &mut R,
) -> DomainResult<Voucher> {
    match kind {
        VoucherKind::Sales => build_sales(profile, date, number, rng),
        VoucherKind::Purchase => build_purchase(profile, date, number, rng),
        VoucherKind::Payment => build_payment(profile, date, number, rng),
        VoucherKind::Receipt => build_receipt(profile, date, number, rng),
        VoucherKind::Contra => build_contra(profile, date, number, rng),
        VoucherKind::Journal => build_journal(profile, date, number, rng),
    }
}

pub fn build_sales<R: Rng + ?Sized>(
    profile: &CompanyProfile,
    date: NaiveDate,
    number: u32,
    rng: &mut R,
) -> DomainResult<Voucher> {
    let customer = pick(&profile.customers, "customers", rng)?;
    let supply = SupplyKind::between(&profile.home_state, customer.state());

    let mut lines = Vec::new();
    let mut taxable = TaxableSupply::default();
    let mut parts = Vec::new();

    let prefix = match &profile.sales {
        SalesPolicy::Itemized {
            items,
            quantity,
            local_ledger,
            interstate_ledger,
        } => {
            let ledger = if supply.is_interstate() { interstate_ledger } else { local_ledger };
            for item in sample(&profile.catalog, items, rng)? {
                let qty = draw(quantity, "sales quantity", rng)?;
                let amount = line_amount(item.rate, qty, &item.name)?;
                lines.push(
                    LedgerLine::credit(ledger.as_str(), amount)
                        .with_classification(item.classification.clone()),
                );
                taxable.add(item.gst_rate, amount)?;
                parts.push(format!("{} x{qty}", item.name));
            }
            "Sale to"
        }
        SalesPolicy::Engagement {
            services,
            hours,
            project_fee,
            hourly_share,
            income_ledgers,
        } => {
            for service in sample(&profile.catalog, services, rng)? {
                let amount = if rng.gen_bool(*hourly_share) {
                    let billed = draw(hours, "billable hours", rng)?;
                    parts.push(format!("{} ({billed} hrs)", service.name));
                    line_amount(service.rate, billed, &service.name)?
                } else {
                    parts.push(format!("{} (Project)", service.name));
                    rupees(draw(project_fee, "project fee", rng)?, "project fee")?
                };
                lines.push(
                    LedgerLine::credit(income_ledgers.resolve(&service.name).as_str(), amount)
                        .with_classification(service.classification.clone()),
                );
                taxable.add(service.gst_rate, amount)?;
            }
            "Service invoice to"
        }
    };

    let total = taxable.post_tax(supply, TaxSide::Output, &mut lines)?;
    lines.push(LedgerLine::debit(customer.name(), total));

    let narration = format!("{prefix} {}: {}", customer.name(), parts.join(", "));
    Voucher::new(VoucherKind::Sales, date, number, narration, lines)
}

pub fn build_purchase<R: Rng + ?Sized>(
    profile: &CompanyProfile,
    date: NaiveDate,
    number: u32,
    rng: &mut R,
) -> DomainResult<Voucher> {
    let supplier = pick(&profile.suppliers, "suppliers", rng)?;
    let supply = SupplyKind::between(&profile.home_state, supplier.state());

    let mut lines = Vec::new();
    let mut taxable = TaxableSupply::default();

    let narration = match &profile.purchases {
        PurchasePolicy::Itemized {
            items,
            quantity,
            local_ledger,
            interstate_ledger,
        } => {
            let ledger = if supply.is_interstate() { interstate_ledger } else { local_ledger };
            let mut parts = Vec::new();
            for item in sample(&profile.catalog, items, rng)? {
                let qty = draw(quantity, "purchase quantity", rng)?;
                let amount = line_amount(item.rate, qty, &item.name)?;
                lines.push(
                    LedgerLine::debit(ledger.as_str(), amount)
                        .with_classification(item.classification.clone()),
                );
                taxable.add(item.gst_rate, amount)?;
                parts.push(format!("{} x{qty}", item.name));
            }
            format!("Purchase from {}: {}", supplier.name(), parts.join(", "))
        }
        PurchasePolicy::VendorBills { bills } => {
            let bill = bills.resolve(supplier.name());
            let amount = rupees(draw(&bill.amount, &bill.expense_ledger, rng)?, &bill.expense_ledger)?;
            lines.push(LedgerLine::debit(bill.expense_ledger.as_str(), amount));
            taxable.add(profile.standard_gst_rate, amount)?;
            bill.narration.clone()
        }
    };

    let total = taxable.post_tax(supply, TaxSide::Input, &mut lines)?;
    lines.push(LedgerLine::credit(supplier.name(), total));

    Voucher::new(VoucherKind::Purchase, date, number, narration, lines)
}

pub fn build_payment<R: Rng + ?Sized>(
    profile: &CompanyProfile,
    date: NaiveDate,
    number: u32,
    rng: &mut R,
) -> DomainResult<Voucher> {
    let bank = pick(&profile.banks, "banks", rng)?;
    let entry = pick(&profile.payments, "payment entries", rng)?;
    let amount = rupees(draw(&entry.amount, &entry.ledger, rng)?, &entry.ledger)?;

    let lines = vec![
        LedgerLine::debit(entry.ledger.as_str(), amount),
        LedgerLine::credit(bank.as_str(), amount),
    ];
    Voucher::new(VoucherKind::Payment, date, number, entry.narration.as_str(), lines)
}

pub fn build_receipt<R: Rng + ?Sized>(
    profile: &CompanyProfile,
    date: NaiveDate,
    number: u32,
    rng: &mut R,
) -> DomainResult<Voucher> {
    let bank = pick(&profile.banks, "banks", rng)?;
    let amount = rupees(draw(&profile.receipts.amount, "receipt amount", rng)?, "receipt amount")?;
    let entry = pick(&profile.receipts.entries, "receipt entries", rng)?;

    let lines = vec![
        LedgerLine::debit(bank.as_str(), amount),
        LedgerLine::credit(entry.ledger.as_str(), amount),
    ];
    Voucher::new(VoucherKind::Receipt, date, number, entry.narration.as_str(), lines)
}

pub fn build_contra<R: Rng + ?Sized>(
    profile: &CompanyProfile,
    date: NaiveDate,
    number: u32,
    rng: &mut R,
) -> DomainResult<Voucher> {
    let bank = pick(&profile.banks, "banks", rng)?;
    let amount = rupees(draw(&profile.contra.amount, "contra amount", rng)?, "contra amount")?;
    let cash = profile.contra.cash_ledger.as_str();

    let (lines, narration) = if rng.gen_bool(0.5) {
        (
            vec![LedgerLine::debit(bank.as_str(), amount), LedgerLine::credit(cash, amount)],
            format!("Cash deposited to {bank}"),
        )
    } else {
        (
            vec![LedgerLine::debit(cash, amount), LedgerLine::credit(bank.as_str(), amount)],
            format!("Cash withdrawn from {bank}"),
        )
    };
    Voucher::new(VoucherKind::Contra, date, number, narration, lines)
}

pub fn build_journal<R: Rng + ?Sized>(
    profile: &CompanyProfile,
    date: NaiveDate,
    number: u32,
    rng: &mut R,
) -> DomainResult<Voucher> {
    let amount = rupees(draw(&profile.journals.amount, "journal amount", rng)?, "journal amount")?;
    let entry = pick(&profile.journals.entries, "journal entries", rng)?;

    let lines = vec![
        LedgerLine::debit(entry.debit_ledger.as_str(), amount),
        LedgerLine::credit(entry.credit_ledger.as_str(), amount),
    ];
    Voucher::new(VoucherKind::Journal, date, number, entry.narration.as_str(), lines)
}

/// Which GST ledgers a voucher posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaxSide {
    /// Tax collected on sales (credit).
    Output,
    /// Tax paid on purchases (debit).
    Input,
}

/// Taxable amounts grouped by rate, in first-seen order.
#[derive(Debug, Default)]
struct TaxableSupply {
    groups: Vec<(GstRate, Money)>,
}

impl TaxableSupply {
    fn add(&mut self, rate: GstRate, amount: Money) -> DomainResult<()> {
        match self.groups.iter_mut().find(|(r, _)| *r == rate) {
            Some((_, base)) => *base = checked_sum(*base, amount)?,
            None => self.groups.push((rate, amount)),
        }
        Ok(())
    }

    /// Appends the GST lines and returns the invoice total (base + tax).
    fn post_tax(
        &self,
        supply: SupplyKind,
        side: TaxSide,
        lines: &mut Vec<LedgerLine>,
    ) -> DomainResult<Money> {
        let mut total = Money::ZERO;
        for (rate, base) in &self.groups {
            total = checked_sum(total, *base)?;
            let gst = compute_gst(*base, *rate, supply);
            for component in gst.components() {
                if component.amount.is_zero() {
                    continue;
                }
                let ledger = tax_ledger(component.tax_type, side);
                let line = match side {
                    TaxSide::Output => LedgerLine::credit(ledger, component.amount),
                    TaxSide::Input => LedgerLine::debit(ledger, component.amount),
                };
                lines.push(line.with_tax(component.tax_type, component.rate));
                total = checked_sum(total, component.amount)?;
            }
        }
        Ok(total)
    }
}

fn tax_ledger(tax_type: TaxType, side: TaxSide) -> String {
    match side {
        TaxSide::Output => format!("{tax_type} Output"),
        TaxSide::Input => format!("{tax_type} Input"),
    }
}

fn overflow(what: &str) -> DomainError {
    DomainError::validation(format!("{what} amount does not fit in a ledger line"))
}

fn rupees(amount: i64, what: &str) -> DomainResult<Money> {
    Money::checked_from_rupees(amount).ok_or_else(|| overflow(what))
}

fn line_amount(rate: Money, multiplier: i64, what: &str) -> DomainResult<Money> {
    rate.checked_mul(multiplier).ok_or_else(|| overflow(what))
}

fn checked_sum(a: Money, b: Money) -> DomainResult<Money> {
    a.checked_add(b).ok_or_else(|| overflow("invoice total"))
}

fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], what: &str, rng: &mut R) -> DomainResult<&'a T> {
    items
        .choose(rng)
        .ok_or_else(|| DomainError::validation(format!("{what} cannot be empty")))
}

fn draw<R: Rng + ?Sized>(range: &RangeInclusive<i64>, what: &str, rng: &mut R) -> DomainResult<i64> {
    if range.is_empty() {
        return Err(DomainError::validation(format!("{what} range is empty")));
    }
    Ok(rng.gen_range(range.clone()))
}

/// Distinct catalog entries, between `count.start()` and `count.end()` of them.
fn sample<'a, R: Rng + ?Sized>(
    catalog: &'a [CatalogEntry],
    count: &RangeInclusive<usize>,
    rng: &mut R,
) -> DomainResult<Vec<&'a CatalogEntry>> {
    if count.is_empty() || *count.start() == 0 || *count.end() > catalog.len() {
        return Err(DomainError::validation(format!(
            "cannot sample {}..={} distinct entries from a catalog of {}",
            count.start(),
            count.end(),
            catalog.len()
        )));
    }
    let n = rng.gen_range(count.clone());
    Ok(catalog.choose_multiple(rng, n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    fn tax_lines(voucher: &Voucher) -> Vec<&LedgerLine> {
        voucher.lines().iter().filter(|l| l.tax.is_some()).collect()
    }

    fn balance(voucher: &Voucher) -> Money {
        voucher.lines().iter().map(|l| l.amount).sum()
    }

    #[test]
    fn every_kind_balances_for_both_profiles() {
        let mut rng = StdRng::seed_from_u64(11);
        for profile in [profiles::trading().unwrap(), profiles::services().unwrap()] {
            for kind in VoucherKind::ALL {
                for number in 1..=50 {
                    let voucher = build_voucher(kind, &profile, test_date(), number, &mut rng).unwrap();
                    assert_eq!(voucher.kind(), kind);
                    assert_eq!(voucher.number(), number);
                    assert_eq!(balance(&voucher), Money::ZERO);
                    assert!(voucher.narration().is_some());
                }
            }
        }
    }

    #[test]
    fn sales_tax_split_follows_customer_state() {
        let mut profile = profiles::trading().unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        profile.customers.retain(|c| c.state() == "Maharashtra");
        let local = build_sales(&profile, test_date(), 1, &mut rng).unwrap();
        let types: Vec<TaxType> = tax_lines(&local).iter().map(|l| l.tax.unwrap().tax_type).collect();
        assert_eq!(types, vec![TaxType::Cgst, TaxType::Sgst]);
        assert!(local.lines_for("Sales - Local").count() >= 2);
        assert_eq!(local.lines_for("CGST Output").next().unwrap().tax.unwrap().rate, GstRate::percent(9));

        let mut profile = profiles::trading().unwrap();
        profile.customers.retain(|c| c.state() == "Delhi");
        let interstate = build_sales(&profile, test_date(), 2, &mut rng).unwrap();
        let igst: Vec<&LedgerLine> = tax_lines(&interstate);
        assert_eq!(igst.len(), 1);
        assert_eq!(igst[0].ledger, "IGST Output");
        assert!(!igst[0].is_debit());
        assert_eq!(igst[0].tax.unwrap().rate, GstRate::percent(18));
        assert!(interstate.lines_for("Sales - Interstate").count() >= 2);
    }

    #[test]
    fn sales_tax_is_eighteen_percent_of_revenue() {
        let profile = profiles::trading().unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for number in 1..=20 {
            let voucher = build_sales(&profile, test_date(), number, &mut rng).unwrap();
            let revenue: Money = voucher
                .lines()
                .iter()
                .filter(|l| l.ledger.starts_with("Sales - "))
                .map(|l| -l.amount)
                .sum();
            let tax: Money = tax_lines(&voucher).iter().map(|l| -l.amount).sum();
            assert_eq!(tax, revenue.mul_ratio(18, 100));

            let debtor = voucher.lines().last().unwrap();
            assert!(debtor.is_debit());
            assert_eq!(debtor.amount, revenue + tax);
            assert!(voucher.narration().unwrap().starts_with("Sale to "));
        }
    }

    #[test]
    fn purchase_tax_is_debited_to_input_ledgers() {
        let mut profile = profiles::trading().unwrap();
        profile.suppliers.retain(|s| s.state() == "Haryana");
        let mut rng = StdRng::seed_from_u64(5);

        let voucher = build_purchase(&profile, test_date(), 1, &mut rng).unwrap();
        let tax = tax_lines(&voucher);
        assert_eq!(tax.len(), 1);
        assert_eq!(tax[0].ledger, "IGST Input");
        assert!(tax[0].is_debit());

        let creditor = voucher.lines().last().unwrap();
        assert!(!creditor.is_debit());
        assert!(creditor.ledger.contains("India"));
        assert!(voucher.narration().unwrap().starts_with("Purchase from "));
    }

    #[test]
    fn vendor_bill_uses_keyword_expense_ledger() {
        let mut profile = profiles::services().unwrap();
        profile.suppliers.retain(|s| s.name().contains("AWS"));
        let mut rng = StdRng::seed_from_u64(8);

        let voucher = build_purchase(&profile, test_date(), 1, &mut rng).unwrap();
        let expense = &voucher.lines()[0];
        assert_eq!(expense.ledger, "Cloud Infrastructure Charges");
        assert!((30_000..=150_000).contains(&(expense.amount.paise() / 100)));
        assert_eq!(voucher.narration(), Some("AWS cloud services - monthly bill"));

        // AWS India is in Karnataka, same as the company.
        let types: Vec<TaxType> = tax_lines(&voucher).iter().map(|l| l.tax.unwrap().tax_type).collect();
        assert_eq!(types, vec![TaxType::Cgst, TaxType::Sgst]);
    }

    #[test]
    fn unmatched_vendor_falls_back_to_office_expenses() {
        let mut profile = profiles::services().unwrap();
        profile.suppliers.retain(|s| s.name() == "Office Supplies Co");
        let mut rng = StdRng::seed_from_u64(8);

        let voucher = build_purchase(&profile, test_date(), 1, &mut rng).unwrap();
        assert_eq!(voucher.lines()[0].ledger, "Office Expenses");
        assert_eq!(voucher.narration(), Some("Office supplies purchase"));
    }

    #[test]
    fn service_lines_carry_sac_and_keyword_income_ledger() {
        let mut profile = profiles::services().unwrap();
        profile.catalog.retain(|e| e.name == "Technical Support");
        if let SalesPolicy::Engagement { services, .. } = &mut profile.sales {
            *services = 1..=1;
        }
        let mut rng = StdRng::seed_from_u64(21);

        let voucher = build_sales(&profile, test_date(), 1, &mut rng).unwrap();
        let income = &voucher.lines()[0];
        assert_eq!(income.ledger, "Maintenance & Support Income");
        let code = income.classification.as_ref().unwrap();
        assert_eq!((code.scheme(), code.code()), ("SAC", "998315"));
        assert!(voucher.narration().unwrap().starts_with("Service invoice to "));
    }

    #[test]
    fn goods_lines_carry_hsn() {
        let profile = profiles::trading().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let voucher = build_sales(&profile, test_date(), 1, &mut rng).unwrap();
        for line in voucher.lines().iter().filter(|l| l.ledger.starts_with("Sales - ")) {
            assert_eq!(line.classification.as_ref().unwrap().scheme(), "HSN");
        }
    }

    #[test]
    fn contra_moves_cash_between_cash_and_bank() {
        let profile = profiles::trading().unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let (mut deposits, mut withdrawals) = (0, 0);

        for number in 1..=40 {
            let voucher = build_contra(&profile, test_date(), number, &mut rng).unwrap();
            assert_eq!(voucher.lines().len(), 2);
            let (debit, credit) = (&voucher.lines()[0], &voucher.lines()[1]);
            assert_eq!(debit.amount, -credit.amount);

            let narration = voucher.narration().unwrap();
            if debit.ledger == "Cash" {
                assert!(narration.starts_with("Cash withdrawn from "));
                withdrawals += 1;
            } else {
                assert_eq!(credit.ledger, "Cash");
                assert!(narration.starts_with("Cash deposited to "));
                deposits += 1;
            }
        }
        assert!(deposits > 0 && withdrawals > 0);
    }

    #[test]
    fn payment_amount_stays_within_entry_range() {
        let profile = profiles::services().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for number in 1..=50 {
            let voucher = build_payment(&profile, test_date(), number, &mut rng).unwrap();
            let expense = &voucher.lines()[0];
            let entry = profile.payments.iter().find(|e| e.ledger == expense.ledger).unwrap();
            assert!(entry.amount.contains(&(expense.amount.paise() / 100)));
            assert!(profile.banks.contains(&voucher.lines()[1].ledger));
        }
    }

    #[test]
    fn oversized_amounts_fail_instead_of_overflowing() {
        let mut rng = StdRng::seed_from_u64(6);

        let mut profile = profiles::trading().unwrap();
        profile.contra.amount = i64::MAX / 10..=i64::MAX / 10;
        assert!(matches!(
            build_contra(&profile, test_date(), 1, &mut rng),
            Err(DomainError::Validation(_))
        ));

        let mut profile = profiles::trading().unwrap();
        profile.catalog.truncate(1);
        profile.catalog[0].rate = Money::from_paise(i64::MAX / 10 * 9);
        if let SalesPolicy::Itemized { items, quantity, .. } = &mut profile.sales {
            *items = 1..=1;
            *quantity = 3..=3;
        }
        assert!(matches!(
            build_sales(&profile, test_date(), 1, &mut rng),
            Err(DomainError::Validation(_))
        ));

        // Each line fits but the invoice total with tax does not.
        if let SalesPolicy::Itemized { quantity, .. } = &mut profile.sales {
            *quantity = 1..=1;
        }
        assert!(matches!(
            build_sales(&profile, test_date(), 2, &mut rng),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn empty_reference_data_is_a_validation_error() {
        let mut profile = profiles::trading().unwrap();
        profile.banks.clear();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            build_payment(&profile, test_date(), 1, &mut rng),
            Err(DomainError::Validation(_))
        ));
    }
}
