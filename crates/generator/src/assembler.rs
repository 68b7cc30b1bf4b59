//! Day-by-day voucher assembly.

use chrono::NaiveDate;
use rand::Rng;
use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use tallygen_accounting::{Voucher, VoucherKind};
use tallygen_core::{DomainError, DomainResult};

use crate::calendar::BusinessCalendar;
use crate::profile::CompanyProfile;
use crate::session::GenerationSession;

/// Totals of one assembly run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub total: usize,
    /// Counts in [`VoucherKind::ALL`] order.
    pub per_kind: [usize; 6],
    pub business_days: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl GenerationSummary {
    pub fn count(&self, kind: VoucherKind) -> usize {
        self.per_kind[kind.index()]
    }
}

/// Ordered vouchers plus their summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub vouchers: Vec<Voucher>,
    pub summary: GenerationSummary,
}

/// Drives the builders over a calendar.
///
/// Construction validates the profile so that a run either starts with sound
/// reference data or not at all.
#[derive(Debug)]
pub struct DocumentAssembler<'p, R = StdRng> {
    profile: &'p CompanyProfile,
    session: GenerationSession<R>,
    mix: WeightedIndex<u32>,
}

impl<'p, R: Rng> DocumentAssembler<'p, R> {
    pub fn new(profile: &'p CompanyProfile, session: GenerationSession<R>) -> DomainResult<Self> {
        profile.validate()?;
        let mix = WeightedIndex::new(profile.mix.weights())
            .map_err(|e| DomainError::validation(format!("voucher mix: {e}")))?;
        Ok(Self {
            profile,
            session,
            mix,
        })
    }

    /// Generates every voucher for the profile's own window.
    pub fn assemble_window(&mut self) -> DomainResult<Assembly> {
        let calendar = self.profile.window.calendar()?;
        self.assemble(calendar)
    }

    /// Generates vouchers for each business day of `calendar`, in date order.
    pub fn assemble(&mut self, calendar: BusinessCalendar) -> DomainResult<Assembly> {
        info!(
            company = %self.profile.company_name,
            seed = ?self.session.seed(),
            start = %calendar.start(),
            end = %calendar.end(),
            excluded = ?calendar.excluded(),
            business_days = calendar.len(),
            "voucher generation started"
        );

        let mut vouchers = Vec::new();
        let mut per_kind = [0usize; 6];
        let mut business_days = 0;
        let mut first_date = None;
        let mut last_date = None;

        for day in calendar {
            let count = self.session.rng().gen_range(self.profile.daily_vouchers.clone());
            for _ in 0..count {
                let kind = VoucherKind::ALL[self.session.rng().sample(&self.mix)];
                let voucher = self.session.build(self.profile, kind, day)?;
                per_kind[kind.index()] += 1;
                vouchers.push(voucher);
            }
            debug!(date = %day, vouchers = count, "business day generated");

            business_days += 1;
            first_date.get_or_insert(day);
            last_date = Some(day);
        }

        let summary = GenerationSummary {
            total: vouchers.len(),
            per_kind,
            business_days,
            first_date,
            last_date,
        };
        info!(
            total = summary.total,
            sales = summary.count(VoucherKind::Sales),
            purchase = summary.count(VoucherKind::Purchase),
            payment = summary.count(VoucherKind::Payment),
            receipt = summary.count(VoucherKind::Receipt),
            contra = summary.count(VoucherKind::Contra),
            journal = summary.count(VoucherKind::Journal),
            "voucher generation finished"
        );

        Ok(Assembly { vouchers, summary })
    }
}
