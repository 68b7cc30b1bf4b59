//! Generate, render and write one voucher file.

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;

use tallygen_accounting::VoucherKind;
use tallygen_export::{Envelope, write_atomically};
use tallygen_generator::{DocumentAssembler, GenerationSession, GenerationSummary};

use crate::config::Config;

/// Outcome of a successful run; its `Display` is the stdout summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub company: String,
    pub seed: Option<u64>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub output: PathBuf,
    pub bytes: u64,
    pub summary: GenerationSummary,
}

impl core::fmt::Display for RunReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Company:    {}", self.company)?;
        writeln!(f, "Date range: {} to {}", self.start, self.end)?;
        writeln!(f, "Vouchers:   {}", self.summary.total)?;
        for kind in VoucherKind::ALL {
            writeln!(f, "  {:<10}{}", kind.as_str(), self.summary.count(kind))?;
        }
        if let Some(seed) = self.seed {
            writeln!(f, "Seed:       {seed}")?;
        }
        writeln!(f, "Output:     {}", self.output.display())?;
        write!(f, "Size:       {:.1} KB", self.bytes as f64 / 1024.0)
    }
}

pub fn run(config: &Config) -> anyhow::Result<RunReport> {
    let profile = config
        .load_profile()
        .with_context(|| format!("loading profile {}", config.profile))?;

    let session = match config.seed {
        Some(seed) => GenerationSession::seeded(seed),
        None => GenerationSession::from_entropy(),
    };
    let seed = session.seed();
    info!(profile = %config.profile, seed = ?seed, output = %config.output.display(), "run configured");

    let assembly = DocumentAssembler::new(&profile, session)
        .and_then(|mut assembler| assembler.assemble_window())
        .context("generating vouchers")?;

    let xml = Envelope::new(&profile.company_name, &assembly.vouchers).render();
    let bytes = write_atomically(&config.output, xml.as_bytes())
        .context("writing voucher file")?;

    Ok(RunReport {
        company: profile.company_name.clone(),
        seed,
        start: profile.window.start,
        end: profile.window.end,
        output: config.output.clone(),
        bytes,
        summary: assembly.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileSource;

    #[test]
    fn report_summarizes_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            profile: ProfileSource::BuiltIn("services".to_string()),
            seed: Some(9),
            output: dir.path().join("vouchers.xml"),
            start: NaiveDate::from_ymd_opt(2024, 4, 1),
            end: NaiveDate::from_ymd_opt(2024, 4, 6),
        };

        let report = run(&config).unwrap();
        assert_eq!(report.company, "Test Services Company");
        assert_eq!(report.summary.business_days, 6);
        assert!((18..=30).contains(&report.summary.total));
        assert_eq!(report.bytes, std::fs::metadata(&config.output).unwrap().len());

        let text = report.to_string();
        assert!(text.contains("Date range: 2024-04-01 to 2024-04-06"));
        assert!(text.contains("Seed:       9"));
        assert!(text.ends_with(" KB"));
    }
}
