use anyhow::Context;

fn main() -> anyhow::Result<()> {
    tallygen_observability::init();

    let config = tallygen_cli::Config::from_env().context("reading configuration")?;
    let report = tallygen_cli::run(&config)?;

    tracing::info!(
        total = report.summary.total,
        bytes = report.bytes,
        seed = ?report.seed,
        "done"
    );
    println!("{report}");
    Ok(())
}
