use anyhow::Context;
use clap::Parser;

use invoicedash_dashboard::{Cli, DashboardConfig, DashboardSnapshot, InMemoryInvoiceSource};
use invoicedash_invoicing::InvoiceRecord;

fn main() -> anyhow::Result<()> {
    invoicedash_observability::init();

    let cli = Cli::parse();
    let config = DashboardConfig::from_env();

    let raw = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let records: Vec<InvoiceRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of invoice rows", cli.path.display()))?;

    tracing::info!(path = %cli.path.display(), records = records.len(), "loaded invoice rows");

    let source = InMemoryInvoiceSource::with_records(records);
    let snapshot = DashboardSnapshot::load(&source, &config)?;

    if !snapshot.anomalies.is_empty() {
        tracing::warn!(
            anomalies = snapshot.anomalies.len(),
            "some invoice amounts could not be summed and were counted as zero"
        );
    }

    let out = if cli.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{out}");
    Ok(())
}
