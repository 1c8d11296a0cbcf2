use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::categorizer::categorize;
use crate::error::{DispoError, Result};
use crate::exporter::write_efforts_workbook;
use crate::fmt::money;
use crate::importer::{filter_agent, load_records};
use crate::settings::exports_dir;

pub fn run(file: &str, agent: &str, output: Option<String>) -> Result<()> {
    let records = load_records(Path::new(file))?;
    let filtered = filter_agent(&records, agent);
    if filtered.is_empty() {
        return Err(DispoError::UnknownAgent(agent.to_string()));
    }
    println!("Filtered rows for {}: {}", agent.bold(), filtered.len());

    let buckets = categorize(&filtered);
    for bucket in &buckets {
        let total: f64 = bucket.records.iter().map(|r| r.balance).sum();
        println!(
            "  {}: {} rows ({})",
            bucket.name,
            bucket.records.len(),
            money(total)
        );
    }

    let path = output.map(PathBuf::from).unwrap_or_else(|| {
        exports_dir().join(format!("{agent}_Agents-Efforts-Daily.xlsx"))
    });
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_efforts_workbook(&buckets, &path)?;

    println!("{} {}", "Wrote".green(), path.display());
    Ok(())
}
