use std::path::Path;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::importer::{list_agents, load_records};

pub fn run(file: &str) -> Result<()> {
    let records = load_records(Path::new(file))?;
    let agents = list_agents(&records);

    if agents.is_empty() {
        println!("No agents found in {file}.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Agent", "Rows"]);
    for (agent, count) in &agents {
        table.add_row(vec![Cell::new(agent), Cell::new(count)]);
    }
    println!("Agents\n{table}");
    Ok(())
}
