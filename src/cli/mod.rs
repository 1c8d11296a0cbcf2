pub mod agents;
pub mod efforts;
pub mod init;
pub mod payments;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dispo",
    about = "Call-disposition reporting CLI for collections teams."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up dispo: choose a data directory and initialize the payments database.
    Init {
        /// Path for dispo data (default: ~/Documents/dispo)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// List the agents ("remark by") found in an efforts workbook.
    Agents {
        /// Path to the XLSX file
        file: String,
    },
    /// Split an efforts workbook into categorized sheets plus a summary.
    Efforts {
        /// Path to the XLSX file
        file: String,
        /// Agent ("remark by") to filter on
        #[arg(long)]
        agent: String,
        /// Output path (default: <data_dir>/exports/<agent>_Agents-Efforts-Daily.xlsx)
        #[arg(long)]
        output: Option<String>,
    },
    /// Export cured payments posted within a date range.
    Payments {
        /// Start date: YYYY-MM-DD
        #[arg(long = "from")]
        from_date: String,
        /// End date: YYYY-MM-DD
        #[arg(long = "to")]
        to_date: String,
        /// Export format: csv, xlsx, or both
        #[arg(long, default_value = "both")]
        format: String,
        /// Output directory (default: <data_dir>/exports)
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
        /// Payments database path (default: <data_dir>/dispo.db)
        #[arg(long)]
        db: Option<String>,
    },
}
