mod categorizer;
mod cli;
mod columns;
mod db;
mod error;
mod exporter;
mod fmt;
mod importer;
mod models;
mod report;
mod settings;
mod summary;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Agents { file } => cli::agents::run(&file),
        Commands::Efforts {
            file,
            agent,
            output,
        } => cli::efforts::run(&file, &agent, output),
        Commands::Payments {
            from_date,
            to_date,
            format,
            output_dir,
            db,
        } => cli::payments::run(&from_date, &to_date, &format, output_dir, db),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
