//! MoDocs CLI — local-first business-document builder.
//!
//! Creates, manages, and exports typed business documents (invoices,
//! contracts, memos, …) stored as a single local JSON collection.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
