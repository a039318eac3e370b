//! MoDocs TUI — interactive terminal interface for building documents.
//!
//! Provides the four-step creation wizard and the document manager view,
//! built with `ratatui` + `crossterm`.

mod app;
mod screens;
mod widgets;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    app::run()
}
