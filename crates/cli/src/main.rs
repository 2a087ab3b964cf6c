//! Interactive shell for the todo CLI
//!
//! This is the main entry point. It owns the in-memory task store and
//! drives the menu loop until the user exits.

mod display;
mod input;
mod menu;

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::task::TaskStore;

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so they never interleave
    // with the interactive prompt on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut store = TaskStore::new();
    let mut editor = DefaultEditor::new()?;

    menu::run(&mut store, &mut editor)
}
