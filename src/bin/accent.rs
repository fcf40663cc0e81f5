//! Small CLI over the accent store: list palettes, read or set the selection.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use accentuate::{render_palette_list, AccentPicker, JsonFileStore};

#[derive(Parser)]
#[command(name = "accent", about = "Inspect and set the persisted accent palette")]
struct Cli {
    /// Path to the accent store file
    #[arg(long, global = true, default_value = "accent.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all palettes, marking the current selection
    List,
    /// Print the resolved stored accent id
    Get,
    /// Apply and persist an accent id
    Set {
        /// Accent id; unknown ids fall back to the default palette
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let mut picker = AccentPicker::new(JsonFileStore::new(&cli.store));

    match cli.command {
        Command::List => {
            let current = picker.stored_accent();
            print!("{}", render_palette_list(picker.registry(), &current));
        }
        Command::Get => println!("{}", picker.stored_accent()),
        Command::Set { id } => {
            let resolved = picker.apply_accent(&id);
            if resolved != id {
                eprintln!("unknown accent '{}', falling back to '{}'", id, resolved);
            }
            println!("{}", resolved);
        }
    }
}
