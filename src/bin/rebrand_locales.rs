use std::path::PathBuf;

use clap::Parser;
use widllet_locales::{FileOutcome, REPLACEMENT, TARGET};

/// Replaces "MetaMask" with "Widllet" in the message and description of every entry in every
/// messages.json below a directory.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// The directory to search. Defaults to the current directory.
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Unable to determine the current directory. Error: {}", e);

                error_exit();
            }
        },
    };

    let report = |outcome: &FileOutcome| {
        let Some(diagnostic) = outcome.diagnostic() else {
            return;
        };

        match outcome {
            FileOutcome::Skipped { .. } => eprintln!("{diagnostic}"),
            _ => println!("{diagnostic}"),
        }
    };

    if let Err(e) = widllet_locales::rewrite_tree_with(&root, report) {
        eprintln!(
            "Unable to replace {TARGET} with {REPLACEMENT} under {}.\nError: {}",
            root.display(),
            e
        );

        error_exit();
    }
}

fn error_exit() -> ! {
    eprintln!("\nUnable to continue.");

    std::process::exit(1);
}
