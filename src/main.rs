use std::io::Read;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use diff_slicer::{Diff, change_group_patch, format_diff, hunk_patch};

#[derive(Parser)]
#[command(name = "diff-slicer")]
#[command(about = "Slice unified diffs into standalone per-hunk and per-group patches")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the files in a diff, one path per line
    Files {
        /// Diff input path, or '-' for stdin
        input: String,
        /// Also report chunks that were dropped as unparseable
        #[arg(long)]
        skipped: bool,
    },
    /// Show a diff annotated with explicit line numbers
    Show {
        /// Diff input path, or '-' for stdin
        input: String,
    },
    /// Print a standalone patch for one hunk of one file
    Hunk {
        /// Diff input path, or '-' for stdin
        input: String,
        /// File path as it appears in the diff
        path: String,
        /// Zero-based hunk index within the file
        index: usize,
    },
    /// Print a minimal standalone patch for one change group
    Group {
        /// Diff input path, or '-' for stdin
        input: String,
        /// File path as it appears in the diff
        path: String,
        /// Zero-based hunk index within the file
        hunk: usize,
        /// Zero-based change group index within the hunk
        group: usize,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Generate a man page
    Man,
}

fn read_input(input: &str) -> Result<String, std::io::Error> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(input)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Files { input, skipped } => {
            let text = read_input(&input)?;
            let (diff, dropped) = Diff::parse_with_diagnostics(&text);
            for file in &diff.files {
                println!("{}", file.path);
            }
            if skipped {
                for chunk in &dropped {
                    eprintln!("skipped chunk {}: {}", chunk.chunk_index, chunk.first_line);
                }
            }
        }
        Commands::Show { input } => {
            let text = read_input(&input)?;
            let diff = Diff::parse(&text);
            println!("{}", format_diff(&diff));
        }
        Commands::Hunk { input, path, index } => {
            let text = read_input(&input)?;
            let diff = Diff::parse(&text);
            println!("{}", hunk_patch(&diff, &path, index)?);
        }
        Commands::Group {
            input,
            path,
            hunk,
            group,
        } => {
            let text = read_input(&input)?;
            let diff = Diff::parse(&text);
            // Group patches already end with a newline.
            print!("{}", change_group_patch(&diff, &path, hunk, group)?);
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "diff-slicer", &mut std::io::stdout());
        }
        Commands::Man => {
            let man = clap_mangen::Man::new(Cli::command());
            man.render(&mut std::io::stdout())?;
        }
    }

    Ok(())
}
