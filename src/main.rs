use anyhow::Result;
use clap::{Parser, Subcommand};

use deepagents_skill::version;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Deep Agents CLI skill for Factory.ai Droid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the Deep Agents CLI skill for Factory.ai Droid
    Init {
        /// Skip existing file checks (still never overwrites)
        #[arg(long)]
        force: bool,

        /// Target directory (defaults to current directory)
        #[arg(long, default_value = ".")]
        path: String,

        /// Install as a personal skill (~/.factory/skills/) instead of workspace
        #[arg(long)]
        personal: bool,
    },

    /// Show version information
    Version {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init {
            force,
            path,
            personal,
        }) => {
            commands::init::execute(force, &path, personal)?;
        }
        Some(Commands::Version { json }) => {
            commands::version::execute(json)?;
        }
        None => print_usage(),
    }

    Ok(())
}

/// Bare invocation mirrors `--help` in spirit but keeps the short form
/// users see on first contact with the package.
fn print_usage() {
    println!("\nDeep Agents CLI Skill v{}\n", version::resolve());
    println!("Usage:  deepagents-skill init [options]\n");
    println!("Options:");
    println!("  --path <dir>    Target directory (default: current directory)");
    println!("  --personal      Install as personal skill (~/.factory/skills/)");
    println!("  --force         Skip existing file checks");
    println!("  --help          Show help");
    println!("  --version       Show version\n");
}
