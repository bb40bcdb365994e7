use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold Laravel projects with Vue, Tailwind CSS, Inertia, Ziggy and Font Awesome", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install frontend dependencies, register the Inertia middleware and copy default files
    Scaffold {
        /// Laravel project root (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Skip npm dependency installation
        #[arg(long)]
        skip_install: bool,
    },

    /// Insert an entry into a delimited region of a file, if missing
    Patch {
        #[command(flatten)]
        args: commands::patch::PatchCommand,
    },

    /// List the built-in stub files
    Stubs {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scaffold { path, skip_install } => {
            let exit_code = commands::scaffold::execute(path, skip_install)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Patch { args } => {
            let exit_code = commands::patch::run(args)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Commands::Stubs { json } => {
            commands::stubs::execute(json)?;
        }
    }

    Ok(())
}
