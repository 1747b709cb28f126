//! CLI Adapter.

mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;
use crate::{DestroyOptions, GenerateOptions};

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(version)]
#[command(
    about = "Scaffold Hotwire CRUD controllers, views, specs, and routes",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate controllers, specs, views, routes, and tag constants for a resource
    #[clap(visible_alias = "g")]
    Generate {
        /// Resource name (e.g. products)
        name: String,
        /// Actions to generate (default: index edit new show)
        actions: Vec<String>,
        /// Overwrite files that differ from the generated content
        #[arg(short, long)]
        force: bool,
        /// Show what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
        /// Do not run the lint command afterwards
        #[arg(long)]
        skip_lint: bool,
    },
    /// Remove the files and routes generated for a resource
    #[clap(visible_alias = "d")]
    Destroy {
        /// Resource name (e.g. products)
        name: String,
        /// Actions whose views are removed (default: index edit new show)
        actions: Vec<String>,
        /// Show what would be removed without deleting
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { name, actions, force, dry_run, skip_lint } => {
            let options =
                GenerateOptions { name, actions: explicit(actions), force, dry_run, skip_lint };
            crate::generate(options).map(|outcome| output::print_generate(&outcome))
        }
        Commands::Destroy { name, actions, dry_run } => {
            let options = DestroyOptions { name, actions: explicit(actions), dry_run };
            crate::destroy(options).map(|outcome| output::print_destroy(&outcome))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// No positional actions means "use the configured defaults".
fn explicit(actions: Vec<String>) -> Option<Vec<String>> {
    if actions.is_empty() { None } else { Some(actions) }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
