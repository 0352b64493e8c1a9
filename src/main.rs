use clap::{Parser, Subcommand};
use gallery_index::{config, generate, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-index")]
#[command(about = "Index gallery images into a JSON file, grouped by category")]
#[command(long_about = "\
Index gallery images into a JSON file, grouped by category

Every folder under the image root becomes a category named after the folder.
Images are listed with forward-slash paths, sorted by name.

  images/MASTER/
  ├── Nature/
  │   ├── a.jpg
  │   └── b.png
  └── Urban/
      └── c.webp

  →  gallery.json
  {
    \"Nature\": [\"images/MASTER/Nature/a.jpg\", \"images/MASTER/Nature/b.png\"],
    \"Urban\": [\"images/MASTER/Urban/c.webp\"]
  }

Run 'gallery-index gen-config' to print a documented gallery-index.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Directory to scan for category folders
    #[arg(long, global = true)]
    image_root: Option<PathBuf>,

    /// Where to write the JSON index
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Image extension to accept (repeatable; replaces the configured list)
    #[arg(long = "ext", global = true)]
    extensions: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the image root and write the index (default)
    Index,
    /// Scan and list categories without writing the index
    Check,
    /// Print a stock gallery-index.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or(Command::Index) {
        Command::Index => {
            let config = resolve_config(cli)?;
            match generate::generate(&config) {
                Ok(count) => output::print_success(&config.output_file, count),
                Err(e) => match e.missing_input_directory() {
                    Some(root) => output::print_missing_root(root),
                    None => return Err(e.into()),
                },
            }
        }
        Command::Check => {
            let config = resolve_config(cli)?;
            match scan::scan(&config) {
                Ok(index) => output::print_check_output(&index),
                Err(scan::ScanError::MissingInputDirectory(root)) => {
                    output::print_missing_root(&root)
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Stock defaults, then the config file, then command-line flags.
fn resolve_config(cli: Cli) -> Result<config::IndexerConfig, config::ConfigError> {
    config::load_config(&cli.config)?.with_overrides(cli.image_root, cli.output, cli.extensions)
}
