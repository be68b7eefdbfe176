//! Command-line front end for cardpack directories.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cardpack::editor::PackEditor;
use cardpack::store::LogProgress;
use cardpack::{scan_properties, EditorConfig, Error, RenderConfig, StyleRegistry};

#[derive(Parser)]
#[command(name = "cardpack")]
#[command(about = "Inspect, import into and rebuild card-game cardpacks")]
#[command(
    long_about = "Works on a cardpack directory: a cards.json file, behavior scripts under \
scripts/ and rendered textures under textures/.\n\n\
Environment Variables:\n\
  RUST_LOG    Log filter (defaults to info)"
)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Rendered card width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Rendered card height in pixels
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Write cards.json on a single line
    #[arg(long, global = true)]
    compact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered card styles
    Styles,
    /// Print the cards and scripts of a cardpack
    Info {
        /// Cardpack directory
        dir: PathBuf,
    },
    /// Print the properties a script declares
    Scan {
        /// Script file
        file: PathBuf,
    },
    /// Create cards from a text file, one title per line with optional (N) copies
    Import {
        /// Cardpack directory, created if it has no cards.json yet
        dir: PathBuf,
        /// Text file with card titles
        titles: PathBuf,
    },
    /// Load and save a cardpack, regenerating its texture cache
    Rebuild {
        /// Cardpack directory
        dir: PathBuf,
    },
}

impl Args {
    fn editor_config(&self) -> EditorConfig {
        let defaults = RenderConfig::default();
        let render = defaults.clone().with_size(
            self.width.unwrap_or(defaults.width),
            self.height.unwrap_or(defaults.height),
        );
        let config = EditorConfig::default().with_render(render);
        if self.compact {
            config.compact_json()
        } else {
            config
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.editor_config();
    let registry = StyleRegistry::builtin();

    match &args.command {
        Commands::Styles => {
            for name in registry.names() {
                println!("{name}");
            }
        }
        Commands::Info { dir } => {
            let editor = PackEditor::open(dir, &registry, &config)
                .with_context(|| format!("failed to open cardpack {}", dir.display()))?;
            print_info(&editor);
        }
        Commands::Scan { file } => {
            let source =
                std::fs::read_to_string(file).with_context(|| format!("failed to read script {}", file.display()))?;
            for name in scan_properties(&source) {
                println!("{name}");
            }
        }
        Commands::Import { dir, titles } => {
            let text = std::fs::read_to_string(titles)
                .with_context(|| format!("failed to read titles from {}", titles.display()))?;
            let mut editor = open_or_create(dir, &registry, &config)?;
            let created = editor.import_from_text(&text);
            println!("imported {} cards", created.len());
            editor
                .save(&mut LogProgress::default())
                .with_context(|| format!("failed to save cardpack {}", dir.display()))?;
        }
        Commands::Rebuild { dir } => {
            let mut editor = PackEditor::open(dir, &registry, &config)
                .with_context(|| format!("failed to open cardpack {}", dir.display()))?;
            let summary = editor
                .save(&mut LogProgress::default())
                .with_context(|| format!("failed to save cardpack {}", dir.display()))?;
            println!(
                "wrote {} front textures, {} new backs",
                summary.front_textures.len(),
                summary.backs_rendered.len()
            );
        }
    }

    Ok(())
}

fn open_or_create<'r>(dir: &Path, registry: &'r StyleRegistry, config: &EditorConfig) -> Result<PackEditor<'r>> {
    match PackEditor::open(dir, registry, config) {
        Ok(editor) => Ok(editor),
        Err(Error::NotACardpack(_)) => {
            tracing::info!(dir = %dir.display(), "starting a new cardpack");
            Ok(PackEditor::create(dir, registry, config))
        }
        Err(e) => Err(e).with_context(|| format!("failed to open cardpack {}", dir.display())),
    }
}

fn print_info(editor: &PackEditor<'_>) {
    let pack = editor.pack();
    println!("{} cards", pack.len());
    for (i, card) in pack.iter().enumerate() {
        let style = card.style().name().unwrap_or("-");
        let marker = if card.style().is_unresolved() { " (unresolved)" } else { "" };
        println!("  [{i}] {} <{}> style={style}{marker}", card.title(), card.category());
        if card.has_script() {
            println!("      script={}", card.script_path());
        }
        for (name, value) in card.properties.iter() {
            println!("      {name} = {value}");
        }
    }

    println!("{} scripts", editor.scripts().len());
    for script in editor.scripts() {
        println!("  {script}");
    }
}
