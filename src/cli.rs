/*!
chromatic Command Line Interface

Runs the chromatic gradient commands over every item of a JSON scene document.

## Usage

```bash
chromatic lab scene.json --output scene.lab.json
chromatic undo scene.lab.json
chromatic show scene.json
```

Log verbosity is controlled with `RUST_LOG` (default `chromatic=info`).
*/

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromatic::host::document::Document;
use chromatic::host::{apply_command, Command, Fill, Notifier, SceneItem};
use chromatic::VERSION;

#[derive(Parser)]
#[command(name = "chromatic")]
#[command(about = "Perceptually interpolated color stops for gradients")]
#[command(version = VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add color stops interpolated in CIE Lab
    Lab(ApplyArgs),

    /// Add color stops interpolated in linear RGB
    Lrgb(ApplyArgs),

    /// Add color stops interpolated in CIE LCh
    Lch(ApplyArgs),

    /// Remove previously added color stops
    Undo(ApplyArgs),

    /// Print the color stops of every item
    Show {
        /// Path to the scene document
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Path to the scene document
    file: PathBuf,

    /// Output file path (defaults to rewriting the input)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long, default_value = "false")]
    pretty: bool,
}

/// Stands in for the host's modal dialog.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

fn run(command: Command, args: ApplyArgs) -> anyhow::Result<()> {
    let mut document = Document::load(&args.file)?;
    info!(
        file = %args.file.display(),
        items = document.items.len(),
        command = %command,
        "applying command"
    );

    let report = apply_command(&mut document.items, command, &mut StderrNotifier);
    if report.all_failed() {
        anyhow::bail!("no item in {} has a gradient fill", args.file.display());
    }

    let output = args.output.as_ref().unwrap_or(&args.file);
    document
        .save(output, args.pretty)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    info!(
        updated = report.updated,
        failed = report.failed,
        output = %output.display(),
        "document written"
    );
    Ok(())
}

fn show(file: PathBuf) -> anyhow::Result<()> {
    let document = Document::load(&file)?;

    for item in &document.items {
        match item.fill().and_then(|f| f.color_stops()) {
            Some(stops) => {
                println!("{} ({} stops)", item.name(), stops.len());
                for stop in stops {
                    println!("  {:>9.6}  {}", stop.position, stop.color);
                }
            }
            None => println!("{} (no gradient)", item.name()),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromatic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lab(args) => run(Command::LabGradient, args),
        Commands::Lrgb(args) => run(Command::LrgbGradient, args),
        Commands::Lch(args) => run(Command::LchGradient, args),
        Commands::Undo(args) => run(Command::UndoChromaticGradient, args),
        Commands::Show { file } => show(file),
    }
}
