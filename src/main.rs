//! Media DB CLI
//!
//! Usage:
//!   media-db render [OPTIONS] [RECORD]   Print the note for a music release (YAML record)
//!   media-db check [OPTIONS] <TEMPLATE>  Report template tags that will not resolve
//!   media-db icons                       List the icon catalog
//!
//! Set `RUST_LOG` (or pass `--verbose`) to see how each tag resolves.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use media_db::template::check;
use media_db::{create_note, AttributeBag, MusicRelease, Settings, ICON_LIST};

#[derive(Parser)]
#[command(name = "media-db")]
#[command(about = "Generate media notes from records and templates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log every resolved tag to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render the note for a music release record
    Render {
        /// Record file in YAML (reads from stdin if not provided)
        record: Option<PathBuf>,

        /// Settings file (TOML format)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Template file, overrides the template from the settings
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Print only the note's file name
        #[arg(long)]
        file_name: bool,
    },

    /// Report template tags that will not resolve
    Check {
        /// Template file
        template: PathBuf,

        /// Also resolve paths against this record (YAML)
        #[arg(short, long)]
        record: Option<PathBuf>,
    },

    /// List the icon catalog, one name per line
    Icons,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Command::Render {
            record,
            settings,
            template,
            file_name,
        } => render(record.as_deref(), settings.as_deref(), template.as_deref(), file_name),
        Command::Check { template, record } => check_template(&template, record.as_deref()),
        Command::Icons => {
            for icon in ICON_LIST {
                println!("{}", icon);
            }
        }
    }
}

fn render(
    record: Option<&Path>,
    settings: Option<&Path>,
    template: Option<&Path>,
    file_name: bool,
) {
    let settings = match settings {
        Some(path) => Settings::from_file(path).unwrap_or_else(|e| {
            fail(&format!("Error loading settings '{}': {}", path.display(), e))
        }),
        None => Settings::default(),
    };

    let mut config = settings
        .note_config()
        .unwrap_or_else(|e| fail(&format!("Error: {}", e)));
    if let Some(path) = template {
        config = config.with_template(read_file(path));
    }

    let release = load_record(record);
    match create_note(&release, &config) {
        Ok(note) if file_name => println!("{}", note.file_name),
        Ok(note) => print!("{}", note.content),
        Err(e) => fail(&format!("Error: {}", e)),
    }
}

fn check_template(template: &Path, record: Option<&Path>) {
    let source = read_file(template);
    let release = record.map(|path| load_record(Some(path)));
    let bag = release.as_ref().map(|r| r as &dyn AttributeBag);

    let diagnostics = check(&source, bag);
    if diagnostics.is_empty() {
        return;
    }

    let filename = template.display().to_string();
    let color = io::stderr().is_terminal();
    for diagnostic in &diagnostics {
        eprint!("{}", diagnostic.format(&source, &filename, color));
    }
    eprintln!("{} invalid tag(s) in {}", diagnostics.len(), filename);
    process::exit(1);
}

fn load_record(path: Option<&Path>) -> MusicRelease {
    let content = match path {
        Some(path) => read_file(path),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                fail(&format!("Error reading from stdin: {}", e));
            }
            buffer
        }
    };

    serde_yaml::from_str(&content).unwrap_or_else(|e| fail(&format!("Error parsing record: {}", e)))
}

fn read_file(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("Error reading file '{}': {}", path.display(), e)))
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
