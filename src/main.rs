use clap::Parser;
use corrector::core::config::{self, CliOverrides, StartupNotes};
use corrector::core::prefs::{self, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "corrector", about = "Fix mistakes in text with a remote correction service")]
struct Args {
    /// Correction service id (overrides config and CORRECTOR_SERVICE_ID)
    #[arg(short, long)]
    service: Option<String>,

    /// Service API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let cli = CliOverrides {
        service: args.service.as_deref(),
        base_url: args.base_url.as_deref(),
        log_level: args.log_level.as_deref(),
    };
    let mut notes = StartupNotes::new();
    let resolved = match config::load_config(&mut notes)
        .and_then(|file| config::resolve(&file, cli, &mut notes))
    {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("corrector: {e}");
            std::process::exit(1);
        }
    };

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    notes.replay();

    log::info!(
        "Corrector starting up (service={}, base_url={})",
        resolved.service_id,
        resolved.base_url
    );

    let store: Box<dyn PreferenceStore> = match prefs::prefs_path() {
        Some(path) => Box::new(FilePreferenceStore::open(path)),
        None => {
            log::warn!("No home directory; mode preference will not persist");
            Box::new(MemoryPreferenceStore::new())
        }
    };

    corrector::tui::run(resolved, store)
}
