use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use easydrag::AnimationArg;
use easydrag::core::config::{self, CliOverrides, EasyDragConfig};
use easydrag::shelf::{JsonStore, MemoryStore, Shelf};
use easydrag::tui;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "easydrag", about = "Drag books between shelves in the terminal")]
struct Args {
    /// Shelf data file (relative paths live under ~/.easydrag/)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Disable haptic feedback hooks
    #[arg(long)]
    no_haptics: bool,

    /// Animation preset for list moves
    #[arg(long, value_enum)]
    animation: Option<AnimationArg>,

    /// Fill an empty shelf with sample books
    #[arg(long)]
    seed: bool,

    /// Log verbosity written to easydrag.log
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to easydrag.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("easydrag.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Falling back to default config: {}", e);
        EasyDragConfig::default()
    });
    let cli = CliOverrides {
        data_file: args.data_file.clone(),
        animation: args.animation.map(Into::into),
        no_haptics: args.no_haptics,
    };
    let resolved = config::resolve(&file_config, &cli);

    info!(
        "EasyDrag starting up (data: {}, animation: {}, haptics: {})",
        resolved.data_path.display(),
        resolved.move_config.animation.label(),
        resolved.move_config.enable_haptics
    );

    let mut shelf = match JsonStore::open(&resolved.data_path) {
        Ok(store) => Shelf::new(Box::new(store)),
        Err(e) => {
            warn!("Could not open {}: {}; using an in-memory shelf", resolved.data_path.display(), e);
            let mut shelf = Shelf::new(Box::new(MemoryStore::default()));
            shelf.last_error = Some(e.to_string());
            shelf
        }
    };
    shelf.fetch_data();
    if args.seed {
        shelf.seed_samples();
    }

    tui::run(shelf, resolved.move_config)
}
