use clap::Parser;
use dedash::core::action::{Action, update};
use dedash::core::config::{self, CliOverrides, DedashConfig, ResolvedConfig, StartupLog};
use dedash::core::directory::{Directory, DirectoryError};
use dedash::core::sort::SortKey;
use dedash::core::state::App;
use dedash::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dedash", about = "Browse nearby restaurants from the terminal")]
struct Args {
    /// Initial list ordering
    #[arg(short, long, value_enum)]
    sort: Option<SortKey>,

    /// Restaurant data file (JSON) to use instead of the built-in list
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Open straight onto a restaurant's page
    #[arg(short, long, value_name = "ID")]
    restaurant: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn load_directory(config: &ResolvedConfig) -> Result<Directory, DirectoryError> {
    match &config.data_file {
        Some(path) => Directory::from_file(path),
        None => Directory::embedded(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config decides where and how loudly we log, so it loads first and
    // its messages wait in the startup log
    let mut startup = StartupLog::default();
    let file_config = config::load_config(&mut startup).unwrap_or_else(|e| {
        startup.warn(format!("{}; using defaults", e));
        DedashConfig::default()
    });
    let overrides = CliOverrides {
        sort: args.sort,
        data_file: args.data,
    };
    let resolved = config::resolve(&file_config, &overrides, &mut startup);

    init_logging(&resolved);
    startup.replay();
    log::info!(
        "DeDash starting up (sort: {}, location: {})",
        resolved.default_sort.id(),
        resolved.location
    );

    let directory = match load_directory(&resolved) {
        Ok(directory) => directory,
        Err(e) => {
            log::error!("Failed to load restaurants: {}", e);
            eprintln!("dedash: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::from_config(directory, &resolved);
    if let Some(id) = args.restaurant {
        update(&mut app, Action::SelectRestaurant(id));
    }

    match tui::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("dedash: {}", e);
            ExitCode::FAILURE
        }
    }
}
