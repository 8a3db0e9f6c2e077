// algotrace: step-by-step sorting and searching visualizer

use std::fs::File;
use std::io;
use std::path::PathBuf;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotrace::algorithms::{Algorithm, DEFAULT_TARGET};
use algotrace::dataset::Datasets;
use algotrace::engine::{EngineConfig, PlaybackEngine};
use algotrace::ui::App;

const DEFAULT_LOG_FILE: &str = "algotrace.log";

/// Command-line options
struct Options {
    algorithm: Algorithm,
    size: Option<usize>,
    target: Option<i64>,
    config: Option<PathBuf>,
    datasets: Option<PathBuf>,
}

fn print_usage(program_name: &str) {
    eprintln!(
        "Usage: {} [ALGORITHM] [--size N] [--target T] [--config FILE] [--datasets FILE]",
        program_name
    );
    eprintln!();
    eprintln!("Algorithms:");
    for algorithm in Algorithm::ALL {
        eprintln!("  {:<16} {}", algorithm.slug(), algorithm.name());
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} quick-sort --size 25", program_name);
    eprintln!("  {} binary-search --target {}", program_name, DEFAULT_TARGET);
    eprintln!();
    eprintln!("Set RUST_LOG=debug to write a log to ${{ALGOTRACE_LOG_FILE:-{}}}", DEFAULT_LOG_FILE);
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        algorithm: Algorithm::BubbleSort,
        size: None,
        target: None,
        config: None,
        datasets: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("Missing value for {}", flag))
        };
        match arg.as_str() {
            "--size" => {
                let raw = value("--size")?;
                options.size = Some(raw.parse().map_err(|_| format!("Invalid size '{}'", raw))?);
            }
            "--target" => {
                let raw = value("--target")?;
                options.target = Some(raw.parse().map_err(|_| format!("Invalid target '{}'", raw))?);
            }
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--datasets" => options.datasets = Some(PathBuf::from(value("--datasets")?)),
            flag if flag.starts_with("--") => return Err(format!("Unknown option '{}'", flag)),
            slug => {
                options.algorithm = Algorithm::from_slug(slug)
                    .ok_or_else(|| format!("Unknown algorithm '{}'", slug))?;
            }
        }
    }

    if let Some(target) = options.target {
        options.algorithm = options.algorithm.with_target(target);
    }
    Ok(options)
}

/// Log to a file so the alternate screen stays clean; off unless RUST_LOG is set
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let path = std::env::var("ALGOTRACE_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = File::create(&path)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("logging to {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotrace");

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(program_name);
        return Ok(());
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    };

    init_logging()?;

    let mut config = match &options.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };
    if let Some(size) = options.size {
        config.initial_size = size;
    }

    let datasets = match &options.datasets {
        Some(path) => match Datasets::load(path) {
            Ok(datasets) => datasets,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Datasets::builtin(),
    };

    let engine = match PlaybackEngine::new(datasets, config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine, options.algorithm);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
