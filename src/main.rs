use braille_decoder::cli::{self, Args, Command};
use braille_decoder::config::Config;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Exit status when `verify --strict` finds a mismatch.
const EXIT_MISMATCH: i32 = 2;

fn load_env() {
    // Load .env file, don't override existing env vars
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Load .env file before parsing so BRAILLE_* variables reach clap
    load_env();

    let args = Args::parse();
    init_logging(args.verbose);

    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if the default config can't be loaded
    let config_path = args.config.clone();
    let config = match Config::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) if config_path.is_none() => {
            eprintln!("Warning: Failed to load config file: {}", e);
            eprintln!("Using default settings.\n");
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Paths resolved from top-level flags or BRAILLE_* variables
    let overrides = args.verify.clone();

    match args.into_command() {
        Command::Verify(verify) => {
            let strict = verify.strict;
            let report = match cli::run_verify(&config, verify) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = report.print() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            if strict && !report.all_matched() {
                std::process::exit(EXIT_MISMATCH);
            }
        }
        Command::Decode { input } => match cli::run_decode(&config, input) {
            Ok(sentences) => {
                for sentence in sentences {
                    println!("{}", sentence);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Command::Config { action } => {
            cli::handle_config_action(action, &config, config_path.as_deref(), &overrides);
        }
    }
}
