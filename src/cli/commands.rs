//! Subcommand handlers for verify, decode and config actions.

use std::path::{Path, PathBuf};
use std::time::Instant;

use super::args::{ConfigAction, VerifyArgs};
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::puzzle::{load_solutions, InputError, Puzzle};
use crate::report::Report;

/// Decode the puzzle and compare every sentence with the solution file.
///
/// Timing covers loading and decoding the puzzle, not reading solutions.
pub fn run_verify(config: &Config, args: VerifyArgs) -> Result<Report, InputError> {
    let input = config.input_path(args.input);
    let solution = config.solution_path(args.solution);

    let start = Instant::now();
    let decoded = decode_file(config, &input)?;
    let elapsed = start.elapsed();

    let expected = load_solutions(&solution)?;
    let report = Report::verify(decoded, &expected, elapsed);
    log::info!(
        "{}/{} sentences matched in {:?}",
        report.matched_count(),
        report.total(),
        elapsed
    );
    Ok(report)
}

/// Decode the puzzle and return one sentence per test case.
pub fn run_decode(config: &Config, input: Option<PathBuf>) -> Result<Vec<String>, InputError> {
    let input = config.input_path(input);
    decode_file(config, &input)
}

fn decode_file(config: &Config, path: &Path) -> Result<Vec<String>, InputError> {
    let puzzle = Puzzle::load(path)?;
    log::debug!("Decoding {} test case(s)", puzzle.cases.len());
    puzzle.solve(config.decode.blank)
}

/// Render the configuration together with the paths a run would use.
///
/// `overrides` carries paths already resolved from flags or the environment.
pub fn config_summary(
    config: &Config,
    overrides: &VerifyArgs,
) -> Result<String, toml::ser::Error> {
    let text = config.to_toml()?;
    Ok(format!(
        "Current configuration:\n\n{}\n  Input: {}\n  Solution: {}\n",
        text,
        config.input_path(overrides.input.clone()).display(),
        config.solution_path(overrides.solution.clone()).display()
    ))
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    config_path: Option<&Path>,
    overrides: &VerifyArgs,
) {
    let config_path = config_path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            match config_summary(config, overrides) {
                Ok(summary) => print!("{}", summary),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'braille-decoder config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            if let Err(e) = std::fs::write(&config_path, DEFAULT_CONFIG) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathsConfig;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir) -> Config {
        let top: String = ('a'..='z').flat_map(|c| [c, '.']).collect();
        let rest = ".".repeat(52);
        let input = dir.path().join("puzzle.in");
        fs::write(
            &input,
            format!("{top}\n{rest}\n{rest}\n2\nh.i.\n....\n....\nb.y.e.\n......\n......\n"),
        )
        .unwrap();
        let solution = dir.path().join("puzzle.uit");
        fs::write(&solution, "1 HI\n2 BYTE\n").unwrap();

        Config {
            paths: PathsConfig {
                input: Some(input),
                solution: Some(solution),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_run_decode() {
        let dir = TempDir::new().unwrap();
        let config = write_fixture(&dir);
        let decoded = run_decode(&config, None).unwrap();
        assert_eq!(decoded, vec!["HI".to_string(), "BYE".to_string()]);
    }

    #[test]
    fn test_run_verify_reports_mismatch() {
        let dir = TempDir::new().unwrap();
        let config = write_fixture(&dir);
        let report = run_verify(&config, VerifyArgs::default()).unwrap();
        assert_eq!(report.total(), 2);
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.outcomes[1].expected.as_deref(), Some("BYTE"));
    }

    #[test]
    fn test_config_summary_uses_resolved_paths() {
        let config = Config::default();
        let overrides = VerifyArgs {
            input: Some(PathBuf::from("from-env.in")),
            ..VerifyArgs::default()
        };
        let summary = config_summary(&config, &overrides).unwrap();
        assert!(summary.starts_with("Current configuration:"));
        assert!(summary.contains("  Input: from-env.in\n"));
        assert!(summary.contains(&format!("  Solution: {}\n", crate::config::DEFAULT_SOLUTION)));
    }

    #[test]
    fn test_run_verify_missing_input() {
        let dir = TempDir::new().unwrap();
        let config = write_fixture(&dir);
        let args = VerifyArgs {
            input: Some(dir.path().join("missing.in")),
            ..VerifyArgs::default()
        };
        let err = run_verify(&config, args).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
