use agecalc_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use crate::logging;

pub fn run(config: Option<&Path>) -> ExitCode {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            let _log_guard = match logging::init(&rc) {
                Ok(guard) => guard,
                Err(e) => {
                    println!("FAIL agecalc doctor");
                    println!("{e:#}");
                    return ExitCode::FAILURE;
                }
            };
            debug!("configuration loaded");

            println!("OK   agecalc doctor");
            println!(
                "path: {}",
                rc.source.as_ref().map_or_else(
                    || format!("(defaults, no file at {})", default_config_path().display()),
                    |p| p.display().to_string()
                )
            );
            println!("parsing.formats: {}", rc.parsing.parser().extra_formats().join(", "));
            println!("output.format: {}", rc.output.format.as_str());
            println!("logging.level: {}", rc.logging.level);
            if let Some(ref level) = rc.logging.file_level {
                println!("logging.file_level: {level}");
            }
            if let Some(ref file) = rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("FAIL agecalc doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            ExitCode::FAILURE
        }
    }
}
