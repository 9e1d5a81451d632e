//! `agecalc age`: completed years for each birthday argument.

use agecalc_core::config::types::{OutputFormat, ResolvedConfig};
use agecalc_core::{compute_age_with, DateInput, DateParser};
use chrono::{Local, NaiveDate};
use color_eyre::eyre::Result;
use std::process::ExitCode;
use tracing::{debug, warn};

use super::output::{render_json, render_quiet, render_table, AgeOutput};
use crate::{AgeArgs, FormatArg};

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Quiet => OutputFormat::Quiet,
        }
    }
}

/// Run the age command. Fails with exit status 1 when any birthday is unparseable.
pub fn run(cfg: &ResolvedConfig, args: &AgeArgs) -> Result<ExitCode> {
    let parser = cfg.parsing.parser();
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let format = args.format.map_or(cfg.output.format, OutputFormat::from);
    debug!(%today, format = format.as_str(), count = args.birthdays.len(), "computing ages");

    let results: Vec<AgeOutput> =
        args.birthdays.iter().map(|raw| evaluate(&parser, raw, today)).collect();

    let output = match format {
        OutputFormat::Table => render_table(&results),
        OutputFormat::Json => render_json(&results)?,
        OutputFormat::Quiet => render_quiet(&results),
    };
    println!("{output}");

    if results.iter().all(|r| r.error.is_none()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn evaluate(parser: &DateParser, raw: &str, today: NaiveDate) -> AgeOutput {
    let input = DateInput::from(raw);

    match compute_age_with(parser, Some(&input), today) {
        Ok(age) => {
            // Birth date is only shown alongside a known age
            let birth_date = age
                .and_then(|_| input.resolve_with(parser).ok().flatten())
                .map(|d| d.format("%Y-%m-%d").to_string());
            AgeOutput { input: raw.to_string(), birth_date, age, error: None }
        }
        Err(e) => {
            warn!("{e}");
            AgeOutput {
                input: raw.to_string(),
                birth_date: None,
                age: None,
                error: Some(e.to_string()),
            }
        }
    }
}
