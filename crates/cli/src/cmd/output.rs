//! Output formatting for age results.

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// One evaluated birthday, as printed by `agecalc age`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AgeOutput {
    pub input: String,
    pub birth_date: Option<String>,
    pub age: Option<i32>,
    pub error: Option<String>,
}

impl AgeOutput {
    /// Age as text, or `unknown` / `invalid` when there is none.
    pub fn age_label(&self) -> String {
        match (self.age, &self.error) {
            (Some(age), _) => age.to_string(),
            (None, Some(_)) => "invalid".to_string(),
            (None, None) => "unknown".to_string(),
        }
    }
}

#[derive(Tabled)]
struct AgeRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Birth date")]
    birth_date: String,
    #[tabled(rename = "Age")]
    age: String,
}

pub fn render_table(results: &[AgeOutput]) -> String {
    let rows: Vec<AgeRow> = results
        .iter()
        .map(|r| AgeRow {
            input: r.input.clone(),
            birth_date: r.birth_date.clone().unwrap_or_else(|| "-".to_string()),
            age: r.age_label(),
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

pub fn render_json(results: &[AgeOutput]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// One line per input, in input order.
pub fn render_quiet(results: &[AgeOutput]) -> String {
    results.iter().map(AgeOutput::age_label).collect::<Vec<_>>().join("\n")
}
