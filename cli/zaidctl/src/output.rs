//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use zaid_id::DecodeResult;

const CLI_SCHEMA_VERSION: &str = "zaid.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// One labelled value in table output.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    pub field: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &'static str, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Print rows as a table.
pub fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("{}", "Nothing to show.".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a single item as JSON.
pub fn print_single<T: Serialize>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}

/// Print a failure verdict. Goes to stdout because it is the command's answer.
pub fn print_failure(message: &str) {
    println!("{} {}", "Invalid:".red().bold(), message);
}

/// Table rows for a decode result.
pub fn decode_rows(result: &DecodeResult) -> Vec<FieldRow> {
    match result.as_result() {
        Ok(details) => vec![
            FieldRow::new("ID number", &details.id_number),
            FieldRow::new("Date of birth", details.date_of_birth),
            FieldRow::new("Gender", details.gender),
            FieldRow::new("Citizenship", details.citizenship_status),
        ],
        Err(reason) => vec![FieldRow::new("Reason", reason.code())],
    }
}

/// Print a decode result in the specified format.
pub fn print_decode_result(result: &DecodeResult, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            match result.invalid_reason() {
                None => print_success("ID number is valid"),
                Some(reason) => print_failure(&reason.to_string()),
            }
            print_table(&decode_rows(result));
        }
        OutputFormat::Json => print_single(result),
    }
}

pub(crate) fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let mapped = to_camel_case_keys(value);
    let wrapped = wrap_with_schema(mapped);
    let sorted = sort_json_value(wrapped);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

fn sort_json_value(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(sort_json_value).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut pairs: Vec<_> = entries.into_iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            let mut mapped = serde_json::Map::new();
            for (key, value) in pairs {
                mapped.insert(key, sort_json_value(value));
            }
            serde_json::Value::Object(mapped)
        }
        other => other,
    }
}

fn to_camel_case_keys(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(to_camel_case_keys).collect())
        }
        serde_json::Value::Object(entries) => serde_json::Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (snake_to_lower_camel(&key), to_camel_case_keys(value)))
                .collect(),
        ),
        other => other,
    }
}

fn snake_to_lower_camel(input: &str) -> String {
    let mut parts = input.split('_');
    let Some(first) = parts.next() else {
        return String::new();
    };
    let mut out = String::from(first);
    for part in parts {
        if part.is_empty() {
            continue;
        }
        let mut chars = part.chars();
        if let Some(first_char) = chars.next() {
            out.push(first_char.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use zaid_id::{Decoder, FixedClock, InvalidReason};

    use super::*;

    fn decode(input: &str) -> DecodeResult {
        Decoder::new()
            .with_clock(FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()))
            .decode(input)
    }

    #[test]
    fn snake_keys_become_lower_camel() {
        assert_eq!(snake_to_lower_camel("date_of_birth"), "dateOfBirth");
        assert_eq!(snake_to_lower_camel("valid"), "valid");
        assert_eq!(snake_to_lower_camel("id__number"), "idNumber");
    }

    #[test]
    fn valid_result_json_is_wrapped_and_camel_cased() {
        let json: serde_json::Value =
            serde_json::from_str(&format_json(&decode("8001015009083"), "{}")).unwrap();
        let expected = serde_json::json!({
            "schemaVersion": "zaid.cli.v1",
            "data": {
                "valid": true,
                "idNumber": "8001015009083",
                "dateOfBirth": "1980-01-01",
                "gender": "MALE",
                "citizenshipStatus": "CITIZEN"
            }
        });
        assert_eq!(json, expected);
    }

    #[test]
    fn invalid_result_json_keeps_reason_code() {
        let json: serde_json::Value =
            serde_json::from_str(&format_json(&decode("123"), "{}")).unwrap();
        assert_eq!(json["data"]["invalidReason"], "NOT_13_DIGITS");
        assert_eq!(json["data"]["valid"], false);
    }

    #[test]
    fn json_keys_are_sorted() {
        let out = format_json(&decode("8001015009083"), "{}");
        let citizenship = out.find("citizenshipStatus").unwrap();
        let valid = out.find("\"valid\"").unwrap();
        assert!(citizenship < valid);
        assert!(out.find("\"data\"").unwrap() < out.find("schemaVersion").unwrap());
    }

    #[test]
    fn decode_rows_for_valid_and_invalid() {
        let rows = decode_rows(&decode("7504304999185"));
        assert_eq!(
            rows,
            vec![
                FieldRow::new("ID number", "7504304999185"),
                FieldRow::new("Date of birth", "1975-04-30"),
                FieldRow::new("Gender", "FEMALE"),
                FieldRow::new("Citizenship", "PERMANENT_RESIDENT"),
            ]
        );

        let rows = decode_rows(&DecodeResult::invalid(InvalidReason::InvalidDaysDigits));
        assert_eq!(rows, vec![FieldRow::new("Reason", "INVALID_DAYS_DIGITS")]);
    }

    #[test]
    fn output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
    }
}
