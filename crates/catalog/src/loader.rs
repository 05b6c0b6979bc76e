// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV rule table parsing.
//!
//! A rule table has one row per collection category:
//!
//! ```text
//! id,name,type,weekdays,weekday,ordinals,color,description
//! burnable,Burnable,weekly,2;5,,,#ff7043,Kitchen waste
//! paper,Paper,monthly,,3,1;3,#ab47bc,Bundled newspapers
//! ```
//!
//! Headers are matched case-insensitively. List columns accept `;`, `,` or
//! spaces as separators. A row whose `type` is not `weekly` or `monthly` is
//! kept as an unrecognized rule that never matches.

use bincal_domain::{CollectionRule, DomainError, validate_rule_set};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, RowError};

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["id", "name", "type"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, CatalogError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !header_map.contains_key(**required))
        .map(|required| String::from(*required))
        .collect();

    if !missing.is_empty() {
        return Err(CatalogError::MissingHeaders(missing));
    }

    Ok(header_map)
}

/// Parses a list column such as `2;5` or `1, 3`.
fn parse_number_list(field_name: &str, raw: &str, errors: &mut Vec<String>) -> Vec<u8> {
    raw.split([';', ',', ' '])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| {
            item.parse::<u8>().map_or_else(
                |_| {
                    errors.push(format!("{field_name}: invalid number '{item}'"));
                    None
                },
                Some,
            )
        })
        .collect()
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<CollectionRule, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut required = |name: &str| -> String {
        get_field(name).unwrap_or_else(|| {
            errors.push(format!("{name}: required field is missing or empty"));
            String::new()
        })
    };

    let id: String = required("id");
    let name: String = required("name");
    let kind: String = required("type");

    if !errors.is_empty() {
        return Err(errors);
    }

    let built: Result<CollectionRule, DomainError> = match kind.to_lowercase().as_str() {
        "weekly" => {
            let weekdays: Vec<u8> = parse_number_list(
                "weekdays",
                &get_field("weekdays").unwrap_or_default(),
                &mut errors,
            );
            CollectionRule::weekly(&id, &name, &weekdays)
        }
        "monthly" => {
            #[allow(clippy::option_if_let_else)]
            let weekday: Option<u8> = match get_field("weekday") {
                Some(raw) => raw.parse::<u8>().map_or_else(
                    |_| {
                        errors.push(format!("weekday: invalid number '{raw}'"));
                        None
                    },
                    Some,
                ),
                None => {
                    errors.push(String::from("weekday: required for monthly rules"));
                    None
                }
            };
            let ordinals: Vec<u8> = parse_number_list(
                "ordinals",
                &get_field("ordinals").unwrap_or_default(),
                &mut errors,
            );

            match weekday {
                Some(weekday) => CollectionRule::monthly(&id, &name, weekday, &ordinals),
                None => return Err(errors),
            }
        }
        _ => {
            warn!(rule_id = %id, kind = %kind, "Unrecognized rule type, rule will never match");
            CollectionRule::unrecognized(&id, &name, &kind)
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    match built {
        Ok(rule) => Ok(rule
            .with_color(&get_field("color").unwrap_or_default())
            .with_description(&get_field("description").unwrap_or_default())),
        Err(e) => {
            errors.push(e.to_string());
            Err(errors)
        }
    }
}

/// Parses a rule table from CSV text.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content, header row first
///
/// # Returns
///
/// The rules in table order.
///
/// # Errors
///
/// Returns an error if:
/// - The CSV cannot be read or required headers are missing
/// - Any row is invalid (all row problems are reported together)
/// - The table has no data rows
/// - Two rows share the same id
pub fn parse_rules_csv(csv_content: &str) -> Result<Vec<CollectionRule>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| CatalogError::InvalidFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut rules: Vec<CollectionRule> = Vec::new();
    let mut row_errors: Vec<RowError> = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let row_number: usize = idx + 1;
        let record: StringRecord = record.map_err(|e| CatalogError::InvalidFormat {
            reason: format!("Failed to read row {row_number}: {e}"),
        })?;

        match parse_row(&record, &header_map) {
            Ok(rule) => rules.push(rule),
            Err(messages) => row_errors.push(RowError {
                row_number,
                messages,
            }),
        }
    }

    if !row_errors.is_empty() {
        return Err(CatalogError::InvalidRows(row_errors));
    }
    if rules.is_empty() {
        return Err(CatalogError::NoRules);
    }

    validate_rule_set(&rules)?;
    debug!(count = rules.len(), "Parsed rule table");

    Ok(rules)
}

/// Reads and parses a rule table file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn load_rules_from_path(path: &Path) -> Result<Vec<CollectionRule>, CatalogError> {
    let content: String = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let rules: Vec<CollectionRule> = parse_rules_csv(&content)?;
    info!(path = %path.display(), count = rules.len(), "Loaded rule table");

    Ok(rules)
}
