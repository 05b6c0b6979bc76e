// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bincal_domain::DomainError;
use thiserror::Error;

/// Problems found in one data row of a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// One message per problem found in the row.
    pub messages: Vec<String>,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row_number, self.messages.join("; "))
    }
}

/// Rule table loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The table could not be read as CSV.
    #[error("Invalid rule table format: {reason}")]
    InvalidFormat { reason: String },

    /// Required columns are absent from the header row.
    #[error("Missing required headers: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    /// One or more data rows could not be turned into rules.
    #[error(
        "{} invalid row(s) in rule table: {}",
        .0.len(),
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(" | ")
    )]
    InvalidRows(Vec<RowError>),

    /// The table has a header but no data rows.
    #[error("Rule table contains no rules")]
    NoRules,

    /// The rules are individually valid but inconsistent as a set.
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(#[from] DomainError),

    /// The table file could not be read.
    #[error("Failed to read rule table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
