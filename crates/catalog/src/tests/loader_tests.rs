// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CatalogError, RowError, load_rules_from_path, parse_rules_csv};
use bincal_domain::{CollectionRule, DomainError, Recurrence, RuleKind};
use std::path::Path;
use time::Weekday;

#[test]
fn test_headers_are_case_and_whitespace_tolerant() {
    let csv: &str = " ID , Name ,TYPE,Weekdays\nburnable,Burnable,weekly,2;5\n";

    let rules: Vec<CollectionRule> = parse_rules_csv(csv).unwrap();

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id(), "burnable");
    assert_eq!(rules[0].color(), "");
}

#[test]
fn test_list_separators() {
    let csv: &str = "id,name,type,weekdays\n\
                     a,A,weekly,1;3\n\
                     b,B,weekly,\"1, 3\"\n\
                     c,C,weekly,1 3\n";

    let rules: Vec<CollectionRule> = parse_rules_csv(csv).unwrap();

    for rule in &rules {
        assert_eq!(
            rule.recurrence(),
            &Recurrence::Weekly {
                weekdays: vec![Weekday::Monday, Weekday::Wednesday]
            },
            "rule {}",
            rule.id()
        );
    }
}

#[test]
fn test_monthly_row() {
    let csv: &str =
        "id,name,type,weekday,ordinals,color\npaper,Paper,Monthly,3,3;1,#ab47bc\n";

    let rules: Vec<CollectionRule> = parse_rules_csv(csv).unwrap();

    assert_eq!(
        rules[0].recurrence(),
        &Recurrence::Monthly {
            weekday: Weekday::Wednesday,
            ordinals: vec![1, 3]
        }
    );
    assert_eq!(rules[0].color(), "#ab47bc");
}

#[test]
fn test_unknown_type_is_kept_as_unrecognized() {
    let csv: &str = "id,name,type\nbulky,Bulky,on-request\n";

    let rules: Vec<CollectionRule> = parse_rules_csv(csv).unwrap();

    assert_eq!(rules[0].kind(), RuleKind::Unrecognized);
}

#[test]
fn test_missing_headers_are_reported() {
    let csv: &str = "id,label\nburnable,Burnable\n";

    match parse_rules_csv(csv) {
        Err(CatalogError::MissingHeaders(missing)) => {
            assert_eq!(missing, vec![String::from("name"), String::from("type")]);
        }
        other => panic!("expected MissingHeaders, got {other:?}"),
    }
}

#[test]
fn test_header_only_table_has_no_rules() {
    let result: Result<Vec<CollectionRule>, CatalogError> =
        parse_rules_csv("id,name,type,weekdays\n");

    assert!(matches!(result, Err(CatalogError::NoRules)));
}

#[test]
fn test_row_errors_are_collected_with_row_numbers() {
    let csv: &str = "id,name,type,weekdays,weekday,ordinals\n\
                     ok,Ok,weekly,1,,\n\
                     ,Nameless,weekly,1,,\n\
                     bad-day,Bad,weekly,9,,\n\
                     no-weekday,NoWeekday,monthly,,,1\n\
                     bad-number,BadNumber,weekly,x,,\n";

    let Err(CatalogError::InvalidRows(rows)) = parse_rules_csv(csv) else {
        panic!("expected InvalidRows");
    };

    let numbers: Vec<usize> = rows.iter().map(|row| row.row_number).collect();
    assert_eq!(numbers, vec![2, 3, 4, 5]);
    assert_eq!(
        rows[0].messages,
        vec![String::from("id: required field is missing or empty")]
    );
    assert_eq!(
        rows[1].messages,
        vec![DomainError::InvalidWeekday {
            rule_id: String::from("bad-day"),
            value: 9
        }
        .to_string()]
    );
    assert_eq!(
        rows[2].messages,
        vec![String::from("weekday: required for monthly rules")]
    );
    assert_eq!(
        rows[3].messages,
        vec![String::from("weekdays: invalid number 'x'")]
    );
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let csv: &str = "id,name,type,weekdays\na,A,weekly,1\na,Again,weekly,2\n";

    match parse_rules_csv(csv) {
        Err(CatalogError::InvalidRuleSet(DomainError::DuplicateRuleId(id))) => {
            assert_eq!(id, "a");
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result: Result<Vec<CollectionRule>, CatalogError> =
        load_rules_from_path(Path::new("/nonexistent/bincal/rules.csv"));

    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn test_error_display() {
    let err: CatalogError = CatalogError::InvalidRows(vec![RowError {
        row_number: 3,
        messages: vec![String::from("a"), String::from("b")],
    }]);
    assert_eq!(err.to_string(), "1 invalid row(s) in rule table: row 3: a; b");

    let err: CatalogError =
        CatalogError::MissingHeaders(vec![String::from("name"), String::from("type")]);
    assert_eq!(err.to_string(), "Missing required headers: name, type");
}
