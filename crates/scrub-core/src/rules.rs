//! Validation rules for the municipal crime record layout.
//!
//! Mandatory fields identify the record (numeric id, letter-prefixed case
//! number, parseable timestamp); everything else is nullable. Patterns are
//! anchored on both ends so a valid prefix inside a longer junk value never
//! passes.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

use scrub_model::{Check, FieldRule, GeneratedColumn, Generator};

use crate::datetime::{KNOWN_DATE_FORMATS, parse_record_datetime};

/// Input columns retained for cleaning, in output order.
pub const RETAINED_COLUMNS: &[&str] = &[
    "id",
    "case_number",
    "date",
    "block",
    "iucr",
    "primary_type",
    "description",
    "location_description",
    "arrest",
    "domestic",
    "beat",
    "district",
    "ward",
    "community_area",
    "location",
    "zip_codes",
];

// Anonymized house number like 013XX, then a street location like W 3RD AVE.
// The two captures feed the house_num/street_addr generator.
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,4}x{1,4}) ([a-z\d][a-z\d ]{0,99})$").expect("block pattern")
});

// Four-character alphanumeric incident classification code.
static IUCR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z\d]{4}$").expect("iucr pattern"));

// Up to five groups of letters and dashes.
static PRIMARY_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z\-]{1,20}(?: |$)){1,5}$").expect("primary type pattern")
});

// Up to seven groups of letters, digits, or [-/:,.()$}].
static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z\-/:,.()\d$}]{1,25}(?: |$)){1,7}$").expect("description pattern")
});

// Up to seven groups of letters or [-/.,()].
static LOCATION_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z\-/.,()]{1,20}(?: |$)){1,7}$").expect("location description pattern")
});

// Parenthesized "(lat, lon)" pair; captures feed the latitude/longitude
// generator.
static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((-?\d+\.\d+), ?(-?\d+\.\d+)\)$").expect("location pattern"));

// Zip codes are exactly four or five digits; both alternatives are anchored.
static ZIP_CODES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{4}|\d{5})$").expect("zip pattern"));

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn letter_prefixed(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second))
            if first.is_ascii_alphabetic() && second.is_ascii_alphabetic()
    )
}

fn description_valid(value: &str) -> bool {
    value.len() <= 50 && DESCRIPTION.is_match(value)
}

fn location_description_valid(value: &str) -> bool {
    value.len() <= 50 && LOCATION_DESCRIPTION.is_match(value)
}

/// Upper-case the first letter of every word, lower-case the rest.
fn title_case(value: &str) -> Option<String> {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    Some(out)
}

/// Left-pad four-digit zip codes with a leading zero; five-digit values pass
/// through; anything else is nulled.
fn zip_to_five(value: &str) -> Option<String> {
    match value.len() {
        4 => Some(format!("0{value}")),
        5 => Some(value.to_string()),
        _ => None,
    }
}

fn date_parts(values: &[Option<String>]) -> Vec<GeneratedColumn> {
    let mut years = Vec::with_capacity(values.len());
    let mut months = Vec::with_capacity(values.len());
    for value in values {
        match value.as_deref().and_then(parse_record_datetime) {
            Some(parsed) => {
                years.push(Some(parsed.year().to_string()));
                months.push(Some(parsed.month().to_string()));
            }
            None => {
                years.push(None);
                months.push(None);
            }
        }
    }
    vec![
        GeneratedColumn::new("year", years),
        GeneratedColumn::new("month", months),
    ]
}

const DATE_PARTS: Generator = Generator {
    name: "date_parts",
    outputs: &["year", "month"],
    derive: date_parts,
};

fn block_parts(values: &[Option<String>]) -> Vec<GeneratedColumn> {
    let mut house_nums = Vec::with_capacity(values.len());
    let mut street_addrs = Vec::with_capacity(values.len());
    for value in values {
        match value.as_deref().and_then(|text| BLOCK.captures(text)) {
            Some(captures) => {
                house_nums.push(captures.get(1).map(|m| m.as_str().to_string()));
                street_addrs.push(captures.get(2).map(|m| m.as_str().to_string()));
            }
            None => {
                house_nums.push(None);
                street_addrs.push(None);
            }
        }
    }
    vec![
        GeneratedColumn::new("house_num", house_nums),
        GeneratedColumn::new("street_addr", street_addrs),
    ]
}

const BLOCK_PARTS: Generator = Generator {
    name: "block_parts",
    outputs: &["house_num", "street_addr"],
    derive: block_parts,
};

fn location_parts(values: &[Option<String>]) -> Vec<GeneratedColumn> {
    let mut latitudes = Vec::with_capacity(values.len());
    let mut longitudes = Vec::with_capacity(values.len());
    for value in values {
        match value.as_deref().and_then(|text| LOCATION.captures(text)) {
            Some(captures) => {
                latitudes.push(captures.get(1).map(|m| m.as_str().to_string()));
                longitudes.push(captures.get(2).map(|m| m.as_str().to_string()));
            }
            None => {
                latitudes.push(None);
                longitudes.push(None);
            }
        }
    }
    vec![
        GeneratedColumn::new("latitude", latitudes),
        GeneratedColumn::new("longitude", longitudes),
    ]
}

const LOCATION_PARTS: Generator = Generator {
    name: "location_parts",
    outputs: &["latitude", "longitude"],
    derive: location_parts,
};

/// Fields that identify a record. A row failing any of these is excluded
/// entirely.
pub fn mandatory_fields() -> Vec<(String, FieldRule)> {
    vec![
        (
            "id".to_string(),
            FieldRule::new().with_check(Check::Predicate(all_digits)),
        ),
        (
            "case_number".to_string(),
            FieldRule::new().with_check(Check::Predicate(letter_prefixed)),
        ),
        (
            "date".to_string(),
            FieldRule::new()
                .with_check(Check::DateTime(KNOWN_DATE_FORMATS))
                .with_other_nulls(["0000-00-00"])
                .with_generator(DATE_PARTS),
        ),
    ]
}

/// Nullable fields. A failing value is nulled in place and the row kept.
pub fn optional_fields() -> Vec<(String, FieldRule)> {
    let true_false = ["true", "false"];
    vec![
        (
            "block".to_string(),
            FieldRule::new()
                .with_check(Check::Pattern(BLOCK.clone()))
                .with_generator(BLOCK_PARTS),
        ),
        (
            "iucr".to_string(),
            FieldRule::new().with_check(Check::Pattern(IUCR.clone())),
        ),
        (
            "primary_type".to_string(),
            FieldRule::new()
                .with_check(Check::Pattern(PRIMARY_TYPE.clone()))
                .with_map(None, title_case),
        ),
        (
            "description".to_string(),
            FieldRule::new()
                .with_check(Check::Predicate(description_valid))
                .with_map(None, title_case),
        ),
        (
            "location_description".to_string(),
            FieldRule::new()
                .with_check(Check::Predicate(location_description_valid))
                .with_map(None, title_case),
        ),
        (
            "arrest".to_string(),
            FieldRule::new().with_valid_values(true_false),
        ),
        (
            "domestic".to_string(),
            FieldRule::new().with_valid_values(true_false),
        ),
        (
            "beat".to_string(),
            FieldRule::new().with_check(Check::Predicate(all_digits)),
        ),
        (
            "district".to_string(),
            FieldRule::new().with_check(Check::Predicate(all_digits)),
        ),
        (
            "ward".to_string(),
            FieldRule::new().with_check(Check::Predicate(all_digits)),
        ),
        (
            "community_area".to_string(),
            FieldRule::new().with_check(Check::Predicate(all_digits)),
        ),
        (
            "location".to_string(),
            FieldRule::new()
                .with_check(Check::Pattern(LOCATION.clone()))
                .with_generator(LOCATION_PARTS)
                .drop_after_generation(),
        ),
        (
            "zip_codes".to_string(),
            FieldRule::new()
                .with_check(Check::Pattern(ZIP_CODES.clone()))
                .with_map(None, zip_to_five),
        ),
    ]
}
