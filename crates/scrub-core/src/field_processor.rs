//! Apply one field's rule set to a chunk frame.
//!
//! The processor validates a single column, returns the rejected row
//! identifiers as an explicit value, and applies the rule's cosmetic and
//! derivation steps. It never removes rows: mandatory-field removal is the
//! hard-reject phase's job, done once over the union of all mandatory
//! failures so that every reject set refers to the unfiltered table.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::{DataFrame, DataType};
use tracing::debug;

use scrub_model::{Check, FieldRule, ORIG_SUFFIX, RowId, ScrubError, Transform};

use crate::datetime::parse_with_formats;
use crate::frame_utils::{opt_string_column, row_ids, set_opt_string_column};

/// Whether null values fail validation for this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Null fails; failing rows are removed later by the caller.
    Mandatory,
    /// Null passes; failing values are nulled in place with the original
    /// preserved in the field's `_orig` shadow column.
    Optional,
}

/// Result of processing one field.
#[derive(Debug, Default)]
pub struct FieldOutcome {
    /// Identifiers of rows whose value failed validation.
    pub rejected: BTreeSet<RowId>,
}

/// Clean, validate and transform one column in place.
///
/// Steps, in order: sentinel-null normalization, validation mask, reject
/// collection, nulling + shadow copy (optional fields only), post-processing
/// of surviving values, derived-column generation, and source-column drop.
pub fn process_field(
    df: &mut DataFrame,
    field: &str,
    rule: &FieldRule,
    mode: FieldMode,
) -> Result<FieldOutcome> {
    let column = df
        .column(field)
        .map_err(|_| ScrubError::MissingColumn(field.to_string()))?;
    match column.dtype() {
        DataType::String | DataType::Null => {}
        other => {
            return Err(ScrubError::Config {
                field: field.to_string(),
                reason: format!("validation requires string data, found {other}"),
            }
            .into());
        }
    }

    let ids = row_ids(df)?;
    let raw = opt_string_column(df, field)?;

    // Sentinel strings count as null before validation.
    let normalized: Vec<Option<String>> = raw
        .iter()
        .map(|value| match value {
            Some(text) if rule.other_nulls.iter().any(|null| null == text) => None,
            other => other.clone(),
        })
        .collect();

    let valid_set: Option<BTreeSet<String>> = rule
        .valid_values
        .as_ref()
        .map(|values| values.iter().map(|value| value.to_uppercase()).collect());

    let mut mask = Vec::with_capacity(normalized.len());
    for value in &normalized {
        let ok = match value {
            None => mode == FieldMode::Optional,
            Some(text) => value_passes(text, rule, valid_set.as_ref()),
        };
        mask.push(ok);
    }

    let mut rejected = BTreeSet::new();
    for (idx, ok) in mask.iter().enumerate() {
        if !ok {
            rejected.insert(ids[idx]);
        }
    }

    // Values that survive validation; failures and sentinels are null.
    let mut current: Vec<Option<String>> = normalized
        .iter()
        .zip(&mask)
        .map(|(value, ok)| if *ok { value.clone() } else { None })
        .collect();

    if mode == FieldMode::Optional {
        if !rejected.is_empty() {
            let shadow_name = format!("{field}{ORIG_SUFFIX}");
            let shadow: Vec<Option<String>> = raw
                .iter()
                .zip(&mask)
                .map(|(value, ok)| if *ok { None } else { value.clone() })
                .collect();
            set_opt_string_column(df, &shadow_name, shadow)?;
        }
        set_opt_string_column(df, field, current.clone())?;
    }

    for post in &rule.post_process {
        let transformed = apply_transform(&current, &post.transform);
        match &post.target {
            None => {
                current = transformed;
                set_opt_string_column(df, field, current.clone())?;
            }
            Some(target) => {
                set_opt_string_column(df, target, transformed)?;
            }
        }
    }

    let height = df.height();
    for generator in &rule.generators {
        for column in (generator.derive)(&current) {
            if column.values.len() != height {
                return Err(ScrubError::Shape {
                    column: column.name,
                    expected: height,
                    actual: column.values.len(),
                }
                .into());
            }
            set_opt_string_column(df, &column.name, column.values)?;
        }
    }

    if rule.drop_field {
        df.drop_in_place(field)?;
    }

    debug!(field, rejected = rejected.len(), "field processed");
    Ok(FieldOutcome { rejected })
}

fn value_passes(value: &str, rule: &FieldRule, valid_set: Option<&BTreeSet<String>>) -> bool {
    if let Some(valid) = valid_set
        && !valid.contains(&value.to_uppercase())
    {
        return false;
    }
    match &rule.check {
        None => true,
        Some(Check::Pattern(pattern)) => pattern.is_match(value),
        Some(Check::Predicate(predicate)) => predicate(value),
        Some(Check::DateTime(formats)) => parse_with_formats(value, formats).is_some(),
    }
}

fn apply_transform(values: &[Option<String>], transform: &Transform) -> Vec<Option<String>> {
    values
        .iter()
        .map(|value| {
            value.as_deref().and_then(|text| match transform {
                Transform::Replace {
                    pattern,
                    replacement,
                } => Some(pattern.replace_all(text, replacement.as_str()).into_owned()),
                Transform::Map(map) => map(text),
            })
        })
        .collect()
}
