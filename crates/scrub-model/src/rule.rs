//! Per-field cleaning rules.
//!
//! Each column of a record chunk is cleaned by one [`FieldRule`]: an optional
//! validation check, an optional enumerated value set, sentinel strings that
//! count as null, cosmetic post-processing, and derived-column generators.
//! Every component is an explicit, typed option rather than a loose map so the
//! field processor can dispatch on exactly what was configured.

use regex::Regex;

/// Per-value predicate used by [`Check::Predicate`].
pub type ValuePredicate = fn(&str) -> bool;

/// Per-value transform used by [`Transform::Map`]. Returning `None` nulls the
/// value.
pub type ValueTransform = fn(&str) -> Option<String>;

/// Derivation function used by [`Generator`]. Receives the validated column
/// values (null where validation failed) and returns the derived columns.
/// Null inputs must produce null outputs.
pub type DeriveColumns = fn(&[Option<String>]) -> Vec<GeneratedColumn>;

/// Validation applied to every non-null value of a field.
#[derive(Debug, Clone)]
pub enum Check {
    /// The whole value must match the pattern (patterns carry their own
    /// anchors).
    Pattern(Regex),
    /// Arbitrary per-value predicate.
    Predicate(ValuePredicate),
    /// The value must parse as a date/time in one of the given strptime
    /// formats.
    DateTime(&'static [&'static str]),
}

/// A cosmetic change applied to values that passed validation.
#[derive(Debug, Clone)]
pub enum Transform {
    /// Regex search/replace over the value.
    Replace { pattern: Regex, replacement: String },
    /// Value-level function; `None` nulls the value.
    Map(ValueTransform),
}

/// One post-processing step. With no `target` the transform overwrites the
/// source column; with a `target` it writes a new column and leaves the source
/// untouched.
#[derive(Debug, Clone)]
pub struct PostProcess {
    pub target: Option<String>,
    pub transform: Transform,
}

/// A derived column produced by a [`Generator`].
#[derive(Debug, Clone)]
pub struct GeneratedColumn {
    pub name: String,
    pub values: Vec<Option<String>>,
}

impl GeneratedColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A derived-column generator with its declared outputs.
///
/// Outputs are declared up front so orchestrators can detect name collisions
/// before any column is written.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    pub name: &'static str,
    pub outputs: &'static [&'static str],
    pub derive: DeriveColumns,
}

/// Full cleaning configuration for one field.
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    /// Validation check; values failing it are rejected.
    pub check: Option<Check>,
    /// Enumerated allowed values (case-insensitive). Combined with `check`
    /// when both are present: a value must satisfy both.
    pub valid_values: Option<Vec<String>>,
    /// Sentinel strings treated as null before validation.
    pub other_nulls: Vec<String>,
    /// Ordered cosmetic changes applied to values that passed validation.
    pub post_process: Vec<PostProcess>,
    /// Ordered derived-column generators, run after post-processing.
    pub generators: Vec<Generator>,
    /// Remove the source column after generation.
    pub drop_field: bool,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(mut self, check: Check) -> Self {
        self.check = Some(check);
        self
    }

    pub fn with_valid_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_other_nulls<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.other_nulls.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn with_post_process(mut self, post: PostProcess) -> Self {
        self.post_process.push(post);
        self
    }

    /// Append a value-level transform, overwriting the source column when
    /// `target` is `None`.
    pub fn with_map(self, target: Option<&str>, transform: ValueTransform) -> Self {
        self.with_post_process(PostProcess {
            target: target.map(String::from),
            transform: Transform::Map(transform),
        })
    }

    /// Append a regex search/replace step.
    pub fn with_replace(self, target: Option<&str>, pattern: Regex, replacement: &str) -> Self {
        self.with_post_process(PostProcess {
            target: target.map(String::from),
            transform: Transform::Replace {
                pattern,
                replacement: replacement.to_string(),
            },
        })
    }

    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generators.push(generator);
        self
    }

    pub fn drop_after_generation(mut self) -> Self {
        self.drop_field = true;
        self
    }

    /// Column names this rule will write besides the source column itself:
    /// post-processing targets and declared generator outputs, in order.
    pub fn planned_columns(&self) -> Vec<&str> {
        let mut planned = Vec::new();
        for post in &self.post_process {
            if let Some(target) = &post.target {
                planned.push(target.as_str());
            }
        }
        for generator in &self.generators {
            planned.extend(generator.outputs.iter().copied());
        }
        planned
    }
}
