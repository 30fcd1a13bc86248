//! Override documents may only set keys the base documents define
//!
//! The base documents (global base plus app base, including all of their
//! environment fragments) form the shape. Every key in an override document,
//! and in each of its environment fragments, must exist in that shape with a
//! compatible kind of value.

use serde_json::{Map, Value};
use std::fmt;

use crate::domain::{ConfigDocument, Environment, ENVIRONMENTS_KEY, PLACEHOLDER};
use crate::merge::deep_merge_maps;
use crate::utils::keypath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Table,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueKind::Table,
            Value::Array(_) => ValueKind::Array,
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Table => "a table",
            ValueKind::Array => "an array",
            ValueKind::String => "a string",
            ValueKind::Number => "a number",
            ValueKind::Boolean => "a boolean",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    UnknownKey,
    KindMismatch { expected: ValueKind, found: ValueKind },
    UnknownEnvironment,
    MalformedEnvironments,
}

/// One key in one document that does not fit the base shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceIssue {
    pub document: String,
    pub path: String,
    pub kind: IssueKind,
}

impl fmt::Display for ConformanceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::UnknownKey => {
                write!(f, "{}: `{}` is not defined by any base document", self.document, self.path)
            }
            IssueKind::KindMismatch { expected, found } => {
                write!(f, "{}: `{}` should be {expected}, found {found}", self.document, self.path)
            }
            IssueKind::UnknownEnvironment => {
                write!(f, "{}: `{}` is not a known environment", self.document, self.path)
            }
            IssueKind::MalformedEnvironments => {
                write!(f, "{}: `{}` must be a table of environments", self.document, self.path)
            }
        }
    }
}

/// Union of every key the base documents define, across all environments,
/// plus any problems with the bases' own `environments` tables.
pub fn base_shape(bases: &[&ConfigDocument]) -> (Map<String, Value>, Vec<ConformanceIssue>) {
    let mut shape = Map::new();
    let mut issues = Vec::new();
    for base in bases {
        let rest: Map<String, Value> =
            base.base_fields().map(|(key, value)| (key.clone(), value.clone())).collect();
        deep_merge_maps(&mut shape, rest);

        let environments = match base.environments() {
            Ok(Some(environments)) => environments,
            Ok(None) => continue,
            Err(_) => {
                issues.push(issue(base.origin(), ENVIRONMENTS_KEY, IssueKind::MalformedEnvironments));
                continue;
            }
        };
        for (name, fragment) in environments {
            match fragment {
                Value::Object(fragment) => deep_merge_maps(&mut shape, fragment.clone()),
                other => issues.push(issue(
                    base.origin(),
                    &keypath::join(ENVIRONMENTS_KEY, name),
                    IssueKind::KindMismatch { expected: ValueKind::Table, found: ValueKind::of(other) },
                )),
            }
        }
    }
    (shape, issues)
}

/// Check each override document against the shape of `bases`.
pub fn check_conformance(
    bases: &[&ConfigDocument],
    overrides: &[&ConfigDocument],
) -> Vec<ConformanceIssue> {
    let (shape, mut issues) = base_shape(bases);

    for document in overrides {
        let origin = document.origin();
        check_fields(origin, &shape, document.base_fields(), "", &mut issues);

        let environments = match document.environments() {
            Ok(Some(environments)) => environments,
            Ok(None) => continue,
            Err(_) => {
                issues.push(issue(origin, ENVIRONMENTS_KEY, IssueKind::MalformedEnvironments));
                continue;
            }
        };

        for (name, fragment) in environments {
            let prefix = keypath::join(ENVIRONMENTS_KEY, name);
            if name.parse::<Environment>().is_err() {
                issues.push(issue(origin, &prefix, IssueKind::UnknownEnvironment));
                continue;
            }
            match fragment {
                Value::Object(fragment) => {
                    check_fields(origin, &shape, fragment.iter(), &prefix, &mut issues)
                }
                other => issues.push(issue(
                    origin,
                    &prefix,
                    IssueKind::KindMismatch { expected: ValueKind::Table, found: ValueKind::of(other) },
                )),
            }
        }
    }

    issues
}

fn issue(document: &str, path: &str, kind: IssueKind) -> ConformanceIssue {
    ConformanceIssue { document: document.to_string(), path: path.to_string(), kind }
}

fn check_fields<'a>(
    document: &str,
    shape: &Map<String, Value>,
    fields: impl Iterator<Item = (&'a String, &'a Value)>,
    prefix: &str,
    issues: &mut Vec<ConformanceIssue>,
) {
    for (key, value) in fields {
        let path = keypath::join(prefix, key);
        let Some(expected) = shape.get(key) else {
            issues.push(issue(document, &path, IssueKind::UnknownKey));
            continue;
        };

        let found = ValueKind::of(value);
        match (expected, value) {
            (Value::Object(expected), Value::Object(value)) => {
                check_fields(document, expected, value.iter(), &path, issues)
            }
            // A placeholder accepts any non-null leaf; a null in the base accepts any leaf.
            (Value::String(s), _)
                if s == PLACEHOLDER && !matches!(found, ValueKind::Table | ValueKind::Null) => {}
            (Value::Null, _) if found != ValueKind::Table => {}
            _ if ValueKind::of(expected) == found => {}
            _ => issues.push(issue(
                document,
                &path,
                IssueKind::KindMismatch { expected: ValueKind::of(expected), found },
            )),
        }
    }
}
