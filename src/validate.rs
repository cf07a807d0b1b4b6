use std::collections::{BTreeMap, HashMap};

use crate::coerce::{coerce, EnvValue};
use crate::error::{ValidationError, ValidationErrors};
use crate::schema::{split_descriptor, Schema};

/// Callback handed the full ordered error list when validation fails.
pub type ErrorHook = Box<dyn FnMut(&[ValidationError])>;

/// Options for [`create_validator`] and [`define_env`].
#[derive(Default)]
pub struct Options {
    env: Option<HashMap<String, String>>,
    on_error: Option<ErrorHook>,
    lenient: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates against `env` instead of a snapshot of the process
    /// environment taken at call time.
    pub fn env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Registers a callback invoked exactly once with every error, before
    /// the call returns. It runs whether or not the call then fails.
    pub fn on_error(mut self, hook: impl FnMut(&[ValidationError]) + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Returns the keys that did validate instead of failing when others
    /// did not. Failures still reach the [`on_error`](Self::on_error) hook.
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }
}

/// Outcome of [`validate_env`].
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    /// True iff no key failed.
    pub valid: bool,
    /// Every failure, in schema declaration order.
    pub errors: Vec<ValidationError>,
    /// Coerced values for the keys that succeeded. Optional keys with no
    /// value are present, mapped to [`EnvValue::Absent`].
    pub values: BTreeMap<String, EnvValue>,
}

/// One pass over the schema, shared by both entry points. A key lands in
/// the value mapping or the error list, never both; an unset or empty
/// optional key lands in the value mapping as [`EnvValue::Absent`].
fn run(
    schema: &Schema,
    env: &HashMap<String, String>,
) -> (BTreeMap<String, EnvValue>, Vec<ValidationError>) {
    let mut values = BTreeMap::new();
    let mut errors = Vec::new();

    for (key, descriptor) in schema.entries() {
        let (base, optional) = split_descriptor(descriptor);
        // An empty string counts as unset, for every type.
        let raw = env.get(key).map(String::as_str).filter(|v| !v.is_empty());

        match raw {
            None if optional => {
                values.insert(key.to_owned(), EnvValue::Absent);
            }
            None => errors.push(ValidationError {
                key: key.to_owned(),
                expected: descriptor.to_owned(),
                received: None,
                reason: "required variable is missing".to_owned(),
            }),
            Some(raw) => match coerce(base, raw) {
                Ok(value) => {
                    values.insert(key.to_owned(), value);
                }
                Err(reason) => errors.push(ValidationError {
                    key: key.to_owned(),
                    expected: descriptor.to_owned(),
                    received: Some(raw.to_owned()),
                    reason,
                }),
            },
        }
    }

    (values, errors)
}

fn process_env() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Validates `schema` and returns the mapping of coerced values, or every
/// failure at once as a [`ValidationErrors`].
///
/// ```
/// use std::collections::HashMap;
///
/// use envschema::{create_validator, Options, Schema};
///
/// let schema = Schema::new().var("PORT", "number").var("API_KEY", "string");
/// let env = HashMap::from([("PORT".to_owned(), "3000".to_owned())]);
///
/// let err = create_validator(&schema, Options::new().env(env)).unwrap_err();
/// assert_eq!(err.len(), 1);
/// assert!(err.to_string().contains("API_KEY"));
/// ```
pub fn create_validator(
    schema: &Schema,
    options: Options,
) -> Result<BTreeMap<String, EnvValue>, ValidationErrors> {
    let Options {
        env,
        mut on_error,
        lenient,
    } = options;

    let env = env.unwrap_or_else(process_env);
    let (values, errors) = run(schema, &env);

    if !errors.is_empty() {
        if let Some(hook) = on_error.as_mut() {
            hook(&errors);
        }
        if !lenient {
            return Err(ValidationErrors::from(errors));
        }
    }

    Ok(values)
}

/// Alias for [`create_validator`] that reads as a declaration at call sites.
pub fn define_env(
    schema: &Schema,
    options: Options,
) -> Result<BTreeMap<String, EnvValue>, ValidationErrors> {
    create_validator(schema, options)
}

/// Validates `schema` against `env`, or against a snapshot of the process
/// environment when `env` is `None`. Never fails; the outcome is reported
/// as plain data.
pub fn validate_env(schema: &Schema, env: Option<&HashMap<String, String>>) -> Validation {
    let snapshot;
    let env = match env {
        Some(env) => env,
        None => {
            snapshot = process_env();
            &snapshot
        }
    };

    let (values, errors) = run(schema, env);

    Validation {
        valid: errors.is_empty(),
        errors,
        values,
    }
}
