//! Declare the environment variables your application needs, validate them
//! once at startup, and get every problem reported at once instead of
//! chasing them one restart at a time.
//!
//! A [`Schema`] maps variable names to type descriptors. A descriptor names
//! one of the base types `string`, `number`, `boolean` or `json`, with an
//! optional trailing `?` marking the variable as optional:
//!
//! ```
//! use std::collections::HashMap;
//!
//! use envschema::{validate_env, Schema};
//!
//! let schema = Schema::new()
//!     .var("DATABASE_URL", "string")
//!     .var("PORT", "number")
//!     .var("DEBUG", "boolean?");
//!
//! let env = HashMap::from([
//!     ("DATABASE_URL".to_owned(), "postgres://localhost".to_owned()),
//!     ("PORT".to_owned(), "3000".to_owned()),
//! ]);
//!
//! let report = validate_env(&schema, Some(&env));
//! assert!(report.valid);
//! assert_eq!(report.values["PORT"].as_number(), Some(3000.0));
//! assert!(report.values["DEBUG"].is_absent());
//! ```
//!
//! Two entry points share the same validation pass and differ only in how
//! they hand back failures: [`create_validator`] (and its alias
//! [`define_env`]) returns `Result` and collects every failure into one
//! [`ValidationErrors`], while [`validate_env`] never fails and reports the
//! outcome as plain data.

mod coerce;
mod error;
mod schema;
mod validate;

pub use coerce::EnvValue;
pub use error::{ValidationError, ValidationErrors};
pub use schema::Schema;
pub use validate::{create_validator, define_env, validate_env, Options, Validation};
