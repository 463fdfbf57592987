//! Semantic version engine for modkit.
//!
//! Provides parsing and total ordering for semantic versions following the
//! <https://semver.org> specification, plus support for version constraints
//! carrying a comparison operator with caller-configurable operator syntax:
//!
//! - `>=v1.3.1` — greater than or equal to
//! - `<=v3.0.0` — less than or equal to
//! - `>1.0.2` — greater than
//! - `0.0.1-alpha` — exact match
//!
//! The leading `v` does not strictly conform to the semver specification but
//! is a common convention in version tags, so it is accepted and ignored.
//! Strings that do not parse degrade to the zero version `v0.0.0` rather
//! than producing an error.

pub mod syntax;
pub mod version;

pub use syntax::{OperatorSyntax, Operators};
pub use version::{Op, Version};
