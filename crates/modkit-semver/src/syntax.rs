//! Operator syntax configuration for version constraints.
//!
//! A constraint string starts with an optional comparison operator. The set
//! of operator symbols and the regex fragment that recognizes them are
//! configurable so embedders can define their own syntax (for example `=>`
//! instead of `>=`). The default syntax uses `>`, `>=`, `<`, `<=`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use modkit_util::errors::ModkitError;

use crate::version::Op;

/// Core semver pattern: optional `v`, three numeric fields, optional
/// pre-release and build metadata runs of dot/hyphen-delimited alphanumerics.
const SEMVER_PATTERN: &str =
    r"(?:v)?(\d+)\.(\d+)\.(\d+)(?:-((?:[.-]?[0-9A-Za-z]+)+))?(?:\+((?:[.-]?[0-9A-Za-z]+)+))?";

/// Recognizer fragment for the default `>`, `>=`, `<`, `<=` operators.
pub const DEFAULT_OPERATOR_PATTERN: &str = r"[<>]=?";

static DEFAULT_SYNTAX: LazyLock<OperatorSyntax> = LazyLock::new(|| {
    OperatorSyntax::new(Operators::default(), DEFAULT_OPERATOR_PATTERN)
        .expect("default operator pattern is valid")
});

/// The symbol bound to each of the four logical comparison operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operators {
    /// Greater-than symbol.
    pub gt: String,
    /// Greater-than-or-equal symbol.
    pub gte: String,
    /// Less-than symbol.
    pub lt: String,
    /// Less-than-or-equal symbol.
    pub lte: String,
}

impl Default for Operators {
    fn default() -> Self {
        Self {
            gt: ">".to_string(),
            gte: ">=".to_string(),
            lt: "<".to_string(),
            lte: "<=".to_string(),
        }
    }
}

/// An immutable operator syntax: symbol bindings plus the compiled regex
/// that recognizes an operator prefix followed by a semantic version.
///
/// Construct once and share; parsing never mutates the syntax, so a single
/// instance is safe to use from concurrent parse calls.
#[derive(Debug, Clone)]
pub struct OperatorSyntax {
    ops: Operators,
    re: Regex,
}

impl OperatorSyntax {
    /// Build a syntax from operator symbols and the regex fragment that
    /// recognizes them at the start of a constraint string.
    ///
    /// The fragment is combined with the semver pattern; leading `^` and
    /// trailing `$` anchors are stripped first. An invalid fragment is an
    /// error here, never at parse time.
    pub fn new(ops: Operators, operator_pattern: &str) -> miette::Result<Self> {
        let fragment = operator_pattern
            .trim_start_matches('^')
            .trim_end_matches('$');
        let re = Regex::new(&format!("^({fragment})?{SEMVER_PATTERN}$")).map_err(|e| {
            ModkitError::Generic {
                message: format!("Invalid operator pattern '{operator_pattern}': {e}"),
            }
        })?;
        Ok(Self { ops, re })
    }

    /// The process-wide default syntax (`>`, `>=`, `<`, `<=`).
    pub fn default_syntax() -> &'static OperatorSyntax {
        &DEFAULT_SYNTAX
    }

    /// Match a constraint string, returning the capture groups on success.
    pub(crate) fn captures<'t>(&self, input: &'t str) -> Option<Captures<'t>> {
        self.re.captures(input)
    }

    /// Map a matched operator token to its logical role. Tokens bound to no
    /// role are carried verbatim and evaluate as exact-equality downstream.
    pub fn classify(&self, token: &str) -> Op {
        if token.is_empty() {
            Op::None
        } else if token == self.ops.gte {
            Op::Gte
        } else if token == self.ops.gt {
            Op::Gt
        } else if token == self.ops.lte {
            Op::Lte
        } else if token == self.ops.lt {
            Op::Lt
        } else {
            Op::Other(token.to_string())
        }
    }

    /// The symbol for a logical operator under this syntax.
    pub fn symbol<'a>(&'a self, op: &'a Op) -> &'a str {
        match op {
            Op::None => "",
            Op::Gt => &self.ops.gt,
            Op::Gte => &self.ops.gte,
            Op::Lt => &self.ops.lt,
            Op::Lte => &self.ops.lte,
            Op::Other(s) => s,
        }
    }
}
