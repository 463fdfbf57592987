//! Version parsing, total ordering, and constraint evaluation.
//!
//! Ordering follows the semver specification: major, minor, patch compare
//! numerically; a release outranks any pre-release of the same triple;
//! pre-release identifiers compare positionally as plain strings; build
//! metadata never participates.

use std::cmp::Ordering;
use std::fmt;

use crate::syntax::OperatorSyntax;

/// The logical comparison operator attached to a version constraint.
///
/// `Other` carries a token the syntax recognized but bound to no role; it
/// evaluates as exact-equality, the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Op {
    /// No operator: exact-equality semantics.
    #[default]
    None,
    /// Greater than.
    Gt,
    /// Greater than or equal to.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal to.
    Lte,
    /// An unbound operator token, carried verbatim.
    Other(String),
}

/// A parsed semantic version, optionally carrying a comparison operator.
///
/// Equality and ordering follow semver precedence: the operator and build
/// metadata are excluded, so `v1.0.0` and `>=v1.0.0+build` compare equal.
/// The zero version (`v0.0.0`, no operator, no pre-release) doubles as the
/// degraded result of parsing an invalid string.
#[derive(Debug, Clone, Default)]
pub struct Version {
    /// Comparison operator, applied when this version acts as a constraint.
    pub op: Op,
    /// Major release number.
    pub major: u16,
    /// Minor release number.
    pub minor: u16,
    /// Patch release number.
    pub patch: u16,
    /// Dot/hyphen-delimited pre-release identifiers; empty means none.
    pub pre_release: String,
    /// Build metadata after `+`; informational only, never compared.
    pub build_metadata: String,
}

impl Version {
    /// Parse a constraint string under the given operator syntax.
    ///
    /// Strings that do not match the grammar degrade to the zero version;
    /// parsing never fails. Numeric fields are u16 — a malformed or
    /// overflowing digit run degrades to 0 for that field. Callers that must
    /// distinguish "invalid input" from an explicit `v0.0.0` need to
    /// validate the input separately.
    pub fn parse(input: &str, syntax: &OperatorSyntax) -> Self {
        let Some(caps) = syntax.captures(input.trim()) else {
            return Self::default();
        };

        let field = |i: usize| -> u16 {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        };
        let text = |i: usize| -> String {
            caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default()
        };

        Self {
            op: syntax.classify(caps.get(1).map_or("", |m| m.as_str())),
            major: field(2),
            minor: field(3),
            patch: field(4),
            pre_release: text(5),
            build_metadata: text(6),
        }
    }

    /// Parse under the process-wide default syntax (`>`, `>=`, `<`, `<=`).
    pub fn parse_default(input: &str) -> Self {
        Self::parse(input, OperatorSyntax::default_syntax())
    }

    /// The constraint string: the operator symbol under `syntax` followed by
    /// the canonical version form.
    pub fn constraint_string(&self, syntax: &OperatorSyntax) -> String {
        format!("{}{}", syntax.symbol(&self.op), self)
    }

    /// Whether `candidate` passes this constraint's operator rule.
    ///
    /// Any operator on `candidate` is ignored; only `self`'s operator
    /// governs the test. Without an operator (or with an unbound one), the
    /// candidate must compare equal.
    pub fn satisfies(&self, candidate: &Version) -> bool {
        match &self.op {
            Op::Gte => self.cmp(candidate) != Ordering::Greater,
            Op::Gt => self.cmp(candidate) == Ordering::Less,
            Op::Lte => self.cmp(candidate) != Ordering::Less,
            Op::Lt => self.cmp(candidate) == Ordering::Greater,
            Op::None | Op::Other(_) => self.cmp(candidate) == Ordering::Equal,
        }
    }

    fn compare_pre_release(&self, other: &Version) -> Ordering {
        match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
            (true, true) => return Ordering::Equal,
            // A release outranks any pre-release of the same triple.
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        let a: Vec<&str> = split_identifiers(&self.pre_release);
        let b: Vec<&str> = split_identifiers(&other.pre_release);
        let len = a.len().max(b.len());
        for i in 0..len {
            // The shorter side pads with empty identifiers, which sort first.
            let x = a.get(i).copied().unwrap_or("");
            let y = b.get(i).copied().unwrap_or("");
            let ord = x.cmp(y);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

/// Split a pre-release string on `.` and `-` into identifiers.
fn split_identifiers(pre: &str) -> Vec<&str> {
    pre.split(['.', '-']).filter(|s| !s.is_empty()).collect()
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.compare_pre_release(other))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    /// Canonical form: `v{major}.{minor}.{patch}[-pre][+build]`, without
    /// the operator prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}
