//! Statement classification for env file lines.
//!
//! Responsibilities:
//! - Turn one logical line into a typed `Statement`.
//! - Define the fixed comparison operator set.
//!
//! Does NOT handle:
//! - Indentation or nesting (see `parser.rs`).
//! - Evaluating statements (see `evaluator.rs`).
//!
//! Invariants:
//! - Rules are tried in order: assignment, truthy/falsy guard, comparison.
//! - Assignment keys may contain dots; guard keys never do.
//! - Assignment values are right-trimmed; comparison values are trimmed.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::loader::LoadError;

static ASSIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)\s*=\s*(.*)$")
        .expect("assignment pattern is valid")
});

static GUARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^if\s+(?:(not)\s+)?([A-Za-z_][A-Za-z0-9_]*)$").expect("guard pattern is valid")
});

static COMPARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^if\s+([A-Za-z_][A-Za-z0-9_]*)\s+(isnt|is|>=|<=|>|<)\s+(.*)$")
        .expect("comparison pattern is valid")
});

/// Comparison operator used by `if key OP value` guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Is,
    Isnt,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    /// The operator token as written in env files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Is => "is",
            Operator::Isnt => "isnt",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "is" => Ok(Operator::Is),
            "isnt" => Ok(Operator::Isnt),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            other => Err(LoadError::InvalidOperator(other.to_string())),
        }
    }
}

/// One classified env file statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    /// `key = value`
    Assign { key: String, value: String },
    /// `if key`
    IfTruthy { key: String },
    /// `if not key`
    IfFalsy { key: String },
    /// `if key OP value`
    Compare {
        key: String,
        op: Operator,
        value: String,
    },
}

impl Statement {
    /// Whether this statement may own nested child statements.
    pub fn is_conditional(&self) -> bool {
        !matches!(self, Statement::Assign { .. })
    }

    /// The variable name the statement assigns or tests.
    pub fn key(&self) -> &str {
        match self {
            Statement::Assign { key, .. }
            | Statement::IfTruthy { key }
            | Statement::IfFalsy { key }
            | Statement::Compare { key, .. } => key,
        }
    }
}

/// Classify a single line.
///
/// `file` and `line_no` are only used to build the error when no rule matches.
pub fn classify(text: &str, file: &str, line_no: usize) -> Result<Statement, LoadError> {
    let line = text.trim();

    if let Some(caps) = ASSIGN_RE.captures(line) {
        return Ok(Statement::Assign {
            key: caps[1].to_string(),
            value: caps[2].trim_end().to_string(),
        });
    }

    if let Some(caps) = GUARD_RE.captures(line) {
        let key = caps[2].to_string();
        return Ok(if caps.get(1).is_some() {
            Statement::IfFalsy { key }
        } else {
            Statement::IfTruthy { key }
        });
    }

    if let Some(caps) = COMPARE_RE.captures(line) {
        return Ok(Statement::Compare {
            key: caps[1].to_string(),
            op: caps[2].parse()?,
            value: caps[3].trim().to_string(),
        });
    }

    Err(LoadError::Parse {
        file: file.to_string(),
        line: line_no,
        text: line.to_string(),
    })
}
