//! Tree evaluator that applies a parsed env file to a variable store.
//!
//! Responsibilities:
//! - Walk the statement forest depth-first, left-to-right.
//! - Apply assignments (subject to prefix filtering) and descend into a
//!   guarded block only when its guard holds at that moment.
//!
//! Does NOT handle:
//! - Parsing (see `parser.rs`) or file discovery (see `discovery.rs`).
//!
//! Invariants:
//! - Guards are evaluated lazily against the current store state.
//! - A skipped block has no side effects.
//! - Prefix filtering never applies to guard keys.

use tracing::trace;

use crate::compare::compare;
use crate::expand::expand;
use crate::loader::{LoadError, LoadOptions};
use crate::parser::TreeNode;
use crate::statement::Statement;
use crate::store::VariableStore;

/// Applies statement trees to a borrowed store.
pub struct Evaluator<'a, S: VariableStore + ?Sized> {
    store: &'a mut S,
    options: &'a LoadOptions,
}

impl<'a, S: VariableStore + ?Sized> Evaluator<'a, S> {
    pub fn new(store: &'a mut S, options: &'a LoadOptions) -> Self {
        Self { store, options }
    }

    /// Evaluate `nodes` in order, recursing into blocks whose guard holds.
    pub fn evaluate(&mut self, nodes: &[TreeNode]) -> Result<(), LoadError> {
        for node in nodes {
            match &node.statement {
                Statement::Assign { key, value } => self.assign(node.line, key, value),
                statement => {
                    if self.guard_holds(statement) {
                        trace!(line = node.line, key = statement.key(), "guard holds");
                        self.evaluate(&node.children)?;
                    } else {
                        trace!(line = node.line, key = statement.key(), "guard fails, skipping block");
                    }
                }
            }
        }
        Ok(())
    }

    fn assign(&mut self, line: usize, key: &str, raw: &str) {
        let Some(target) = self.options.effective_key(key) else {
            trace!(line, key, "assignment filtered out by prefix");
            return;
        };
        let value = expand(raw, &*self.store);
        trace!(line, key = target, value = %value, "assign");
        self.store.set(target, &value);
    }

    fn guard_holds(&self, statement: &Statement) -> bool {
        match statement {
            Statement::IfTruthy { key } => self.is_truthy(key),
            Statement::IfFalsy { key } => !self.is_truthy(key),
            Statement::Compare { key, op, value } => compare(&*self.store, key, *op, value),
            Statement::Assign { .. } => false,
        }
    }

    /// Set and non-empty.
    fn is_truthy(&self, key: &str) -> bool {
        self.store.get(key).is_some_and(|value| !value.is_empty())
    }
}

/// Convenience wrapper: evaluate `nodes` against `store` with `options`.
pub fn evaluate<S: VariableStore + ?Sized>(
    nodes: &[TreeNode],
    store: &mut S,
    options: &LoadOptions,
) -> Result<(), LoadError> {
    Evaluator::new(store, options).evaluate(nodes)
}
