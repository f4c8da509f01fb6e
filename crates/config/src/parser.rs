//! Indentation-sensitive parser that builds the statement forest of a file.
//!
//! Responsibilities:
//! - Split text into lines, skip blanks and `#` comments.
//! - Nest each line under the nearest earlier line with smaller indentation.
//! - Classify every line (see `statement.rs`) while building the tree.
//!
//! Does NOT handle:
//! - Evaluation (see `evaluator.rs`). A file either parses completely or
//!   fails before any of it is applied.
//!
//! Invariants:
//! - Line numbers are 1-based and refer to the raw text, comments included.
//! - Siblings share exactly the same indentation width.
//! - Only conditional statements own children.
//! - Every line is classified before its indentation is checked, so a
//!   malformed line is a parse error wherever it sits.

use serde::Serialize;

use crate::loader::LoadError;
use crate::statement::{Statement, classify};

/// One parsed statement with its nested children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub line: usize,
    pub statement: Statement,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(line: usize, statement: Statement) -> Self {
        Self {
            line,
            statement,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }
}

struct Frame {
    indent: usize,
    child_indent: Option<usize>,
    node: TreeNode,
}

/// Parse `text` into a forest of top-level statements in file order.
///
/// `file` labels errors; it is usually the path the text was read from.
pub fn parse_tree(text: &str, file: &str) -> Result<Vec<TreeNode>, LoadError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut roots = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = raw.trim_start_matches([' ', '\t']);
        if content.trim().is_empty() || content.starts_with('#') {
            continue;
        }
        let indent = raw.len() - content.len();
        let statement = classify(content, file, line_no)?;

        while stack.last().is_some_and(|top| top.indent >= indent) {
            if let Some(done) = stack.pop() {
                attach(&mut stack, &mut roots, done.node);
            }
        }

        let structure_error = |message: &str| LoadError::Structure {
            file: file.to_string(),
            line: line_no,
            message: message.to_string(),
        };

        match stack.last_mut() {
            Some(parent) => {
                if !parent.node.statement.is_conditional() {
                    return Err(structure_error(
                        "assignment cannot have nested statements",
                    ));
                }
                match parent.child_indent {
                    None => parent.child_indent = Some(indent),
                    Some(expected) if expected != indent => {
                        return Err(structure_error("inconsistent indentation"));
                    }
                    Some(_) => {}
                }
            }
            None if indent != 0 => {
                return Err(structure_error(if roots.is_empty() {
                    "unexpected indentation"
                } else {
                    "inconsistent indentation"
                }));
            }
            None => {}
        }

        stack.push(Frame {
            indent,
            child_indent: None,
            node: TreeNode::new(line_no, statement),
        });
    }

    while let Some(done) = stack.pop() {
        attach(&mut stack, &mut roots, done.node);
    }

    Ok(roots)
}

fn attach(stack: &mut [Frame], roots: &mut Vec<TreeNode>, node: TreeNode) {
    match stack.last_mut() {
        Some(parent) => parent.node.children.push(node),
        None => roots.push(node),
    }
}
