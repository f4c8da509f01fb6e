//! Output formatters for CLI commands.
//!
//! Provides table, JSON, and dotenv renderings of a loaded store, plus text
//! and JSON renderings of a parsed statement tree.

use anyhow::Result;
use envcascade_config::{MemoryStore, Statement, TreeNode};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Supported output formats for loaded variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Dotenv,
}

/// Supported output formats for statement trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TreeFormat {
    Text,
    Json,
}

/// Render every variable in `store`, in insertion order.
pub fn format_variables(store: &MemoryStore, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(store)),
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = store
                .iter()
                .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&map)?))
        }
        OutputFormat::Dotenv => Ok(store
            .iter()
            .map(|(name, value)| format!("{name}={value}\n"))
            .collect()),
    }
}

fn format_table(store: &MemoryStore) -> String {
    if store.is_empty() {
        return "No variables loaded.\n".to_string();
    }

    let width = store
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = format!("{:<width$}  VALUE\n", "NAME");
    for (name, value) in store.iter() {
        let _ = writeln!(out, "{name:<width$}  {value}");
    }
    out
}

/// Render discovered paths one per line.
pub fn format_files(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("{}\n", path.display()))
        .collect()
}

/// Render a statement forest.
pub fn format_tree(nodes: &[TreeNode], format: TreeFormat) -> Result<String> {
    match format {
        TreeFormat::Text => {
            let mut out = String::new();
            write_tree(&mut out, nodes, 0);
            Ok(out)
        }
        TreeFormat::Json => {
            let json = serde_json::to_string_pretty(&TreeOutput { nodes })?;
            Ok(format!("{json}\n"))
        }
    }
}

#[derive(Serialize)]
struct TreeOutput<'a> {
    nodes: &'a [TreeNode],
}

fn write_tree(out: &mut String, nodes: &[TreeNode], depth: usize) {
    for node in nodes {
        let _ = writeln!(
            out,
            "{:>4}  {}{}",
            node.line,
            "  ".repeat(depth),
            describe(&node.statement)
        );
        write_tree(out, &node.children, depth + 1);
    }
}

fn describe(statement: &Statement) -> String {
    match statement {
        Statement::Assign { key, value } => format!("{key} = {value}"),
        Statement::IfTruthy { key } => format!("if {key}"),
        Statement::IfFalsy { key } => format!("if not {key}"),
        Statement::Compare { key, op, value } => format!("if {key} {op} {value}"),
    }
}
