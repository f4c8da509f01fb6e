//! CLI command implementations.

pub mod files;
pub mod run;
pub mod show;
pub mod tree;

use envcascade_config::LoadOptions;

use crate::args::LoadArgs;
use crate::error::UsageError;

/// Translate shared loader flags into `LoadOptions`.
pub fn load_options(args: &LoadArgs) -> Result<LoadOptions, UsageError> {
    let initial_variables = args
        .set
        .iter()
        .map(|pair| parse_assignment(pair))
        .collect::<Result<Vec<_>, _>>()?;

    let prefix = args.prefix.clone().filter(|p| !p.is_empty());
    let root_var = if args.no_root_var || args.root_var.trim().is_empty() {
        None
    } else {
        Some(args.root_var.clone())
    };

    Ok(LoadOptions {
        prefix,
        strip_prefix: args.strip_prefix,
        onefile: args.onefile,
        initial_variables,
        root_var,
        reset_store: false,
    })
}

/// Split a `KEY=VALUE` argument. The value may be empty or contain `=`.
pub fn parse_assignment(pair: &str) -> Result<(String, String), UsageError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(UsageError(format!(
            "invalid --set '{pair}': expected KEY=VALUE"
        ))),
    }
}
