//! Run the expansion step over a build unit file

use std::path::PathBuf;

use super::CliError;
use crate::{BuildUnit, ExpandContext, Expr, FilterRegistry, OptionsConfig, expand, output};

/// Output format of the expand command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emit {
    /// The rewritten build unit as ESTree JSON
    #[default]
    Json,
    /// Each rewritten tree printed as JavaScript
    Js,
}

/// Options for the expand command
#[derive(Debug, Clone, Default)]
pub struct ExpandOptions {
    /// Build unit JSON
    pub input: Option<String>,
    /// Path to an options JSON file
    pub config: Option<PathBuf>,
    /// Pretty-print the output
    pub pretty: bool,
    pub emit: Emit,
}

/// Execute an expand operation, returning the text to print
pub fn execute_expand(options: &ExpandOptions) -> Result<String, CliError> {
    let config = match &options.config {
        Some(path) => OptionsConfig::from_file(path)?,
        None => OptionsConfig::default(),
    };
    let compiled = config.compile()?;
    let filters = FilterRegistry::standard();
    let ctx = ExpandContext::new(&compiled, &filters);

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let unit = BuildUnit::from_json_str(json_str)?;
    let unit = expand(&ctx, unit)?;

    match options.emit {
        Emit::Json if options.pretty => Ok(serde_json::to_string_pretty(&unit)?),
        Emit::Json => Ok(serde_json::to_string(&unit)?),
        Emit::Js => Ok(render_js(&unit, options.pretty)),
    }
}

fn render_js(unit: &BuildUnit, pretty: bool) -> String {
    let print = |expr: &Expr| if pretty { output::to_js_pretty(expr) } else { output::to_js(expr) };
    let mut out = String::new();

    for (module_name, definition) in &unit.module_definitions {
        out.push_str(&format!("// {} definition\n{}\n", module_name, print(definition)));
    }
    for (module_name, invocation) in &unit.library_invocations {
        out.push_str(&format!("// {} invocation\n{}\n", module_name, print(invocation)));
    }
    out
}
