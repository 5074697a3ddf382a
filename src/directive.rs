//! Shorthand directive grammar: `[[name|filter|filter...]]`.

use thiserror::Error;
use tracing::warn;

const OPEN: &str = "[[";
const CLOSE: &str = "]]";
const PIPE: char = '|';

/// A decoded shorthand directive.
///
/// # Examples
/// ```text
/// [[setter]]                 → name: "setter",   filters: []
/// [[setter|camel]]           → name: "setter",   filters: ["camel"]
/// [[identity|camel|my-prop]] → name: "identity", filters: ["camel", "my-prop"]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub filters: Vec<String>,
}

/// Errors resolving a directive into a function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectiveError {
    /// The directive name is neither `setter` nor `identity`
    #[error("`{name}` is not a valid value for an event.")]
    InvalidDirective { name: String },

    /// `[[identity]]` without the identifier segment
    #[error("`identity` directive for `{key}` names no identifier")]
    MissingIdentifier { key: String },

    /// The resolved name cannot be a function parameter
    #[error("`{name}` (from `{key}`) is not a valid JavaScript identifier")]
    InvalidIdentifier { key: String, name: String },
}

impl Directive {
    /// Decodes `raw`, the string value found under property `key`.
    ///
    /// Values written without the `[[`/`]]` delimiters are still accepted:
    /// they are wrapped and a warning is logged. This never fails.
    pub fn parse(key: &str, raw: &str) -> Directive {
        let wrapped;
        let value = if raw.starts_with(OPEN) {
            raw
        } else {
            warn!(
                key,
                "Please use the correct shorthand syntax for {} denoted by double brackets. [[{}]] rather than {}",
                key,
                raw,
                raw
            );
            wrapped = format!("{}{}{}", OPEN, raw, CLOSE);
            &wrapped
        };

        let inner = &value[OPEN.len()..];
        let inner = match inner.strip_suffix(CLOSE) {
            Some(inner) => inner,
            None => {
                warn!(key, value, "shorthand directive is missing its closing brackets");
                inner
            }
        };

        let mut parts = inner.split(PIPE).map(str::to_string);
        let name = parts.next().unwrap_or_default();
        Directive {
            name,
            filters: parts.collect(),
        }
    }
}
