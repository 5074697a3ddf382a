//! Builds function expressions from shorthand directives.
//!
//! Two function shapes exist:
//!
//! ```text
//! Identity:     function(myProp){return myProp;}
//! StateSetter:  function($state,$payload){$state.set('myProp',$payload);}
//! ```
//!
//! Behaviors use `Identity`; events use `StateSetter`. The `identity`
//! directive always produces the `Identity` shape, whatever the facet.

use crate::{
    ast::{CallExpr, Expr, FunctionExpr, MemberExpr, Stmt, expressions::is_binding_name},
    directive::{Directive, DirectiveError},
    filters::FilterRegistry,
};

pub const STATE_PARAM: &str = "$state";
pub const PAYLOAD_PARAM: &str = "$payload";
const STATE_SETTER_METHOD: &str = "set";

/// Function shape synthesized for a resolved identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// One parameter, returned unchanged
    Identity,
    /// Writes the payload into the shared state under the identifier
    StateSetter,
}

impl Template {
    /// Constructs the function expression for `name`.
    pub fn instantiate(self, name: &str) -> Expr {
        let func = match self {
            Template::Identity => FunctionExpr::new(
                vec![name.to_string()],
                vec![Stmt::Return(Some(Expr::ident(name)))],
            ),
            Template::StateSetter => {
                let set = MemberExpr::dot(Expr::ident(STATE_PARAM), STATE_SETTER_METHOD);
                let call = CallExpr::new(
                    Expr::Member(set),
                    vec![Expr::string(name), Expr::ident(PAYLOAD_PARAM)],
                );
                FunctionExpr::new(
                    vec![STATE_PARAM.to_string(), PAYLOAD_PARAM.to_string()],
                    vec![Stmt::Expression(Expr::Call(call))],
                )
            }
        };
        Expr::Function(func)
    }
}

/// Expands the shorthand `value` found under property `key` into a function.
///
/// - `[[setter|f...]]` applies the filters to `key` and instantiates `template`.
/// - `[[identity|f...|name]]` applies the leading filters to the last segment
///   and instantiates [`Template::Identity`]; `key` is not used.
///
/// # Errors
///
/// [`DirectiveError::InvalidDirective`] for any other directive name,
/// [`DirectiveError::MissingIdentifier`] for `identity` without a segment, and
/// [`DirectiveError::InvalidIdentifier`] when an `Identity` function would
/// bind a name that is not a valid identifier (`font-size`, `return`).
pub fn build_function(
    filters: &FilterRegistry,
    key: &str,
    value: &str,
    template: Template,
) -> Result<Expr, DirectiveError> {
    let Directive { name, filters: mut chain } = Directive::parse(key, value);

    match name.as_str() {
        "setter" => {
            let state_name = filters.apply_chain(&chain, key);
            if template == Template::Identity {
                check_binding(key, &state_name)?;
            }
            Ok(template.instantiate(&state_name))
        }
        "identity" => {
            let raw = chain
                .pop()
                .ok_or_else(|| DirectiveError::MissingIdentifier { key: key.to_string() })?;
            let state_name = filters.apply_chain(&chain, &raw);
            check_binding(key, &state_name)?;
            Ok(Template::Identity.instantiate(&state_name))
        }
        _ => Err(DirectiveError::InvalidDirective { name }),
    }
}

// The state setter only quotes the name, so any string works there.
fn check_binding(key: &str, name: &str) -> Result<(), DirectiveError> {
    if is_binding_name(name) {
        Ok(())
    } else {
        Err(DirectiveError::InvalidIdentifier {
            key: key.to_string(),
            name: name.to_string(),
        })
    }
}
