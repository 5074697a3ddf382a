pub mod assets;
pub mod ast;
pub mod cli;
pub mod directive;
pub mod estree;
pub mod expand;
pub mod facets;
pub mod filters;
pub mod invocation;
pub mod options;
pub mod output;
pub mod pathing;
pub mod shorthand;
pub mod visit;

pub use ast::{CallExpr, Expr, FunctionExpr, Literal, ObjectExpr, ObjectMember, Property, PropertyKey, Stmt};
pub use directive::{Directive, DirectiveError};
pub use estree::{EstreeError, expr_from_json, expr_to_json};
pub use expand::{BuildUnit, ExpandContext, ExpandError, expand, expand_syntax};
pub use filters::FilterRegistry;
pub use options::{ConfigError, Options, OptionsConfig};
pub use output::{to_js, to_js_pretty};
pub use pathing::{AssetPathing, CdnPathing};
pub use shorthand::{Template, build_function};
