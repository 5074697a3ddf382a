use tracing::debug;

use crate::ast::Expr;

/// Makes the version reference the second argument of a library invocation
/// (`BEST.scene(name, definition)` → `BEST.scene(name, versionRef, definition)`).
/// The client runtime uses the reference to manage the module's objects.
///
/// Every argument from the second on shifts one place right. A node that is
/// not a call, or a call without arguments, is left alone.
pub fn add_version_ref(version_ref: &str, invocation: &mut Expr) {
    let Some(call) = invocation.as_call_mut() else {
        debug!("library invocation is not a call expression, skipping");
        return;
    };
    if call.arguments.is_empty() {
        return;
    }
    call.arguments.insert(1, Expr::string(version_ref));
}

/// Swaps the definition argument of a library invocation for its expanded
/// form. The argument is the first one equal to `original`, the definition as
/// it was before expansion.
///
/// Returns `false` when the invocation carries no such argument.
pub fn write_back_definition(invocation: &mut Expr, original: &Expr, expanded: &Expr) -> bool {
    let Some(call) = invocation.as_call_mut() else {
        return false;
    };
    match call.arguments.iter_mut().find(|arg| **arg == *original) {
        Some(arg) => {
            *arg = expanded.clone();
            true
        }
        None => false,
    }
}
