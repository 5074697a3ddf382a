use crate::ast::Expr;

/// Statement node inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Expression statement
    ///
    /// # Example
    /// ```text
    /// $state.set('title', $payload);
    /// ```
    Expression(Expr),

    /// Return statement
    ///
    /// # Example
    /// ```text
    /// return title;
    /// ```
    Return(Option<Expr>),

    /// Any other ESTree statement, kept as its JSON form.
    Opaque(serde_json::Value),
}
