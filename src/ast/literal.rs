/// A literal value as it appears in source.
///
/// Regular expression literals are not represented here; they travel as
/// [`Expr::Opaque`](crate::ast::Expr::Opaque) nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// String literal
    ///
    /// # Example
    /// ```text
    /// '[[setter|camel]]'
    /// ```
    String(String),

    /// Numeric literal (JavaScript numbers are doubles)
    Number(f64),

    /// Boolean literal
    Boolean(bool),

    /// Null literal
    Null,
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string a JavaScript engine would produce when coercing this literal
    /// to a property key (`String(value)`).
    pub fn to_key_string(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Number(n) => format_number(*n),
            Literal::Boolean(b) => b.to_string(),
            Literal::Null => "null".to_string(),
        }
    }
}

/// Formats a double the way JavaScript prints it for integral values
/// (`5` rather than `5.0`).
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{}", n as i64)
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        n.to_string()
    }
}
