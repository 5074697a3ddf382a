//! JavaScript source output for module definition trees.
//!
//! This module prints syntax trees back to JavaScript source, in either a
//! compact or a pretty-printed form. Property order is the authored order.
//!
//! # Features
//!
//! - **Compact output** via [`to_js()`] - no optional whitespace
//! - **Pretty output** via [`to_js_pretty()`] - 2-space indentation, one property per line
//! - **String escaping** - single-quoted strings with control and quote escapes
//!
//! Nodes and object members carried as opaque JSON print as a `/* Type */`
//! placeholder; the
//! printer is meant for inspecting expansions, not for emitting bundles.
//!
//! # Examples
//!
//! ```
//! use module_sugar::ast::Expr;
//! use module_sugar::output::to_js;
//!
//! assert_eq!(to_js(&Expr::string("it's")), r"'it\'s'");
//! ```

use crate::ast::{Expr, Literal, ObjectMember, PropertyKey, Stmt, expressions::is_identifier_name, literal::format_number};

pub struct JsPrinter {
    pretty: bool,
}

impl JsPrinter {
    pub fn new(pretty: bool) -> Self {
        JsPrinter { pretty }
    }

    pub fn print(&self, expr: &Expr) -> String {
        self.print_expr(expr, 0)
    }

    fn print_expr(&self, expr: &Expr, indent: usize) -> String {
        match expr {
            Expr::Literal(lit) => literal_source(lit),
            Expr::Identifier(name) => name.clone(),
            Expr::Object(obj) => self.print_object(&obj.members, indent),
            Expr::Array(elements) => self.print_array(elements, indent),
            Expr::Call(call) => {
                let callee = match call.callee.as_ref() {
                    f @ Expr::Function(_) => format!("({})", self.print_expr(f, indent)),
                    other => self.print_expr(other, indent),
                };
                let sep = if self.pretty { ", " } else { "," };
                let args: Vec<String> = call
                    .arguments
                    .iter()
                    .map(|a| self.print_expr(a, indent))
                    .collect();
                format!("{}({})", callee, args.join(sep))
            }
            Expr::Member(member) => {
                let object = self.print_expr(&member.object, indent);
                if member.computed {
                    format!("{}[{}]", object, self.print_expr(&member.property, indent))
                } else {
                    format!("{}.{}", object, self.print_expr(&member.property, indent))
                }
            }
            Expr::Function(func) => {
                let name = func.id.as_deref().map(|id| format!(" {}", id)).unwrap_or_default();
                let params = func.params.join(if self.pretty { ", " } else { "," });
                let body = self.print_body(&func.body, indent);
                if self.pretty {
                    format!("function{}({}) {}", name, params, body)
                } else {
                    format!("function{}({}){}", name, params, body)
                }
            }
            Expr::Opaque(v) => opaque_placeholder(v),
        }
    }

    fn print_body(&self, body: &[Stmt], indent: usize) -> String {
        if body.is_empty() {
            return "{}".to_string();
        }

        let stmts: Vec<String> = body.iter().map(|s| self.print_stmt(s, indent + 1)).collect();
        if self.pretty {
            let mut result = "{\n".to_string();
            for stmt in stmts {
                result.push_str(&self.indent(indent + 1));
                result.push_str(&stmt);
                result.push('\n');
            }
            result.push_str(&self.indent(indent));
            result.push('}');
            result
        } else {
            format!("{{{}}}", stmts.concat())
        }
    }

    fn print_stmt(&self, stmt: &Stmt, indent: usize) -> String {
        match stmt {
            Stmt::Expression(expr) => format!("{};", self.print_expr(expr, indent)),
            Stmt::Return(Some(expr)) => format!("return {};", self.print_expr(expr, indent)),
            Stmt::Return(None) => "return;".to_string(),
            Stmt::Opaque(v) => opaque_placeholder(v),
        }
    }

    fn print_array(&self, elements: &[Expr], indent: usize) -> String {
        if elements.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let mut result = "[\n".to_string();
            let items: Vec<String> = elements
                .iter()
                .map(|e| format!("{}{}", self.indent(indent + 1), self.print_expr(e, indent + 1)))
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push(']');
            result
        } else {
            let items: Vec<String> = elements.iter().map(|e| self.print_expr(e, indent)).collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_object(&self, members: &[ObjectMember], indent: usize) -> String {
        if members.is_empty() {
            return "{}".to_string();
        }

        if self.pretty {
            let mut result = "{\n".to_string();
            let items: Vec<String> = members
                .iter()
                .map(|m| format!("{}{}", self.indent(indent + 1), self.print_member(m, indent + 1)))
                .collect();
            result.push_str(&items.join(",\n"));
            result.push('\n');
            result.push_str(&self.indent(indent));
            result.push('}');
            result
        } else {
            let items: Vec<String> = members.iter().map(|m| self.print_member(m, indent)).collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn print_member(&self, member: &ObjectMember, indent: usize) -> String {
        match member {
            ObjectMember::Property(p) => {
                let sep = if self.pretty { ": " } else { ":" };
                format!("{}{}{}", self.print_key(&p.key, indent), sep, self.print_expr(&p.value, indent))
            }
            ObjectMember::Opaque(v) => opaque_placeholder(v),
        }
    }

    fn print_key(&self, key: &PropertyKey, indent: usize) -> String {
        match key {
            PropertyKey::Identifier(name) => name.clone(),
            PropertyKey::Literal(Literal::String(s)) if is_identifier_name(s) => s.clone(),
            PropertyKey::Literal(lit) => literal_source(lit),
            PropertyKey::Computed(expr) => format!("[{}]", self.print_expr(expr, indent)),
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

fn opaque_placeholder(v: &serde_json::Value) -> String {
    let kind = v.get("type").and_then(|t| t.as_str()).unwrap_or("null");
    format!("/* {} */", kind)
}

/// Source text of a literal, strings single-quoted.
pub fn literal_source(lit: &Literal) -> String {
    match lit {
        Literal::String(s) => format!("'{}'", escape_string(s)),
        Literal::Number(n) => format_number(*n),
        Literal::Boolean(b) => b.to_string(),
        Literal::Null => "null".to_string(),
    }
}

fn escape_string(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '\'' => vec!['\\', '\''],
            '\\' => vec!['\\', '\\'],
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c if c.is_control() => format!("\\u{:04x}", c as u32).chars().collect(),
            c => vec![c],
        })
        .collect()
}

/// Prints an expression as compact JavaScript.
///
/// # Examples
///
/// ```
/// use module_sugar::ast::{Expr, Property};
/// use module_sugar::output::to_js;
///
/// let obj = Expr::object(vec![Property::init("size", Expr::number(200.0))]);
/// assert_eq!(to_js(&obj), "{size:200}");
/// ```
pub fn to_js(expr: &Expr) -> String {
    JsPrinter::new(false).print(expr)
}

/// Prints an expression as JavaScript with 2-space indentation.
pub fn to_js_pretty(expr: &Expr) -> String {
    JsPrinter::new(true).print(expr)
}
