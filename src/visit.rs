//! Tree walks used by the expansion pass.

use serde_json::Value;

use crate::{
    ast::{Expr, Literal, ObjectMember, Property, PropertyKey, Stmt},
    output,
};

/// Calls `f` on every string literal in the tree, depth first, in source order.
///
/// String literals inside opaque ESTree nodes are visited too; their `raw`
/// source text is refreshed when `f` changes the value.
pub fn each_string_literal_mut<F>(expr: &mut Expr, f: &mut F)
where
    F: FnMut(&mut String),
{
    match expr {
        Expr::Literal(Literal::String(s)) => f(s),
        Expr::Literal(_) | Expr::Identifier(_) => {}
        Expr::Object(obj) => {
            for member in &mut obj.members {
                let prop = match member {
                    ObjectMember::Property(prop) => prop,
                    ObjectMember::Opaque(v) => {
                        each_json_string_literal_mut(v, f);
                        continue;
                    }
                };
                match &mut prop.key {
                    PropertyKey::Literal(Literal::String(s)) => f(s),
                    PropertyKey::Computed(key) => each_string_literal_mut(key, f),
                    _ => {}
                }
                each_string_literal_mut(&mut prop.value, f);
            }
        }
        Expr::Array(elements) => {
            for element in elements {
                each_string_literal_mut(element, f);
            }
        }
        Expr::Call(call) => {
            each_string_literal_mut(&mut call.callee, f);
            for arg in &mut call.arguments {
                each_string_literal_mut(arg, f);
            }
        }
        Expr::Member(member) => {
            each_string_literal_mut(&mut member.object, f);
            each_string_literal_mut(&mut member.property, f);
        }
        Expr::Function(func) => {
            for stmt in &mut func.body {
                match stmt {
                    Stmt::Expression(e) | Stmt::Return(Some(e)) => each_string_literal_mut(e, f),
                    Stmt::Return(None) => {}
                    Stmt::Opaque(v) => each_json_string_literal_mut(v, f),
                }
            }
        }
        Expr::Opaque(v) => each_json_string_literal_mut(v, f),
    }
}

fn each_json_string_literal_mut<F>(v: &mut Value, f: &mut F)
where
    F: FnMut(&mut String),
{
    match v {
        Value::Object(node) => {
            let is_literal = node.get("type").and_then(Value::as_str) == Some("Literal");
            if is_literal {
                if let Some(Value::String(s)) = node.get_mut("value") {
                    let before = s.clone();
                    f(s);
                    if *s != before {
                        let raw = output::literal_source(&Literal::String(s.clone()));
                        node.insert("raw".to_string(), Value::String(raw));
                    }
                    return;
                }
            }
            for child in node.values_mut() {
                each_json_string_literal_mut(child, f);
            }
        }
        Value::Array(items) => {
            for item in items {
                each_json_string_literal_mut(item, f);
            }
        }
        _ => {}
    }
}

/// Calls `f` on each immediate `key: value` property of an object expression,
/// stopping at the first error. Opaque members are skipped. Anything other
/// than an object expression has no properties.
pub fn each_object_property_mut<F, E>(expr: &mut Expr, mut f: F) -> Result<(), E>
where
    F: FnMut(&mut Property) -> Result<(), E>,
{
    if let Some(obj) = expr.as_object_mut() {
        for prop in obj.properties_mut() {
            f(prop)?;
        }
    }
    Ok(())
}
