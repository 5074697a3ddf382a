//! ESTree JSON <-> syntax tree conversion
//!
//! Module definitions arrive as ESTree JSON (the shape esprima produces).
//! Node kinds the pass never inspects, and known kinds using features the
//! typed tree does not model (async functions, regex literals, ...), are
//! kept as [`Expr::Opaque`] and encode back to the JSON they came from.
//! Object members other than plain `key: value` properties (getters,
//! methods, spreads) are kept the same way, one member at a time.
//!
//! Modelled nodes are re-encoded from the typed tree: `loc`, `range` and
//! other positional fields are dropped and literal `raw` text is regenerated.

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::{
    ast::{CallExpr, Expr, FunctionExpr, Literal, MemberExpr, ObjectExpr, ObjectMember, Property, PropertyKey, Stmt},
    output,
};

/// Errors raised while decoding ESTree JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstreeError {
    /// A JSON value in node position is not an object with a `type` field
    #[error("expected an ESTree node, found {0}")]
    NotANode(String),

    /// A known node kind lacks one of its required fields
    #[error("{node} node is missing its `{field}` field")]
    MissingField { node: &'static str, field: &'static str },
}

/// Decode an ESTree expression node.
pub fn expr_from_json(v: &Value) -> Result<Expr, EstreeError> {
    let node = v
        .as_object()
        .ok_or_else(|| EstreeError::NotANode(short(v)))?;
    let kind = node
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| EstreeError::NotANode(short(v)))?;

    match kind {
        "Literal" => Ok(literal_from_json(node).map_or_else(|| Expr::Opaque(v.clone()), Expr::Literal)),
        "Identifier" => {
            let name = field(node, "Identifier", "name")?
                .as_str()
                .ok_or(EstreeError::MissingField { node: "Identifier", field: "name" })?;
            Ok(Expr::ident(name))
        }
        "ObjectExpression" => {
            let props = field(node, "ObjectExpression", "properties")?
                .as_array()
                .ok_or(EstreeError::MissingField { node: "ObjectExpression", field: "properties" })?;
            let members = props.iter().map(member_from_json).collect::<Result<_, _>>()?;
            Ok(Expr::Object(ObjectExpr { members }))
        }
        "ArrayExpression" => {
            let elements = field(node, "ArrayExpression", "elements")?
                .as_array()
                .ok_or(EstreeError::MissingField { node: "ArrayExpression", field: "elements" })?;
            let elements = elements
                .iter()
                .map(|e| if e.is_null() { Ok(Expr::Opaque(Value::Null)) } else { expr_from_json(e) })
                .collect::<Result<_, _>>()?;
            Ok(Expr::Array(elements))
        }
        "CallExpression" => {
            let callee = expr_from_json(field(node, "CallExpression", "callee")?)?;
            let arguments = match node.get("arguments") {
                Some(Value::Array(args)) => args.iter().map(expr_from_json).collect::<Result<_, _>>()?,
                _ => Vec::new(),
            };
            Ok(Expr::Call(CallExpr::new(callee, arguments)))
        }
        "MemberExpression" => Ok(Expr::Member(MemberExpr {
            object: Box::new(expr_from_json(field(node, "MemberExpression", "object")?)?),
            property: Box::new(expr_from_json(field(node, "MemberExpression", "property")?)?),
            computed: node.get("computed").and_then(Value::as_bool).unwrap_or(false),
        })),
        "FunctionExpression" => match function_from_json(node)? {
            Some(func) => Ok(Expr::Function(func)),
            None => Ok(Expr::Opaque(v.clone())),
        },
        _ => Ok(Expr::Opaque(v.clone())),
    }
}

/// Encode an expression as ESTree JSON.
pub fn expr_to_json(expr: &Expr) -> Value {
    match expr {
        Expr::Literal(lit) => literal_to_json(lit),
        Expr::Identifier(name) => json!({ "type": "Identifier", "name": name }),
        Expr::Object(obj) => json!({
            "type": "ObjectExpression",
            "properties": obj.members.iter().map(member_to_json).collect::<Vec<_>>(),
        }),
        Expr::Array(elements) => json!({
            "type": "ArrayExpression",
            "elements": elements.iter().map(expr_to_json).collect::<Vec<_>>(),
        }),
        Expr::Call(call) => json!({
            "type": "CallExpression",
            "callee": expr_to_json(&call.callee),
            "arguments": call.arguments.iter().map(expr_to_json).collect::<Vec<_>>(),
        }),
        Expr::Member(member) => json!({
            "type": "MemberExpression",
            "computed": member.computed,
            "object": expr_to_json(&member.object),
            "property": expr_to_json(&member.property),
        }),
        Expr::Function(func) => json!({
            "type": "FunctionExpression",
            "id": func.id.as_ref().map(|id| json!({ "type": "Identifier", "name": id })),
            "params": func.params.iter().map(|p| json!({ "type": "Identifier", "name": p })).collect::<Vec<_>>(),
            "defaults": [],
            "body": {
                "type": "BlockStatement",
                "body": func.body.iter().map(stmt_to_json).collect::<Vec<_>>(),
            },
            "generator": false,
            "expression": false,
        }),
        Expr::Opaque(v) => v.clone(),
    }
}

fn field<'a>(
    node: &'a Map<String, Value>,
    kind: &'static str,
    name: &'static str,
) -> Result<&'a Value, EstreeError> {
    node.get(name)
        .ok_or(EstreeError::MissingField { node: kind, field: name })
}

fn literal_from_json(node: &Map<String, Value>) -> Option<Literal> {
    // Regex literals carry a `regex` field and an unusable `value`
    if node.contains_key("regex") {
        return None;
    }
    match node.get("value")? {
        Value::String(s) => Some(Literal::String(s.clone())),
        Value::Number(n) => n.as_f64().map(Literal::Number),
        Value::Bool(b) => Some(Literal::Boolean(*b)),
        Value::Null => Some(Literal::Null),
        _ => None,
    }
}

fn literal_to_json(lit: &Literal) -> Value {
    let value = match lit {
        Literal::String(s) => Value::String(s.clone()),
        Literal::Number(n) => number_to_json(*n),
        Literal::Boolean(b) => Value::Bool(*b),
        Literal::Null => Value::Null,
    };
    json!({ "type": "Literal", "value": value, "raw": output::literal_source(lit) })
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

fn is_plain_property(v: &Value) -> bool {
    let Some(node) = v.as_object() else {
        return false;
    };
    node.get("type").and_then(Value::as_str) == Some("Property")
        && node.get("kind").and_then(Value::as_str).unwrap_or("init") == "init"
        && !node.get("method").and_then(Value::as_bool).unwrap_or(false)
}

fn member_from_json(v: &Value) -> Result<ObjectMember, EstreeError> {
    if is_plain_property(v) {
        property_from_json(v).map(ObjectMember::Property)
    } else {
        Ok(ObjectMember::Opaque(v.clone()))
    }
}

fn member_to_json(member: &ObjectMember) -> Value {
    match member {
        ObjectMember::Property(prop) => property_to_json(prop),
        ObjectMember::Opaque(v) => v.clone(),
    }
}

fn property_from_json(v: &Value) -> Result<Property, EstreeError> {
    let node = v
        .as_object()
        .ok_or_else(|| EstreeError::NotANode(short(v)))?;
    let key = expr_from_json(field(node, "Property", "key")?)?;
    let value = expr_from_json(field(node, "Property", "value")?)?;
    let computed = node.get("computed").and_then(Value::as_bool).unwrap_or(false);

    let key = if computed {
        PropertyKey::Computed(Box::new(key))
    } else {
        match key {
            Expr::Identifier(name) => PropertyKey::Identifier(name),
            Expr::Literal(lit) => PropertyKey::Literal(lit),
            other => PropertyKey::Computed(Box::new(other)),
        }
    };
    Ok(Property { key, value })
}

fn property_to_json(prop: &Property) -> Value {
    let (key, computed) = match &prop.key {
        PropertyKey::Identifier(name) => (json!({ "type": "Identifier", "name": name }), false),
        PropertyKey::Literal(lit) => (literal_to_json(lit), false),
        PropertyKey::Computed(expr) => (expr_to_json(expr), true),
    };
    json!({
        "type": "Property",
        "key": key,
        "computed": computed,
        "value": expr_to_json(&prop.value),
        "kind": "init",
        "method": false,
        "shorthand": false,
    })
}

/// Returns `None` for functions the typed tree does not model.
fn function_from_json(node: &Map<String, Value>) -> Result<Option<FunctionExpr>, EstreeError> {
    let flagged = |name: &str| node.get(name).and_then(Value::as_bool).unwrap_or(false);
    if flagged("generator") || flagged("async") {
        return Ok(None);
    }

    let id = match node.get("id") {
        Some(Value::Object(id)) => id.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    };

    let mut params = Vec::new();
    for param in field(node, "FunctionExpression", "params")?
        .as_array()
        .ok_or(EstreeError::MissingField { node: "FunctionExpression", field: "params" })?
    {
        match expr_from_json(param)? {
            Expr::Identifier(name) => params.push(name),
            _ => return Ok(None),
        }
    }

    let body = field(node, "FunctionExpression", "body")?
        .get("body")
        .and_then(Value::as_array)
        .ok_or(EstreeError::MissingField { node: "BlockStatement", field: "body" })?
        .iter()
        .map(stmt_from_json)
        .collect::<Result<_, _>>()?;

    Ok(Some(FunctionExpr { id, params, body }))
}

fn stmt_from_json(v: &Value) -> Result<Stmt, EstreeError> {
    match v.get("type").and_then(Value::as_str) {
        Some("ExpressionStatement") => {
            let expression = v
                .get("expression")
                .ok_or(EstreeError::MissingField { node: "ExpressionStatement", field: "expression" })?;
            Ok(Stmt::Expression(expr_from_json(expression)?))
        }
        Some("ReturnStatement") => match v.get("argument") {
            Some(arg) if !arg.is_null() => Ok(Stmt::Return(Some(expr_from_json(arg)?))),
            _ => Ok(Stmt::Return(None)),
        },
        Some(_) => Ok(Stmt::Opaque(v.clone())),
        None => Err(EstreeError::NotANode(short(v))),
    }
}

fn stmt_to_json(stmt: &Stmt) -> Value {
    match stmt {
        Stmt::Expression(expr) => json!({ "type": "ExpressionStatement", "expression": expr_to_json(expr) }),
        Stmt::Return(arg) => json!({ "type": "ReturnStatement", "argument": arg.as_ref().map(expr_to_json) }),
        Stmt::Opaque(v) => v.clone(),
    }
}

/// Abbreviated rendering of a JSON value for error messages.
fn short(v: &Value) -> String {
    let mut s = v.to_string();
    if s.len() > 40 {
        let cut = (0..=40).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0);
        s.truncate(cut);
        s.push_str("...");
    }
    s
}

impl serde::Serialize for Expr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&expr_to_json(self), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Expr {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = <Value as serde::Deserialize>::deserialize(deserializer)?;
        expr_from_json(&v).map_err(serde::de::Error::custom)
    }
}
