use crate::ast::{Literal, Stmt};

/// Expression node of a module definition tree.
///
/// Only the node kinds the expansion pass reads or synthesizes are modelled;
/// everything else is [`Expr::Opaque`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal value
    ///
    /// # Examples
    /// ```text
    /// '[[setter]]'
    /// 42
    /// ```
    Literal(Literal),

    /// Identifier reference
    ///
    /// # Example
    /// ```text
    /// $payload
    /// ```
    Identifier(String),

    /// Object expression
    ///
    /// # Example
    /// ```text
    /// { behaviors: {...}, events: {...} }
    /// ```
    Object(ObjectExpr),

    /// Array expression. Holes (`[a, , b]`) are `Opaque(null)`.
    Array(Vec<Expr>),

    /// Call expression
    ///
    /// # Example
    /// ```text
    /// BEST.scene('famous:demo', {...})
    /// ```
    Call(CallExpr),

    /// Member access (`a.b` or `a['b']`)
    Member(MemberExpr),

    /// Function expression
    ///
    /// # Example
    /// ```text
    /// function($state, $payload) { $state.set('title', $payload); }
    /// ```
    Function(FunctionExpr),

    /// Any ESTree node the pass does not inspect, kept as its JSON form.
    Opaque(serde_json::Value),
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn number(value: f64) -> Self {
        Expr::Literal(Literal::Number(value))
    }

    pub fn object(properties: Vec<Property>) -> Self {
        Expr::Object(ObjectExpr::new(properties))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Expr::Object(_))
    }

    /// The value of a string literal node, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expr::Literal(lit) => lit.as_str(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectExpr> {
        match self {
            Expr::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectExpr> {
        match self {
            Expr::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_call_mut(&mut self) -> Option<&mut CallExpr> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }
}

/// Object expression: an ordered list of members, in authored order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectExpr {
    pub members: Vec<ObjectMember>,
}

impl ObjectExpr {
    pub fn new(properties: Vec<Property>) -> Self {
        ObjectExpr {
            members: properties.into_iter().map(ObjectMember::Property).collect(),
        }
    }

    /// The plain `key: value` members, skipping opaque ones.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.members.iter().filter_map(ObjectMember::as_property)
    }

    pub fn properties_mut(&mut self) -> impl Iterator<Item = &mut Property> {
        self.members.iter_mut().filter_map(|m| match m {
            ObjectMember::Property(p) => Some(p),
            ObjectMember::Opaque(_) => None,
        })
    }

    /// First property whose static key equals `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties()
            .find(|p| p.key_name().as_deref() == Some(name))
    }

    /// Value of the first property whose static key equals `name`.
    pub fn get(&self, name: &str) -> Option<&Expr> {
        self.property(name).map(|p| &p.value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Expr> {
        self.properties_mut()
            .find(|p| p.key_name().as_deref() == Some(name))
            .map(|p| &mut p.value)
    }
}

/// One entry of an object expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMember {
    /// `key: value`
    Property(Property),
    /// Getters, setters, methods and spreads, kept as their ESTree JSON
    Opaque(serde_json::Value),
}

impl ObjectMember {
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            ObjectMember::Property(p) => Some(p),
            ObjectMember::Opaque(_) => None,
        }
    }
}

/// A `key: value` entry of an object expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expr,
}

impl Property {
    /// Builds a plain `name: value` property. Names that are not valid
    /// identifiers get a string-literal key.
    pub fn init(name: &str, value: Expr) -> Self {
        let key = if is_identifier_name(name) {
            PropertyKey::Identifier(name.to_string())
        } else {
            PropertyKey::Literal(Literal::String(name.to_string()))
        };
        Property { key, value }
    }

    /// Static name of the key, as the runtime would see it.
    ///
    /// Computed keys (`[expr]: value`) have no static name.
    pub fn key_name(&self) -> Option<String> {
        match &self.key {
            PropertyKey::Identifier(name) => Some(name.clone()),
            PropertyKey::Literal(lit) => Some(lit.to_key_string()),
            PropertyKey::Computed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    /// `title: ...`
    Identifier(String),
    /// `'#title': ...` or `0: ...`
    Literal(Literal),
    /// `[expr]: ...`
    Computed(Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

impl CallExpr {
    pub fn new(callee: Expr, arguments: Vec<Expr>) -> Self {
        CallExpr {
            callee: Box::new(callee),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: Box<Expr>,
    /// `true` for `a[b]`, `false` for `a.b`
    pub computed: bool,
}

impl MemberExpr {
    /// `object.property`
    pub fn dot(object: Expr, property: &str) -> Self {
        MemberExpr {
            object: Box::new(object),
            property: Box::new(Expr::ident(property)),
            computed: false,
        }
    }
}

/// Function expression with simple identifier parameters.
///
/// Functions using destructuring or default parameters are kept opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub id: Option<String>,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
}

impl FunctionExpr {
    pub fn new(params: Vec<String>, body: Vec<Stmt>) -> Self {
        FunctionExpr {
            id: None,
            params,
            body,
        }
    }
}

/// Whether `name` can be written as a bare identifier key.
pub(crate) fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Words that are identifier names but cannot bind a parameter.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "enum", "eval", "export", "extends", "false", "finally", "for", "function", "if", "implements",
    "import", "in", "instanceof", "interface", "let", "new", "null", "package", "private", "protected", "public",
    "return", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with",
    "yield",
];

/// Whether `name` can be used as a function parameter and referenced in its body.
pub(crate) fn is_binding_name(name: &str) -> bool {
    is_identifier_name(name) && !RESERVED_WORDS.contains(&name)
}
