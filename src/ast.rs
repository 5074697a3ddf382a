//! # Module Definition Syntax Tree
//!
//! This module defines the subset of the ESTree JavaScript syntax tree that the
//! expansion pass inspects and rewrites.
//!
//! ## Architecture Overview
//!
//! - **[literal]** - Literal values (`'text'`, `42`, `true`, `null`)
//! - **[expressions]** - Expression nodes (objects, properties, calls, functions)
//! - **[statements]** - Statement nodes used inside synthesized function bodies
//!
//! ## Opaque Nodes
//!
//! Module definitions are produced by an external parser and can contain any
//! JavaScript construct. Node kinds the pass never looks at are carried as
//! [`Expr::Opaque`] / [`Stmt::Opaque`], and object members other than plain
//! `key: value` properties as [`ObjectMember::Opaque`]. These hold the original
//! ESTree JSON and encode back to it verbatim.
//!
//! Modelled nodes keep only what the typed tree stores. Encoding one drops
//! `loc`, `range` and similar positional fields, and regenerates the `raw`
//! text of literals (strings single-quoted).
//!
//! ## Example
//!
//! ```text
//! BEST.scene('famous:demo', {
//!     behaviors: { '#title': { content: '[[identity|camel|title-text]]' } },
//!     events:    { '$public': { 'title-text': '[[setter|camel]]' } }
//! })
//! ```
//!
//! The object passed to `BEST.scene` is the module definition tree: an
//! [`Expr::Object`] whose `behaviors` and `events` properties are facets.
pub mod expressions;
pub mod literal;
pub mod statements;

pub use expressions::{CallExpr, Expr, FunctionExpr, MemberExpr, ObjectExpr, ObjectMember, Property, PropertyKey};
pub use literal::Literal;
pub use statements::Stmt;
