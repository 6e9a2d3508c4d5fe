//! A generator-expression evaluation engine in the style of CMake's
//! `$<...>` mini-language: parse trees go in as [`ast::Evaluator`] values,
//! strings come out, and every query about targets, the active build, and
//! the active configuration goes back out through the [`host`] traits.

pub mod ast;
pub mod context;
pub mod dag;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod host;
pub mod node;
pub mod numeric;
pub mod observability;
pub mod ops;
pub mod policy;
pub mod registry;

pub use ast::Evaluator;
pub use context::EvalContext;
pub use dag::{DagCheck, DagFrame, RoleFlags};
pub use error::EvalError;
pub use node::{Arity, NodeDescriptor, Op};

/// Evaluate a parsed generator expression to its final string, per the
/// contract in [`driver::evaluate`]: errors latch `ctx.had_error` rather
/// than returning a `Result`.
pub fn evaluate(expr: &Evaluator, ctx: &mut EvalContext, dag: Option<&DagFrame>) -> String {
    driver::evaluate(expr, ctx, dag)
}
