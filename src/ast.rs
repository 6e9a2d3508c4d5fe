//! The parsed generator-expression tree. Parsing the surface `$<...>` syntax
//! into this tree is out of scope (spec §1); the crate consumes and produces
//! [`Evaluator`] values directly.

use crate::context::EvalContext;
use crate::dag::DagFrame;

/// A parsed generator expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluator {
    /// Literal text outside of any `$<...>` construct.
    Text(String),
    /// A `$<identifier-children:parameter-children>` node.
    Content {
        identifier: Vec<Evaluator>,
        parameters: Vec<Vec<Evaluator>>,
    },
}

impl Evaluator {
    pub fn text(s: impl Into<String>) -> Self {
        Evaluator::Text(s.into())
    }

    pub fn content(identifier: Vec<Evaluator>, parameters: Vec<Vec<Evaluator>>) -> Self {
        Evaluator::Content {
            identifier,
            parameters,
        }
    }

    /// Evaluate this node against `ctx`, within the DAG frame `dag` (if any
    /// transitive-property descent is in progress). Returns the empty string
    /// once `ctx.had_error` is set, per the sticky-error contract (§3).
    pub fn eval(&self, ctx: &mut EvalContext, dag: Option<&DagFrame>) -> String {
        if ctx.had_error {
            return String::new();
        }
        match self {
            Evaluator::Text(s) => s.clone(),
            Evaluator::Content {
                identifier,
                parameters,
            } => crate::driver::evaluate_content(identifier, parameters, ctx, dag),
        }
    }
}
