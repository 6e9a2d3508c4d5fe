//! Top-level recursive-descent evaluator: walks an [`Evaluator`] tree,
//! looks up each `Content` node's identifier in the [`crate::registry`],
//! checks arity, and dispatches to [`crate::ops::dispatch`].
//!
//! Errors are sticky (spec §5): the first one wins, `ctx.had_error` latches,
//! and every evaluation performed afterward — including ones already in
//! flight up the call stack — collapses to the empty string.

use crate::ast::Evaluator;
use crate::context::EvalContext;
use crate::dag::DagFrame;
use crate::error::EvalError;
use crate::node::Arity;

/// Evaluate a single generator-expression tree to its final string.
pub fn evaluate(expr: &Evaluator, ctx: &mut EvalContext, dag: Option<&DagFrame>) -> String {
    if ctx.had_error {
        return String::new();
    }
    expr.eval(ctx, dag)
}

/// Evaluate a sequence of sibling nodes (e.g. top-level text interspersed
/// with `$<...>` expressions) and concatenate the results.
pub(crate) fn evaluate_sequence(seq: &[Evaluator], ctx: &mut EvalContext, dag: Option<&DagFrame>) -> String {
    let mut out = String::new();
    for node in seq {
        if ctx.had_error {
            break;
        }
        out.push_str(&evaluate(node, ctx, dag));
    }
    out
}

/// Evaluate a `Content` node: resolve its identifier, decide whether and how
/// many parameters to evaluate per its descriptor's flags (spec §4.1), check
/// arity, and dispatch.
pub(crate) fn evaluate_content(
    identifier: &[Evaluator],
    parameters: &[Vec<Evaluator>],
    ctx: &mut EvalContext,
    dag: Option<&DagFrame>,
) -> String {
    if ctx.had_error {
        return String::new();
    }

    let name = evaluate_sequence(identifier, ctx, dag);
    if ctx.had_error {
        return String::new();
    }

    let Some(descriptor) = crate::registry::lookup(&name) else {
        return fatal(ctx, dag, &EvalError::UnknownIdentifier(name).to_string());
    };

    // A node that discards its content (only `$<0:...>` today) never
    // evaluates its parameter — only its presence is checked, so that an
    // argument containing an otherwise-fatal sub-expression can still be
    // used to comment it out.
    if !descriptor.generates_content {
        if parameters.is_empty() {
            return fatal(ctx, dag, &EvalError::MissingParameter(name).to_string());
        }
        return String::new();
    }

    if descriptor.requires_literal_input && !all_parameters_literal(parameters) {
        return fatal(ctx, dag, &EvalError::NonLiteralParameter(name).to_string());
    }

    let params = eval_parameters(parameters, descriptor.arity, descriptor.accepts_arbitrary_content, ctx, dag);
    if ctx.had_error {
        return String::new();
    }

    if let Err(err) = check_arity(&name, descriptor.arity, &params) {
        return fatal(ctx, dag, &err.to_string());
    }

    crate::ops::dispatch(descriptor.op, &name, &params, ctx, dag)
}

/// Evaluate each parameter child, applying the arbitrary-content merge rule
/// (spec §4.1): for a node with declared arity `N` that accepts arbitrary
/// content, the first `N-1` parameter children are evaluated normally and
/// every remaining child is evaluated and joined into the `N`th parameter
/// with a literal comma between each — this is what lets a user pass a
/// comma-containing argument to e.g. `$<1:a,b,c>` by relying on the parser
/// having split it into separate parameter children at the top level.
fn eval_parameters(
    parameters: &[Vec<Evaluator>],
    arity: Arity,
    arbitrary_last: bool,
    ctx: &mut EvalContext,
    dag: Option<&DagFrame>,
) -> Vec<String> {
    let normal_count = match arity {
        Arity::Exact(n) if arbitrary_last && n > 0 => n - 1,
        _ if arbitrary_last => 0,
        _ => parameters.len(),
    };

    if !arbitrary_last || parameters.len() <= normal_count {
        let mut out = Vec::with_capacity(parameters.len());
        for param in parameters {
            if ctx.had_error {
                break;
            }
            out.push(evaluate_sequence(param, ctx, dag));
        }
        return out;
    }

    let mut out = Vec::with_capacity(normal_count + 1);
    for param in &parameters[..normal_count] {
        if ctx.had_error {
            return out;
        }
        out.push(evaluate_sequence(param, ctx, dag));
    }

    let mut tail_pieces = Vec::with_capacity(parameters.len() - normal_count);
    for param in &parameters[normal_count..] {
        if ctx.had_error {
            return out;
        }
        tail_pieces.push(evaluate_sequence(param, ctx, dag));
    }
    out.push(tail_pieces.join(","));
    out
}

/// A node with `requires_literal_input` (spec §4.1 bullet 3) cannot have
/// nested `$<...>` evaluators inside any parameter child — every leaf must
/// already be plain text.
fn all_parameters_literal(parameters: &[Vec<Evaluator>]) -> bool {
    parameters
        .iter()
        .all(|param| param.iter().all(|node| matches!(node, Evaluator::Text(_))))
}

fn check_arity(identifier: &str, arity: Arity, params: &[String]) -> Result<(), EvalError> {
    match arity {
        Arity::Exact(n) if params.len() != n => Err(EvalError::ArityMismatch {
            identifier: identifier.to_string(),
            expected: n.to_string(),
            found: params.len(),
        }),
        Arity::OneOrMore if params.is_empty() => Err(EvalError::ArityMismatch {
            identifier: identifier.to_string(),
            expected: "1 or more".to_string(),
            found: params.len(),
        }),
        Arity::OneOrZero if params.len() > 1 => Err(EvalError::ArityMismatch {
            identifier: identifier.to_string(),
            expected: "0 or 1".to_string(),
            found: params.len(),
        }),
        Arity::Dynamic | Arity::Exact(_) | Arity::OneOrMore | Arity::OneOrZero => Ok(()),
    }
}

/// Latch the sticky error flag, report through diagnostics unless the
/// context is running quiet, and return the empty string every caller up
/// the stack collapses to.
pub(crate) fn fatal(ctx: &mut EvalContext, dag: Option<&DagFrame>, message: &str) -> String {
    ctx.had_error = true;
    if !ctx.quiet {
        let backtrace = build_backtrace(dag);
        ctx.diagnostics.report_error(message, &backtrace);
    }
    String::new()
}

fn build_backtrace(dag: Option<&DagFrame>) -> Vec<String> {
    let mut frames = Vec::new();
    let mut current = dag;
    while let Some(frame) = current {
        if !frame.identifier.is_empty() {
            frames.push(format!(
                "while evaluating $<{}:...> in property \"{}\" of target \"{}\"",
                frame.identifier, frame.property, frame.target
            ));
        }
        current = frame.parent;
    }
    frames
}
