//! `GENEX_EVAL`/`TARGET_GENEX_EVAL` (SPEC_FULL §9A): re-parse a string value
//! as a fresh generator expression and evaluate it, optionally scoped to a
//! named target. Unlike `TARGET_PROPERTY`'s on-the-fly sub-expressions
//! (which the evaluator constructs directly as AST nodes, §4.6 step 7),
//! these genuinely need to parse caller-supplied text, so they depend on a
//! host-supplied [`crate::host::ExpressionParser`].

use crate::context::EvalContext;
use crate::dag::DagFrame;
use crate::error::EvalError;

pub fn eval_genex_eval(ctx: &mut EvalContext, dag: Option<&DagFrame>, text: &str) -> Result<String, EvalError> {
    let parser = ctx.expr_parser.clone().ok_or(EvalError::ParserUnavailable)?;
    let parsed = parser.parse(text)?;
    Ok(crate::driver::evaluate(&parsed, ctx, dag))
}

pub fn eval_target_genex_eval(
    ctx: &mut EvalContext,
    dag: Option<&DagFrame>,
    params: &[String],
) -> Result<String, EvalError> {
    let (target_name, text) = match params {
        [text] => {
            let head = ctx
                .head_target
                .clone()
                .ok_or_else(|| EvalError::RequiresBinaryTarget("TARGET_GENEX_EVAL".to_string()))?;
            (head.name().to_string(), text.clone())
        }
        [tgt, text] => (tgt.clone(), text.clone()),
        _ => {
            return Err(EvalError::ArityMismatch {
                identifier: "TARGET_GENEX_EVAL".to_string(),
                expected: "1 or 2".to_string(),
                found: params.len(),
            })
        }
    };

    let target = ctx
        .build
        .find_target(&target_name)
        .ok_or_else(|| EvalError::UnknownTarget(target_name.clone()))?;
    let parser = ctx.expr_parser.clone().ok_or(EvalError::ParserUnavailable)?;
    let parsed = parser.parse(&text)?;

    let previous_current = ctx.current_target.replace(target);
    let result = crate::driver::evaluate(&parsed, ctx, dag);
    ctx.current_target = previous_current;
    Ok(result)
}
