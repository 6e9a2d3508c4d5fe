//! `COMPILE_FEATURES` (spec §4.8): while assembling link libraries, an
//! unavailable feature is recorded against the target's required language
//! standard rather than failing the whole expression.

use crate::context::EvalContext;
use crate::dag::DagFrame;
use crate::error::EvalError;

pub fn eval_compile_features(
    ctx: &mut EvalContext,
    dag: Option<&DagFrame>,
    features: &[String],
) -> Result<String, EvalError> {
    let head = ctx
        .head_target
        .clone()
        .ok_or_else(|| EvalError::RequiresBinaryTarget("COMPILE_FEATURES".to_string()))?;
    let evaluating_link_libraries = dag.map(|f| f.roles.evaluating_link_libraries).unwrap_or(false);

    for feature in features {
        let info = ctx.build.known_compile_feature(feature).ok_or_else(|| EvalError::InvalidOperand {
            identifier: "COMPILE_FEATURES".to_string(),
            value: feature.clone(),
        })?;
        if !ctx.build.feature_available(head.name(), feature, &ctx.config) {
            if evaluating_link_libraries {
                let key = (head.name().to_string(), info.language.clone());
                let current_level = ctx
                    .max_language_standard
                    .get(&key)
                    .and_then(|existing| ctx.build.known_compile_feature(existing))
                    .map(|existing_info| existing_info.standard)
                    .unwrap_or(0);
                if info.standard >= current_level {
                    ctx.max_language_standard.insert(key, feature.clone());
                }
            } else {
                return Ok("0".to_string());
            }
        }
    }
    Ok("1".to_string())
}
