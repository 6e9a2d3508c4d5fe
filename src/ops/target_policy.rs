//! `TARGET_POLICY` (spec §4.9): whether a named policy affecting target
//! behavior reports as NEW for the head target.

use crate::context::EvalContext;
use crate::error::EvalError;
use crate::policy::{PolicyStatus, TARGET_POLICIES};

pub fn eval_target_policy(ctx: &mut EvalContext, policy: &str) -> Result<String, EvalError> {
    if ctx.head_target.is_none() {
        return Err(EvalError::RequiresBinaryTarget("TARGET_POLICY".to_string()));
    }
    if !TARGET_POLICIES.contains(&policy) {
        return Err(EvalError::UnknownPolicy {
            policy: policy.to_string(),
            accepted: TARGET_POLICIES.join(", "),
        });
    }

    ctx.had_context_sensitive_condition = true;
    let status = ctx.build.policy_status(policy).unwrap_or(PolicyStatus::Warn);
    Ok(match status {
        PolicyStatus::New => "1".to_string(),
        PolicyStatus::Old => "0".to_string(),
        PolicyStatus::Warn => {
            ctx.diagnostics
                .report_policy_warning(policy, &format!("policy \"{policy}\" is not set; using OLD behavior"));
            "0".to_string()
        }
    })
}
