//! `C_COMPILER_ID`, `CXX_COMPILER_ID`, `PLATFORM_ID`, `C_COMPILER_VERSION`,
//! `CXX_COMPILER_VERSION` (spec §4.4).

use crate::context::EvalContext;
use crate::error::EvalError;
use crate::numeric::compare_versions;
use crate::policy::PolicyStatus;

fn is_identifier(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Shared logic for `C_COMPILER_ID`/`CXX_COMPILER_ID`/`PLATFORM_ID`: with no
/// parameter, returns the current value; with one, compares it, falling back
/// to a policy-gated case-insensitive match.
pub fn compiler_or_platform_query(
    ctx: &mut EvalContext,
    definition_key: &str,
    identifier: &str,
    param: Option<&str>,
    policy: &str,
) -> Result<String, EvalError> {
    if ctx.head_target.is_none() {
        return Err(EvalError::RequiresBinaryTarget(identifier.to_string()));
    }
    let current = ctx.build.get_safe_definition(definition_key).unwrap_or_default();

    let Some(p) = param else {
        return Ok(current);
    };
    if !is_identifier(p) {
        return Err(EvalError::InvalidOperand {
            identifier: identifier.to_string(),
            value: p.to_string(),
        });
    }
    if current == p {
        return Ok("1".to_string());
    }
    if !current.eq_ignore_ascii_case(p) {
        return Ok("0".to_string());
    }

    let status = ctx.build.policy_status(policy).unwrap_or(PolicyStatus::Warn);
    Ok(match status {
        PolicyStatus::New => "0".to_string(),
        PolicyStatus::Old => "1".to_string(),
        PolicyStatus::Warn => {
            ctx.diagnostics.report_policy_warning(
                policy,
                &format!("{identifier} matched \"{p}\" only case-insensitively; this will become a mismatch"),
            );
            "1".to_string()
        }
    })
}

pub fn compiler_version_query(
    ctx: &mut EvalContext,
    definition_key: &str,
    identifier: &str,
    param: Option<&str>,
) -> Result<String, EvalError> {
    if ctx.head_target.is_none() {
        return Err(EvalError::RequiresBinaryTarget(identifier.to_string()));
    }
    let current = ctx.build.get_safe_definition(definition_key).unwrap_or_default();

    let Some(p) = param else {
        return Ok(current);
    };
    if !p.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(EvalError::InvalidOperand {
            identifier: identifier.to_string(),
            value: p.to_string(),
        });
    }
    let equal = compare_versions(&current, p)? == std::cmp::Ordering::Equal;
    Ok(if equal { "1".to_string() } else { "0".to_string() })
}
