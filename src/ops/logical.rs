//! `AND`, `OR`, `NOT`, `BOOL`, `IF`, `STREQUAL`, `IN_LIST` (spec §4.3).

use crate::error::EvalError;

fn as_bit(s: &str) -> Option<bool> {
    match s {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

/// CMake-style "off" literal recognition for `$<BOOL:...>`.
fn is_off(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    let upper = value.to_ascii_uppercase();
    matches!(upper.as_str(), "0" | "OFF" | "NO" | "FALSE" | "N" | "IGNORE" | "NOTFOUND")
        || upper.ends_with("-NOTFOUND")
}

pub fn eval_bool(params: &[String]) -> String {
    if is_off(&params[0]) {
        "0".to_string()
    } else {
        "1".to_string()
    }
}

/// Every parameter is evaluated and validated before a result is produced —
/// unlike a short-circuiting boolean `&&`, a malformed operand later in the
/// list is still reported even if an earlier one already decided the result.
pub fn eval_and(identifier: &str, params: &[String]) -> Result<String, EvalError> {
    let mut saw_zero = false;
    for p in params {
        match as_bit(p) {
            Some(false) => saw_zero = true,
            Some(true) => {}
            None => {
                return Err(EvalError::InvalidOperand {
                    identifier: identifier.to_string(),
                    value: p.clone(),
                })
            }
        }
    }
    Ok(if saw_zero { "0" } else { "1" }.to_string())
}

pub fn eval_or(identifier: &str, params: &[String]) -> Result<String, EvalError> {
    let mut saw_one = false;
    for p in params {
        match as_bit(p) {
            Some(true) => saw_one = true,
            Some(false) => {}
            None => {
                return Err(EvalError::InvalidOperand {
                    identifier: identifier.to_string(),
                    value: p.clone(),
                })
            }
        }
    }
    Ok(if saw_one { "1" } else { "0" }.to_string())
}

pub fn eval_not(params: &[String]) -> Result<String, EvalError> {
    match as_bit(&params[0]) {
        Some(b) => Ok(if b { "0" } else { "1" }.to_string()),
        None => Err(EvalError::InvalidOperand {
            identifier: "NOT".to_string(),
            value: params[0].clone(),
        }),
    }
}

pub fn eval_if(params: &[String]) -> Result<String, EvalError> {
    match as_bit(&params[0]) {
        Some(true) => Ok(params[1].clone()),
        Some(false) => Ok(params[2].clone()),
        None => Err(EvalError::InvalidOperand {
            identifier: "IF".to_string(),
            value: params[0].clone(),
        }),
    }
}

pub fn eval_strequal(params: &[String]) -> String {
    if params[0] == params[1] {
        "1".to_string()
    } else {
        "0".to_string()
    }
}

pub fn eval_in_list(params: &[String]) -> String {
    let needle = &params[0];
    if params[1].split(';').any(|item| item == needle) {
        "1".to_string()
    } else {
        "0".to_string()
    }
}
