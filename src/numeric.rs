//! Integer and version parsing shared by `EQUAL` and the `VERSION_*` family
//! (spec §4.3/§4.4).

use std::cmp::Ordering;

use crate::error::EvalError;

/// Parse a signed integer literal: optional `+`/`-`, then a `0x`/`0X` (hex),
/// `0b`/`0B` (binary), leading-zero (octal), or plain decimal body.
pub fn parse_integer(raw: &str) -> Result<i64, EvalError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EvalError::MalformedInteger(raw.to_string()));
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (radix, digits) = if let Some(d) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        (16, d)
    } else if let Some(d) = rest.strip_prefix("0b").or_else(|| rest.strip_prefix("0B")) {
        (2, d)
    } else if rest.len() > 1 && rest.starts_with('0') {
        (8, &rest[1..])
    } else {
        (10, rest)
    };

    if digits.is_empty() {
        return Err(EvalError::MalformedInteger(raw.to_string()));
    }

    let value =
        i64::from_str_radix(digits, radix).map_err(|_| EvalError::MalformedInteger(raw.to_string()))?;
    Ok(if negative { -value } else { value })
}

pub fn eval_equal(params: &[String]) -> Result<String, EvalError> {
    let a = parse_integer(&params[0])?;
    let b = parse_integer(&params[1])?;
    Ok(if a == b { "1".to_string() } else { "0".to_string() })
}

fn parse_version_components(raw: &str) -> Result<Vec<u64>, EvalError> {
    raw.split('.')
        .map(|c| c.parse::<u64>().map_err(|_| EvalError::MalformedVersion(raw.to_string())))
        .collect()
}

/// Compare two dot-separated version strings component-wise, treating a
/// missing trailing component as `0` (spec §4.4).
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, EvalError> {
    let pa = parse_version_components(a)?;
    let pb = parse_version_components(b)?;
    let len = pa.len().max(pb.len());
    for i in 0..len {
        let x = pa.get(i).copied().unwrap_or(0);
        let y = pb.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return Ok(other),
        }
    }
    Ok(Ordering::Equal)
}
