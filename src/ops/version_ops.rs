//! `VERSION_LESS`, `VERSION_GREATER`, `VERSION_EQUAL`, `VERSION_LESS_EQUAL`,
//! `VERSION_GREATER_EQUAL` (spec §4.4).

use std::cmp::Ordering;

use crate::error::EvalError;
use crate::numeric::compare_versions;

fn bit(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}

pub fn version_less(a: &str, b: &str) -> Result<String, EvalError> {
    Ok(bit(compare_versions(a, b)? == Ordering::Less))
}

pub fn version_greater(a: &str, b: &str) -> Result<String, EvalError> {
    Ok(bit(compare_versions(a, b)? == Ordering::Greater))
}

pub fn version_equal(a: &str, b: &str) -> Result<String, EvalError> {
    Ok(bit(compare_versions(a, b)? == Ordering::Equal))
}

pub fn version_less_equal(a: &str, b: &str) -> Result<String, EvalError> {
    Ok(bit(compare_versions(a, b)? != Ordering::Greater))
}

pub fn version_greater_equal(a: &str, b: &str) -> Result<String, EvalError> {
    Ok(bit(compare_versions(a, b)? != Ordering::Less))
}
