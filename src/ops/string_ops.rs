//! `LOWER_CASE`, `UPPER_CASE`, `MAKE_C_IDENTIFIER`, `JOIN` (spec §4.3).

pub fn lower_case(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

pub fn upper_case(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_uppercase()).collect()
}

pub fn make_c_identifier(s: &str) -> String {
    let mut out: String = s
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false) {
        out.insert(0, '_');
    }
    if out.is_empty() {
        out.push('_');
    }
    out
}

pub fn join(list: &str, sep: &str) -> String {
    list.split(';').collect::<Vec<_>>().join(sep)
}
