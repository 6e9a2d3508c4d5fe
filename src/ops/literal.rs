//! `ANGLE-R`, `COMMA`, `SEMICOLON`: zero-parameter nodes that emit a literal
//! character otherwise reserved by the generator-expression grammar.

pub fn angle_r() -> String {
    ">".to_string()
}

pub fn comma() -> String {
    ",".to_string()
}

pub fn semicolon() -> String {
    ";".to_string()
}
