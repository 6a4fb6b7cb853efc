//! Java `Map.ofEntries(...)` arguments.

use crate::render::Syntax;

pub struct JavaSyntax;

impl Syntax for JavaSyntax {
    fn qualify(&self, enum_name: &str, constant: &str) -> String {
        format!("{}.{}", enum_name, constant)
    }

    fn entry(&self, key: &str, value: &str) -> String {
        format!("Map.entry({}, {})", key, value)
    }

    // Map.ofEntries(...) is a call; a trailing comma would not compile.
    fn final_comma(&self) -> bool {
        false
    }
}

/// `List.of(A.class, B.class)` in declaration order.
pub fn class_list(types: &[String]) -> String {
    let classes: Vec<String> = types.iter().map(|t| format!("{}.class", t)).collect();
    format!("List.of({})", classes.join(", "))
}
