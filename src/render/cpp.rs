//! C++ `std::unordered_map` initializer entries.

use crate::render::Syntax;

pub struct CppSyntax;

impl Syntax for CppSyntax {
    fn qualify(&self, enum_name: &str, constant: &str) -> String {
        format!("{}::{}", enum_name, constant)
    }

    fn entry(&self, key: &str, value: &str) -> String {
        format!("{{{}, {}}}", key, value)
    }

    fn final_comma(&self) -> bool {
        true
    }
}
