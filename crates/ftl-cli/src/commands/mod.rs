pub mod ast;
pub mod check;
pub mod fmt;
pub mod source_loader;

#[cfg(test)]
mod check_tests;
