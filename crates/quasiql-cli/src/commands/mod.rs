pub mod ast;
pub mod check;
pub mod config;
pub mod langs;
pub mod run_common;
pub mod transforms;

#[cfg(test)]
mod run_common_tests;
