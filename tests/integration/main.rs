//! Integration tests for the maxsetup binary

mod helpers;

mod cli_test;
mod color_test;
mod escape_test;
mod gradient_test;
mod run_test;
mod scaffold_test;
