//! End-to-end tests for the `zomlc` CLI.
//!
//! These drive the built `zomlc` binary against fixture files under
//! `fixtures/`, exercising the parse-only pipeline from the outside: CLI
//! flag handling, exit codes, and diagnostic output.

mod cli_tests;
mod compilation_tests;
