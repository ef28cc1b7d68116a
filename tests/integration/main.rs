//! Integration tests for remind

mod cli_test;
mod config_test;
mod helpers;
