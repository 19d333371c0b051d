//! Integration tests for the repomap library and CLI

mod cli_contracts;
mod parse_help;
mod report_paging;
mod tree_determinism;
mod tree_structure;
