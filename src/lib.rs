//! kmenu generates Kconfig menus for a firmware build.
//! It scans a `vendor/board` tree and a `kind/name` tree and writes one menu
//! definition file into each, for the configuration tool to consume.

/// Application menu generation (`app/Kconfig`)
pub mod app;

/// Board menu generation (`board/Kconfig`)
pub mod board;

/// Command-line interface module for the kmenu binary
pub mod cli;

/// Project layout configuration
/// Supports JSON and YAML formats (kmenu.json, kmenu.yml, kmenu.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for kmenu
pub mod error;

/// Runs both pipelines and writes the documents
pub mod generator;

/// Immediate-subdirectory listing for the board and app trees
pub mod lister;

pub mod logger;

/// MiniJinja rendering of the menu templates
pub mod renderer;

/// Symbol, label and value naming rules
pub mod symbol;
