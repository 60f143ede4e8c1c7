//! Common constants used throughout kmenu.

/// Supported configuration file names, looked up in the project root
pub const CONFIG_FILES: [&str; 3] = ["kmenu.json", "kmenu.yml", "kmenu.yaml"];

/// Default directory holding the `vendor/board` tree
pub const BOARD_DIR: &str = "board";

/// Default directory holding the `kind/name` tree
pub const APP_DIR: &str = "app";

/// Default name of both the per-board fragment and the generated documents
pub const KCONFIG_FILE: &str = "Kconfig";

/// Name of the derived string option holding the selected application path
pub const APP_DIR_SYMBOL: &str = "APP_DIR";

pub const BOARD_TEMPLATE: &str = "board.Kconfig.j2";
pub const APP_TEMPLATE: &str = "app.Kconfig.j2";
