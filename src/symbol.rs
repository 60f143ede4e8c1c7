//! Naming rules for the emitted menu symbols, labels and values.

use log::warn;
use std::collections::HashSet;

/// Gate guarding a vendor's board choice: `BOARD_<VENDOR>`.
pub fn vendor_gate(vendor: &str) -> String {
    format!("BOARD_{}", vendor.to_uppercase())
}

/// Option selecting a board: `TARGET_<BOARD>`.
pub fn board_target(board: &str) -> String {
    format!("TARGET_{}", board.to_uppercase())
}

pub fn board_label(board: &str) -> String {
    board.to_uppercase()
}

/// Option selecting an application kind: `APP_<KIND>`.
pub fn app_kind(kind: &str) -> String {
    format!("APP_{}", kind.to_uppercase())
}

/// Option selecting one application: `<KIND>_<NAME>`.
pub fn app_name(kind: &str, name: &str) -> String {
    format!("{}_{}", kind.to_uppercase(), name.to_uppercase())
}

pub fn app_label(kind: &str, name: &str) -> String {
    format!("{kind}_{name}")
}

/// Value of `APP_DIR` when the application is selected.
pub fn app_path(kind: &str, name: &str) -> String {
    format!("{kind}/{name}")
}

/// Escapes a value for a double-quoted menu string.
pub fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Tracks emitted symbols and warns about names that collide after uppercasing.
///
/// Collisions are reported, not rejected: keeping directory names distinct is
/// up to whoever lays out the trees.
#[derive(Debug, Default)]
pub struct SymbolTable {
    seen: HashSet<String>,
    reported: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `symbol`, returning `false` if it was already present.
    pub fn insert(&mut self, symbol: &str) -> bool {
        if self.seen.insert(symbol.to_string()) {
            return true;
        }
        if !self.reported.iter().any(|s| s == symbol) {
            warn!("Symbol {symbol} is defined more than once");
            self.reported.push(symbol.to_string());
        }
        false
    }

    /// Symbols seen more than once, in the order they first collided.
    pub fn collisions(&self) -> &[String] {
        &self.reported
    }

    pub fn into_collisions(self) -> Vec<String> {
        self.reported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_names() {
        assert_eq!(vendor_gate("acme"), "BOARD_ACME");
        assert_eq!(board_target("board1"), "TARGET_BOARD1");
        assert_eq!(board_label("armfly_stm32f407ig"), "ARMFLY_STM32F407IG");
    }

    #[test]
    fn test_app_names_keep_raw_case_in_labels() {
        assert_eq!(app_kind("Net"), "APP_NET");
        assert_eq!(app_name("Net", "tcp"), "NET_TCP");
        assert_eq!(app_label("Net", "tcp"), "Net_tcp");
        assert_eq!(app_path("Net", "tcp"), "Net/tcp");
    }

    #[test]
    fn test_uppercase_is_unicode_aware() {
        assert_eq!(board_target("straße"), "TARGET_STRASSE");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote(r#"a"b"#), r#"a\"b"#);
        assert_eq!(quote(r"a\b"), r"a\\b");
    }

    #[test]
    fn test_symbol_table_detects_collisions() {
        let mut table = SymbolTable::new();
        assert!(table.insert("TARGET_A"));
        assert!(table.insert("TARGET_B"));
        assert!(!table.insert("TARGET_A"));
        assert!(!table.insert("TARGET_A"));
        assert_eq!(table.collisions(), ["TARGET_A"]);
    }
}
