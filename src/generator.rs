//! Orchestration of the two menu pipelines.
//! Each pipeline scans its tree, renders the document in memory, and replaces
//! the output file in a single write.

use crate::app::generate_app_menu;
use crate::board::generate_board_menu;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::lister::scan_hierarchy;
use crate::renderer::TemplateRenderer;
use log::{debug, error};
use std::fmt;
use std::path::{Path, PathBuf};

/// The generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Board,
    App,
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Menu::Board => write!(f, "board"),
            Menu::App => write!(f, "app"),
        }
    }
}

/// Truncates `path` and writes `document` to it.
///
/// A failure part way leaves whatever was written; the previous content is not restored.
pub fn write_document<P: AsRef<Path>>(path: P, document: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", document.len(), path.display());
    std::fs::write(path, document).map_err(|source| Error::WriteError {
        path: path.display().to_string(),
        source,
    })
}

/// Scans the tree for `menu` and writes its document.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written document
pub fn generate_menu(
    menu: Menu,
    config: &Config,
    renderer: &dyn TemplateRenderer,
) -> Result<PathBuf> {
    match menu {
        Menu::Board => {
            let boards = scan_hierarchy(config.board_root())?;
            generate_board_menu(&boards, config, renderer)?;
            Ok(config.board_output())
        }
        Menu::App => {
            let apps = scan_hierarchy(config.app_root())?;
            generate_app_menu(&apps, config, renderer)?;
            Ok(config.app_output())
        }
    }
}

/// Generates the board and the app documents.
///
/// The pipelines are independent: a failing one is logged and the other still runs.
///
/// # Errors
/// * `Error::GenerationFailed` naming every menu that was not written
pub fn generate_all(config: &Config, renderer: &dyn TemplateRenderer) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut failed = Vec::new();

    for menu in [Menu::Board, Menu::App] {
        match generate_menu(menu, config, renderer) {
            Ok(path) => written.push(path),
            Err(err) => {
                error!("Failed to generate the {menu} menu: {err}");
                failed.push(menu.to_string());
            }
        }
    }

    if failed.is_empty() {
        Ok(written)
    } else {
        Err(Error::GenerationFailed(failed))
    }
}
