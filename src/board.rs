//! Board menu generation.
//! Every vendor gets a `BOARD_<VENDOR>` gate holding one choice of its boards,
//! followed by `source` lines for the boards that ship their own fragment.

use crate::config::Config;
use crate::constants::BOARD_TEMPLATE;
use crate::error::Result;
use crate::generator::write_document;
use crate::lister::Hierarchy;
use crate::renderer::TemplateRenderer;
use crate::symbol::{self, SymbolTable};
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardOption {
    pub name: String,
    pub symbol: String,
    pub label: String,
}

/// One vendor gate: the board choice plus the fragments to include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorBlock {
    pub name: String,
    pub gate: String,
    pub boards: Vec<BoardOption>,
    /// Root-relative paths of the board fragments found on disk
    pub fragments: Vec<String>,
}

/// Render context of the board document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardMenu {
    pub vendors: Vec<VendorBlock>,
    /// Symbols declared more than once in this document
    #[serde(skip)]
    pub collisions: Vec<String>,
}

impl BoardMenu {
    /// Builds the menu for `boards`, probing each board for a fragment.
    pub fn build(boards: &Hierarchy, config: &Config) -> Self {
        let mut symbols = SymbolTable::new();
        let vendors = boards
            .iter()
            .map(|(vendor, names)| {
                let gate = symbol::vendor_gate(vendor);
                symbols.insert(&gate);

                let options = names
                    .iter()
                    .map(|board| {
                        let option = BoardOption {
                            name: board.clone(),
                            symbol: symbol::board_target(board),
                            label: symbol::board_label(board),
                        };
                        symbols.insert(&option.symbol);
                        option
                    })
                    .collect();

                let fragments = names
                    .iter()
                    .filter(|board| config.fragment_path(vendor, board).is_file())
                    .map(|board| {
                        let source = config.fragment_source(vendor, board);
                        debug!("Including fragment {source}");
                        source
                    })
                    .collect();

                VendorBlock { name: vendor.clone(), gate, boards: options, fragments }
            })
            .collect();

        Self { vendors, collisions: symbols.into_collisions() }
    }

    pub fn render(&self, renderer: &dyn TemplateRenderer) -> Result<String> {
        renderer.render(BOARD_TEMPLATE, &serde_json::to_value(self)?)
    }
}

/// Renders the board document for `boards` and writes it to the board output file.
///
/// # Returns
/// * `Result<String>` - The document that was written
pub fn generate_board_menu(
    boards: &Hierarchy,
    config: &Config,
    renderer: &dyn TemplateRenderer,
) -> Result<String> {
    let document = BoardMenu::build(boards, config).render(renderer)?;
    write_document(config.board_output(), &document)?;
    Ok(document)
}
