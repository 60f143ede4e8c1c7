//! Application menu generation.
//! Emits a choice of application kinds, one dependent choice per kind, and the
//! `APP_DIR` string option mapping the selected application to its directory.

use crate::config::Config;
use crate::constants::{APP_DIR_SYMBOL, APP_TEMPLATE};
use crate::error::Result;
use crate::generator::write_document;
use crate::lister::Hierarchy;
use crate::renderer::TemplateRenderer;
use crate::symbol::{self, SymbolTable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppOption {
    pub name: String,
    pub symbol: String,
    pub label: String,
}

/// A kind: its option in the top-level choice and its own choice of applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindBlock {
    pub name: String,
    pub symbol: String,
    pub apps: Vec<AppOption>,
}

/// `default "<value>" if <condition>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionalDefault {
    pub value: String,
    pub condition: String,
}

/// The derived string option; the first default whose condition holds wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedString {
    pub symbol: String,
    pub defaults: Vec<ConditionalDefault>,
}

/// Render context of the app document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppMenu {
    pub kinds: Vec<KindBlock>,
    pub app_dir: DerivedString,
    /// Symbols declared more than once in this document
    #[serde(skip)]
    pub collisions: Vec<String>,
}

impl AppMenu {
    pub fn build(apps: &Hierarchy) -> Self {
        let mut symbols = SymbolTable::new();
        symbols.insert(APP_DIR_SYMBOL);
        let kinds: Vec<KindBlock> = apps
            .iter()
            .map(|(kind, names)| {
                let block = KindBlock {
                    name: kind.clone(),
                    symbol: symbol::app_kind(kind),
                    apps: names
                        .iter()
                        .map(|name| AppOption {
                            name: name.clone(),
                            symbol: symbol::app_name(kind, name),
                            label: symbol::app_label(kind, name),
                        })
                        .collect(),
                };
                symbols.insert(&block.symbol);
                for app in &block.apps {
                    symbols.insert(&app.symbol);
                }
                block
            })
            .collect();

        let defaults = kinds
            .iter()
            .flat_map(|kind| {
                kind.apps.iter().map(move |app| ConditionalDefault {
                    value: symbol::app_path(&kind.name, &app.name),
                    condition: app.symbol.clone(),
                })
            })
            .collect();

        Self {
            kinds,
            app_dir: DerivedString { symbol: APP_DIR_SYMBOL.to_string(), defaults },
            collisions: symbols.into_collisions(),
        }
    }

    pub fn render(&self, renderer: &dyn TemplateRenderer) -> Result<String> {
        renderer.render(APP_TEMPLATE, &serde_json::to_value(self)?)
    }
}

/// Renders the app document for `apps` and writes it to the app output file.
///
/// # Returns
/// * `Result<String>` - The document that was written
pub fn generate_app_menu(
    apps: &Hierarchy,
    config: &Config,
    renderer: &dyn TemplateRenderer,
) -> Result<String> {
    let document = AppMenu::build(apps).render(renderer)?;
    write_document(config.app_output(), &document)?;
    Ok(document)
}
