//! kmenu's entry point.
//! Parses arguments, loads the project layout and generates both menus.

use log::info;

use kmenu::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Result},
    generator::generate_all,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the layout from the project root
/// 2. Generates the board menu
/// 3. Generates the app menu
fn run(args: Args) -> Result<()> {
    let config = get_config(&args.root)?;
    let renderer = MiniJinjaRenderer::new()?;

    for path in generate_all(&config, &renderer)? {
        info!("Generated: '{}'", path.display());
    }
    Ok(())
}
