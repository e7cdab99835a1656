mod logging;
mod matrix;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "famcount";
}

fn build_parser() -> Command {
    matrix::cli::create_matrix_cli()
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Build a species x Pfam family count matrix from >species annotation blocks.")
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    logging::init_logging(&matches)?;

    matrix::handlers::run_matrix(&matches)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        build_parser().debug_assert();
    }
}
