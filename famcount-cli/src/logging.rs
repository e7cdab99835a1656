use anyhow::{Context, Result};
use clap::ArgMatches;
use log::LevelFilter;

pub const VERBOSE_ARG: &str = "verbose";
pub const QUIET_ARG: &str = "quiet";

///
/// Map `-q` / `-v` / `-vv` onto a log level. Info is the default.
///
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

///
/// Install the stderr logger. `RUST_LOG` takes precedence over the command line.
///
pub fn init_logging(matches: &ArgMatches) -> Result<()> {
    let verbosity = matches.get_count(VERBOSE_ARG);
    let quiet = matches.get_flag(QUIET_ARG);

    env_logger::Builder::new()
        .filter_level(level_filter(verbosity, quiet))
        .parse_default_env()
        .try_init()
        .context("Could not initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0, false, LevelFilter::Info)]
    #[case(1, false, LevelFilter::Debug)]
    #[case(3, false, LevelFilter::Trace)]
    #[case(2, true, LevelFilter::Error)]
    fn test_level_filter(#[case] verbosity: u8, #[case] quiet: bool, #[case] expected: LevelFilter) {
        assert_eq!(level_filter(verbosity, quiet), expected);
    }
}
