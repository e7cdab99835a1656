use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;

use famcount_matrix::{
    CountingPolicy, FamcountConfig, MatrixOptions, OutputOptions, SpeciesOrder, parse_delimiter,
    run_family_matrix,
};

use crate::logging::QUIET_ARG;

///
/// Resolve the options of a run: built-in defaults, then the config file, then flags.
///
pub fn resolve_options(matches: &ArgMatches) -> Result<(MatrixOptions, OutputOptions)> {
    let defaults = (MatrixOptions::default(), OutputOptions::default());

    let (mut options, mut outputs) = match matches.get_one::<String>("config") {
        Some(config) => {
            let config = FamcountConfig::try_from(Path::new(config))
                .with_context(|| format!("Failed to load config file: {}", config))?;
            config.apply(defaults.0, defaults.1)?
        }
        None => defaults,
    };

    if let Some(output) = matches.get_one::<String>("output") {
        outputs.output = PathBuf::from(output);
    }

    if let Some(audit) = matches.get_one::<String>("audit-unknown") {
        outputs = OutputOptions::new(outputs.output, audit);
    }

    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        options.delimiter = parse_delimiter(delimiter)?;
    }

    if matches.get_flag("keep-version") {
        options.keep_version = true;
    }

    if matches.get_flag("count-occurrences") {
        options.counting_policy = CountingPolicy::Occurrences;
    }

    if let Some(order) = matches.get_one::<String>("species-order") {
        options.species_order = SpeciesOrder::from_str(order)?;
    }

    options.show_progress = !matches.get_flag(QUIET_ARG);

    Ok((options, outputs))
}

pub fn run_matrix(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to an annotation file is required.");

    let (options, outputs) = resolve_options(matches)?;

    run_family_matrix(input, &options, &outputs)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::matrix::cli::create_matrix_cli;

    fn resolve(args: &[&str]) -> (MatrixOptions, OutputOptions) {
        let matches = create_matrix_cli()
            .try_get_matches_from(std::iter::once("famcount").chain(args.iter().copied()))
            .unwrap();
        resolve_options(&matches).unwrap()
    }

    #[rstest]
    fn test_defaults() {
        let (options, outputs) = resolve(&["input.txt"]);

        assert_eq!(options, MatrixOptions::default().with_progress(true));
        assert_eq!(outputs, OutputOptions::default());
    }

    #[rstest]
    fn test_flags() {
        let (options, outputs) = resolve(&[
            "input.txt",
            "-o",
            "out.tsv.gz",
            "--delimiter",
            "tab",
            "--keep-version",
            "--count-occurrences",
            "--species-order",
            "input",
            "--audit-unknown",
            "",
            "-q",
        ]);

        assert_eq!(options.delimiter, b'\t');
        assert_eq!(options.keep_version, true);
        assert_eq!(options.counting_policy, CountingPolicy::Occurrences);
        assert_eq!(options.species_order, SpeciesOrder::Input);
        assert_eq!(options.show_progress, false);
        assert_eq!(outputs, OutputOptions::new("out.tsv.gz", ""));
    }

    #[rstest]
    fn test_flags_override_config_file() {
        let (options, outputs) = resolve(&[
            "input.txt",
            "--config",
            "../tests/data/famcount/config.toml",
            "--species-order",
            "alpha",
            "--audit-unknown",
            "audit.tsv",
        ]);

        // from the config file
        assert_eq!(options.delimiter, b'\t');
        assert_eq!(options.counting_policy, CountingPolicy::Occurrences);
        assert_eq!(outputs.output, PathBuf::from("matrix.tsv.gz"));
        // from the flags
        assert_eq!(options.species_order, SpeciesOrder::Alpha);
        assert_eq!(outputs.audit, Some(PathBuf::from("audit.tsv")));
    }

    #[rstest]
    fn test_bad_delimiter_is_an_error() {
        let matches = create_matrix_cli()
            .try_get_matches_from(["famcount", "input.txt", "--delimiter", "ab"])
            .unwrap();
        assert!(resolve_options(&matches).is_err());
    }

    #[rstest]
    fn test_unknown_species_order_rejected_by_parser() {
        let result =
            create_matrix_cli().try_get_matches_from(["famcount", "input.txt", "--species-order", "zigzag"]);
        assert!(result.is_err());
    }
}
