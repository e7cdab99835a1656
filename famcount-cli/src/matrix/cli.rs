use clap::{Arg, ArgAction, Command, arg};

use famcount_matrix::consts::{DEFAULT_AUDIT_OUT, DEFAULT_OUT};

use crate::logging::{QUIET_ARG, VERBOSE_ARG};

pub fn create_matrix_cli() -> Command {
    Command::new(crate::consts::BIN_NAME)
        .author("famcount developers")
        .arg(
            Arg::new("input")
                .required(true)
                .help("Annotation file with >species blocks (.gz ok, - for stdin)"),
        )
        .arg(
            arg!(-o --output <output>)
                .required(false)
                .help(format!("Output matrix (.gz ok, - for stdout) [default: {DEFAULT_OUT}]")),
        )
        .arg(
            arg!(--delimiter <delimiter>)
                .required(false)
                .help("Column delimiter, a single character or `tab` [default: ,]"),
        )
        .arg(
            arg!(--"keep-version")
                .help("Keep Pfam versions (PF00069.26) instead of collapsing to PF00069")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--"count-occurrences")
                .help("Count every family occurrence instead of unique proteins per family")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(--"species-order" <order>)
                .required(false)
                .value_parser(["alpha", "input"])
                .help("Row order of the species [default: alpha]"),
        )
        .arg(
            arg!(--"audit-unknown" <audit>)
                .required(false)
                .help(format!(
                    "Where to write unrecognised family tokens and their counts, empty to disable [default: {DEFAULT_AUDIT_OUT}]"
                )),
        )
        .arg(
            arg!(-c --config <config>)
                .required(false)
                .help("TOML file with default options; flags take precedence"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("More logging (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new(QUIET_ARG)
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with(VERBOSE_ARG)
                .help("Only log errors and hide the progress spinner"),
        )
}
