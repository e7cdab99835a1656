use std::io::BufRead;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use famcount_core::models::TokenClassifier;
use famcount_core::utils::get_dynamic_reader_w_stdin;

use crate::aggregate::aggregate_block;
use crate::blocks::SpeciesBlocks;
use crate::ledger::UnknownTokenLedger;
use crate::matrix::{FamilyMatrix, FamilyMatrixBuilder};
use crate::options::{MatrixOptions, OutputOptions};

///
/// Everything produced by one pass over an annotation file.
///
#[derive(Debug, Clone)]
pub struct MatrixBuild {
    pub matrix: FamilyMatrix,
    pub ledger: UnknownTokenLedger,
    pub blocks: usize,
    pub records: usize,
    pub skipped_records: usize,
}

fn make_spinner(show_progress: bool) -> Result<ProgressBar> {
    if !show_progress {
        return Ok(ProgressBar::hidden());
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Processing annotation blocks...");

    Ok(spinner)
}

///
/// Read `>species` blocks from a reader and build the species x family matrix.
///
/// The whole input is consumed before the matrix is assembled, since the column
/// set is only known once every species has been seen.
///
/// # Arguments
/// - reader: annotation input
/// - options: run-wide options
pub fn build_family_matrix<R: BufRead>(reader: R, options: &MatrixOptions) -> Result<MatrixBuild> {
    let classifier = TokenClassifier::new(options.keep_version);
    let mut builder = FamilyMatrixBuilder::new();
    let mut ledger = UnknownTokenLedger::new();

    let spinner = make_spinner(options.show_progress)?;

    let mut blocks: usize = 0;
    let mut records: usize = 0;
    let mut skipped_records: usize = 0;

    for block in SpeciesBlocks::new(reader) {
        let block = block.context("Failed to read annotation input")?;
        let aggregation = aggregate_block(&block, &classifier, options.counting_policy);

        debug!(
            "{}: {} records, {} families, {} unknown tokens",
            block.species,
            block.lines.len(),
            aggregation.counts.len(),
            aggregation.unknown_tokens.len()
        );

        blocks += 1;
        records += block.lines.len();
        skipped_records += aggregation.skipped_lines;
        spinner.inc(block.lines.len() as u64);

        ledger.extend(aggregation.unknown_tokens);
        if builder.insert(block.species.clone(), aggregation.counts) {
            debug!(
                "Species {} appeared again, replacing its earlier counts",
                block.species
            );
        }

        if blocks % 1_000 == 0 {
            spinner.set_message(format!("Processed {} species blocks", blocks));
        }
    }

    spinner.finish_and_clear();

    let matrix = builder.build(options.species_order);

    info!(
        "Read {} blocks ({} records, {} skipped): {} species x {} families, {} unknown tokens",
        blocks,
        records,
        skipped_records,
        matrix.species().len(),
        matrix.families().len(),
        ledger.len()
    );

    Ok(MatrixBuild {
        matrix,
        ledger,
        blocks,
        records,
        skipped_records,
    })
}

///
/// Build the matrix from a file path (gzip'd when it ends with `.gz`) or `-` for stdin.
///
pub fn build_family_matrix_from_file(input: &str, options: &MatrixOptions) -> Result<MatrixBuild> {
    let reader = get_dynamic_reader_w_stdin(input)?;
    build_family_matrix(reader, options)
        .with_context(|| format!("Failed to build count matrix from {}", input))
}

///
/// Write the matrix, and the unknown-token audit if one is configured and there is
/// anything to report.
///
pub fn write_outputs(build: &MatrixBuild, outputs: &OutputOptions, delimiter: u8) -> Result<()> {
    build.matrix.write_to_file(&outputs.output, delimiter)?;
    info!("Wrote count matrix to {:?}", outputs.output);

    match &outputs.audit {
        Some(audit) if !build.ledger.is_empty() => {
            build
                .ledger
                .write_audit_file(audit)
                .with_context(|| format!("Failed to write unknown token audit to {:?}", audit))?;
            info!(
                "Wrote {} unknown tokens ({} occurrences) to {:?}",
                build.ledger.len(),
                build.ledger.total(),
                audit
            );
        }
        Some(_) => debug!("No unknown tokens, skipping audit file"),
        None => debug!("Unknown token audit disabled"),
    }

    Ok(())
}

///
/// Full run: read the input, build the matrix, write the outputs.
///
/// # Arguments
/// - input: path to the annotation file, or `-` for stdin
/// - options: run-wide options
/// - outputs: where to write the matrix and the audit
pub fn run_family_matrix(
    input: &str,
    options: &MatrixOptions,
    outputs: &OutputOptions,
) -> Result<MatrixBuild> {
    let build = build_family_matrix_from_file(input, options)?;
    write_outputs(&build, outputs, options.delimiter)?;
    Ok(build)
}
