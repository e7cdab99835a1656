use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use fxhash::FxHashMap;

use famcount_core::models::FamilyId;
use famcount_core::utils::get_dynamic_writer;

use crate::aggregate::SpeciesCounts;
use crate::consts::SPECIES_COLUMN;
use crate::counts::CountMatrix;
use crate::errors::MatrixResult;
use crate::modes::SpeciesOrder;

///
/// Collects per-species count tables and the union of all families seen.
///
/// Species keep the position of their first insertion. Inserting a species again
/// replaces its table, but families it contributed earlier stay in the universe.
///
#[derive(Debug, Clone, Default)]
pub struct FamilyMatrixBuilder {
    species: Vec<(String, SpeciesCounts)>,
    index: FxHashMap<String, usize>,
    universe: BTreeSet<FamilyId>,
}

impl FamilyMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Add the count table of a species. Returns `true` when an earlier table for
    /// the same species was replaced.
    ///
    pub fn insert(&mut self, species: String, counts: SpeciesCounts) -> bool {
        self.universe.extend(counts.families().cloned());

        match self.index.get(&species) {
            Some(&idx) => {
                self.species[idx].1 = counts;
                true
            }
            None => {
                self.index.insert(species.clone(), self.species.len());
                self.species.push((species, counts));
                false
            }
        }
    }

    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    pub fn n_families(&self) -> usize {
        self.universe.len()
    }

    /// Families seen so far, in column order.
    pub fn universe(&self) -> impl Iterator<Item = &FamilyId> {
        self.universe.iter()
    }

    ///
    /// Reconcile every species table against the family universe.
    ///
    /// # Arguments
    /// - order: row ordering of the species
    pub fn build(&self, order: SpeciesOrder) -> FamilyMatrix {
        let mut rows: Vec<usize> = (0..self.species.len()).collect();
        if order == SpeciesOrder::Alpha {
            rows.sort_by(|&a, &b| self.species[a].0.cmp(&self.species[b].0));
        }

        let families: Vec<FamilyId> = self.universe.iter().cloned().collect();
        let columns: FxHashMap<&FamilyId, usize> = families
            .iter()
            .enumerate()
            .map(|(col, family)| (family, col))
            .collect();

        let mut counts: CountMatrix<u32> = CountMatrix::new(rows.len(), families.len());
        let mut species: Vec<String> = Vec::with_capacity(rows.len());

        for (row, &idx) in rows.iter().enumerate() {
            let (label, table) = &self.species[idx];
            for (family, count) in table.iter() {
                if let Some(&col) = columns.get(family) {
                    // in bounds: both dimensions come from the loops above
                    let _ = counts.set(row, col, count);
                }
            }
            species.push(label.clone());
        }

        FamilyMatrix {
            species,
            families,
            counts,
        }
    }
}

///
/// Dense species x family count matrix with row and column labels.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMatrix {
    species: Vec<String>,
    families: Vec<FamilyId>,
    counts: CountMatrix<u32>,
}

impl FamilyMatrix {
    /// Row labels.
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Column labels, sorted.
    pub fn families(&self) -> &[FamilyId] {
        &self.families
    }

    pub fn counts(&self) -> &CountMatrix<u32> {
        &self.counts
    }

    ///
    /// Count of a family for a species, `None` if either label is not in the matrix.
    ///
    pub fn count(&self, species: &str, family: &FamilyId) -> Option<u32> {
        let row = self.species.iter().position(|s| s == species)?;
        let col = self.families.binary_search(family).ok()?;
        self.counts.get(row, col).copied()
    }

    pub fn header(&self) -> Vec<String> {
        std::iter::once(SPECIES_COLUMN.to_string())
            .chain(self.families.iter().map(|f| f.to_string()))
            .collect()
    }

    ///
    /// Write the matrix as delimited text: a header row, then one row per species.
    ///
    /// Rows end with `\n`; fields are only quoted when they contain the delimiter,
    /// a quote or a line break.
    ///
    pub fn write<W: Write>(&self, writer: W, delimiter: u8) -> MatrixResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        wtr.write_record(self.header())?;

        for (row, species) in self.species.iter().enumerate() {
            let values = self.counts.row(row).unwrap_or(&[]);
            let record = std::iter::once(species.clone())
                .chain(values.iter().map(|count| count.to_string()));
            wtr.write_record(record)?;
        }

        wtr.flush()?;

        Ok(())
    }

    ///
    /// Write the matrix to disk, gzip'd when the path ends with `.gz`, or to stdout
    /// when the path is `-`.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - delimiter: column delimiter
    pub fn write_to_file<T: AsRef<Path>>(&self, path: T, delimiter: u8) -> Result<()> {
        let path = path.as_ref();
        let mut writer = get_dynamic_writer(path)?;

        self.write(&mut writer, delimiter)
            .with_context(|| format!("Failed to write count matrix to {:?}", path))?;
        writer
            .finish()
            .with_context(|| format!("Failed to finish writing {:?}", path))?;

        Ok(())
    }
}
