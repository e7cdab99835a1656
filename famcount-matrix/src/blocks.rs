use std::io::{self, BufRead, Lines};

///
/// One `>species` header and the record lines that follow it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesBlock {
    pub species: String,
    pub lines: Vec<String>,
}

impl SpeciesBlock {
    pub fn new(species: String) -> Self {
        SpeciesBlock {
            species,
            lines: Vec::new(),
        }
    }
}

///
/// Extract the species label from a header line.
///
/// Returns `None` when the line is not a header. The label is everything after the
/// leading `>` up to the first `.`, with surrounding whitespace removed, so
/// `>Homo_sapiens.GRCh38 ` becomes `Homo_sapiens`.
///
pub fn parse_species_header(line: &str) -> Option<String> {
    let rest = line.strip_prefix('>')?.trim();
    let label = match rest.split_once('.') {
        Some((label, _)) => label,
        None => rest,
    };
    Some(label.trim().to_string())
}

///
/// Lazily groups the lines of a reader into [SpeciesBlock]s.
///
/// Blank lines are dropped, lines before the first header are discarded, and the
/// last block is emitted once the reader is exhausted. A read error is yielded once,
/// after which the stream is finished.
///
pub struct SpeciesBlocks<R> {
    lines: Lines<R>,
    current: Option<SpeciesBlock>,
    finished: bool,
}

impl<R: BufRead> SpeciesBlocks<R> {
    pub fn new(reader: R) -> Self {
        SpeciesBlocks {
            lines: reader.lines(),
            current: None,
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for SpeciesBlocks<R> {
    type Item = io::Result<SpeciesBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    if let Some(species) = parse_species_header(&line) {
                        if let Some(done) = self.current.replace(SpeciesBlock::new(species)) {
                            return Some(Ok(done));
                        }
                    } else if let Some(block) = self.current.as_mut() {
                        block.lines.push(line);
                    }
                    // no header seen yet, so the line belongs to no species
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err));
                }
                None => {
                    self.finished = true;
                    return self.current.take().map(Ok);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn collect_blocks(input: &str) -> Vec<SpeciesBlock> {
        SpeciesBlocks::new(Cursor::new(input.to_string()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    fn block(species: &str, lines: &[&str]) -> SpeciesBlock {
        SpeciesBlock {
            species: species.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[rstest]
    #[case(">SP1.chr1", Some("SP1"))]
    #[case(">SP1", Some("SP1"))]
    #[case(">  Alpha .v2 ", Some("Alpha"))]
    #[case(">a.b.c", Some("a"))]
    #[case(">", Some(""))]
    #[case("g1 p1 PF00001", None)]
    #[case(" >SP1", None)]
    fn test_parse_species_header(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_species_header(line), expected.map(|s| s.to_string()));
    }

    #[rstest]
    fn test_blocks_in_input_order() {
        let blocks = collect_blocks(">SP1.chr1\ng1 p1 PF00069\ng2 p1 PF00002\n>SP2.x\ng3 p3 PF00002\n");
        assert_eq!(
            blocks,
            vec![
                block("SP1", &["g1 p1 PF00069", "g2 p1 PF00002"]),
                block("SP2", &["g3 p3 PF00002"]),
            ]
        );
    }

    #[rstest]
    fn test_blank_lines_never_reach_a_block() {
        let blocks = collect_blocks("\n>SP1\n\n   \ng1 p1 PF00069\n\t\ng2 p2 PF00069\n\n");
        assert_eq!(blocks, vec![block("SP1", &["g1 p1 PF00069", "g2 p2 PF00069"])]);
    }

    #[rstest]
    fn test_lines_before_first_header_are_dropped() {
        let blocks = collect_blocks("orphan p0 PF00001\n>SP1\ng1 p1 PF00002\n");
        assert_eq!(blocks, vec![block("SP1", &["g1 p1 PF00002"])]);
    }

    #[rstest]
    fn test_last_block_flushed_without_trailing_newline() {
        let blocks = collect_blocks(">SP1\ng1 p1 PF00002\n>SP2\ng2 p2 PF00003");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], block("SP2", &["g2 p2 PF00003"]));
    }

    #[rstest]
    fn test_empty_blocks_and_repeated_headers() {
        let blocks = collect_blocks(">SP1\n>SP2\ng1 p1 PF00002\n>SP1\n");
        assert_eq!(
            blocks,
            vec![
                block("SP1", &[]),
                block("SP2", &["g1 p1 PF00002"]),
                block("SP1", &[]),
            ]
        );
    }

    #[rstest]
    fn test_crlf_line_endings() {
        let blocks = collect_blocks(">SP1.a\r\ng1 p1 PF00002\r\n\r\n");
        assert_eq!(blocks, vec![block("SP1", &["g1 p1 PF00002"])]);
    }

    #[rstest]
    fn test_no_header_yields_nothing() {
        assert!(collect_blocks("g1 p1 PF00002\n\n").is_empty());
        assert!(collect_blocks("").is_empty());
    }

    #[rstest]
    fn test_read_error_ends_the_stream() {
        // invalid UTF-8 in the second block
        let mut bytes = b">SP1\ng1 p1 PF00002\n>SP2\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);

        let mut blocks = SpeciesBlocks::new(Cursor::new(bytes));
        assert_eq!(blocks.next().unwrap().unwrap(), block("SP1", &["g1 p1 PF00002"]));
        assert!(blocks.next().unwrap().is_err());
        assert!(blocks.next().is_none());
    }
}
