/// Describes CIGAR format.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
/// * See http://drive5.com/usearch/manual/cigar.html
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CigarFormat {
    /// Match: 'M', Insertion: 'I', Deletion: 'D', Mismatch: 'M'.
    Standard,
    #[default]
    /// Match: '=', Insertion: 'I', Deletion: 'D', Mismatch: 'X'.
    Extended,
}

/// One column of an alignment.
///
/// The first sequence is treated as the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Match
    Match,
    /// Symbol of the second sequence aligned to a gap in the first.
    ///
    /// ### Example:
    /// * First:  `A-CG`
    /// * Second: `ATCG`
    Insert,
    /// Symbol of the first sequence aligned to a gap in the second.
    ///
    /// ### Example:
    /// * First:  `ATCG`
    /// * Second: `A-CG`
    Delete,
    /// Mismatch
    Mismatch,
}

impl EditOp {
    /// Diagonal operation for aligning `a` with `b`.
    pub fn classify(a: char, b: char) -> Self {
        if a == b {
            EditOp::Match
        } else {
            EditOp::Mismatch
        }
    }

    fn symbol(self, format: CigarFormat) -> char {
        match (self, format) {
            (EditOp::Match | EditOp::Mismatch, CigarFormat::Standard) => 'M',
            (EditOp::Match, CigarFormat::Extended) => '=',
            (EditOp::Mismatch, CigarFormat::Extended) => 'X',
            (EditOp::Insert, _) => 'I',
            (EditOp::Delete, _) => 'D',
        }
    }
}

/// Run-length encode an edit path, e.g. `3=1X2I`.
///
/// An empty path gives an empty string.
pub fn to_cigar(ops: &[EditOp], format: CigarFormat) -> String {
    let mut cigar = String::new();
    let mut run: Option<(char, usize)> = None;

    for op in ops {
        let symbol = op.symbol(format);
        run = match run {
            Some((current, count)) if current == symbol => Some((current, count + 1)),
            Some((current, count)) => {
                cigar.push_str(&format!("{count}{current}"));
                Some((symbol, 1))
            }
            None => Some((symbol, 1)),
        };
    }
    if let Some((current, count)) = run {
        cigar.push_str(&format!("{count}{current}"));
    }

    cigar
}
