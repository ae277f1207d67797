use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which alignment engine to run.
pub enum AlignStrategy {
    #[default]
    /// Full matrix.
    /// * Always finds a globally optimal alignment.
    /// * Takes `O(n * m)` time and space, so it is only tractable for short (capped) inputs.
    Full,
    /// Diagonal band of fixed radius.
    /// * **Only considers paths that stay within the band**, so the cost may exceed the optimum.
    /// * Useful for long sequences of similar length that need few indels.
    ///
    /// ### Example
    /// `TTTTACGT` and `ACGT` with radius 3
    /// * The optimal alignment deletes the four leading `T`s, which leaves the band.
    /// * The banded result pays for mismatches and trailing indels instead.
    Banded,
}

impl AlignStrategy {
    /// `Banded` if `banded` is set, `Full` otherwise.
    pub fn from_banded(banded: bool) -> Self {
        if banded {
            AlignStrategy::Banded
        } else {
            AlignStrategy::Full
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// What the banded engine does with the part of the longer sequence the band cannot reach.
pub enum BandOverhang {
    #[default]
    /// Append the overhang as trailing indels, so both inputs are aligned in full.
    Extend,
    /// Drop the overhang and only align the prefixes the band reaches.
    Truncate,
}
