use std::{fs, path::Path};

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::{
    cost::CostModel,
    mode::{AlignStrategy, BandOverhang},
};

/// Characters of each aligned string kept by
/// [`Alignment::display_result`](crate::Alignment::display_result).
pub const DEFAULT_DISPLAY_LIMIT: usize = 101;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Alignment configuration.
/// * Missing fields in a TOML file take their [`Default`] values.
pub struct AlignConfig {
    /// Alignment engine, [`AlignStrategy`].
    pub strategy: AlignStrategy,
    /// Maximum number of leading symbols of each sequence that are aligned.
    /// * The rest of a longer sequence is ignored, not an error.
    pub length_cap: usize,
    /// Edit costs, [`CostModel`].
    pub costs: CostModel,
    /// Number of diagonals on each side of the main diagonal the banded engine considers.
    /// * Band width is `2 * band_radius + 1`.
    pub band_radius: usize,
    /// Handling of symbols the band cannot reach, [`BandOverhang`].
    pub overhang: BandOverhang,
    /// Symbol written into aligned strings for gaps.
    pub gap_marker: char,
    /// Maximum number of characters per aligned string in the display result.
    pub display_limit: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            strategy: AlignStrategy::default(),
            length_cap: 1000,
            costs: CostModel::default(),
            band_radius: 3,
            overhang: BandOverhang::default(),
            gap_marker: '-',
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl AlignConfig {
    /// Check values that would make results unreadable.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.gap_marker.is_whitespace() && !self.gap_marker.is_control(),
            "Gap marker {:?} must be a visible character",
            self.gap_marker
        );
        ensure!(self.display_limit > 0, "Display limit must be positive");
        Ok(())
    }

    /// Leading `length_cap` symbols of both sequences.
    pub fn capped(&self, seq1: &str, seq2: &str) -> (Vec<char>, Vec<char>) {
        (
            seq1.chars().take(self.length_cap).collect(),
            seq2.chars().take(self.length_cap).collect(),
        )
    }

    /// Parse and validate a TOML configuration.
    ///
    /// ### Example
    /// ```
    /// use rs_seqalign::{config::AlignConfig, mode::AlignStrategy};
    ///
    /// let config = AlignConfig::from_toml_str(
    ///     r#"
    ///     strategy = "banded"
    ///     length_cap = 500
    ///
    ///     [costs]
    ///     indel_cost = 4
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.strategy, AlignStrategy::Banded);
    /// assert_eq!(config.costs.indel_cost, 4);
    /// assert_eq!(config.costs.match_cost, -3);
    /// ```
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(toml).context("Invalid alignment configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {path:?}"))?;
        Self::from_toml_str(&toml).with_context(|| format!("In configuration file {path:?}"))
    }
}
