//! Message templates for the staged text output, as a fixed,
//! enumerated set.

/// The three stages a run reports, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Original,
    Filled,
    Inverted,
}

impl Stage {
    pub fn heading(self) -> &'static str {
        match self {
            Stage::Original => "original grid:",
            Stage::Filled => "grid after random fill:",
            Stage::Inverted => "grid after sign inversion at minimal difference:",
        }
    }

    /// Key used for this stage in `--json` output.
    pub fn key(self) -> &'static str {
        match self {
            Stage::Original => "original",
            Stage::Filled => "filled",
            Stage::Inverted => "inverted",
        }
    }
}

pub fn constants_line(min: i64, max: i64) -> String {
    format!("fill bounds: [{min}, {max}]")
}
