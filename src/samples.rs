use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownSample {
    SeasonOne,
    SeasonTwo,
    Increasing,
    Decreasing,
    Constant,
}

impl KnownSample {
    pub fn scores(&self) -> &'static [i32] {
        match self {
            Self::SeasonOne => &[3, 4, 21, 36, 10, 28, 35, 5, 24, 42],
            Self::SeasonTwo => &[10, 5, 20, 20, 4, 5, 2, 25, 1],
            Self::Increasing => &[1, 2, 3, 4, 5],
            Self::Decreasing => &[5, 4, 3, 2, 1],
            Self::Constant => &[7, 7, 7],
        }
    }
}

pub fn get_all_samples() -> Vec<(KnownSample, &'static [i32])> {
    KnownSample::iter().map(|s| (s, s.scores())).collect()
}
