use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The closed set of inventory categories a job site can include.
///
/// `Display` and the persisted form use the key (`SidewalkShed`); parsing also
/// accepts the label (`Sidewalk Shed`), ignoring case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum CategoryTag {
    #[strum(to_string = "SidewalkShed", serialize = "Sidewalk Shed")]
    SidewalkShed,
    #[strum(to_string = "Scaffold")]
    Scaffold,
    #[strum(to_string = "Shoring")]
    Shoring,
}

impl CategoryTag {
    pub fn all() -> Vec<CategoryTag> {
        Self::iter().collect()
    }

    pub fn key(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryTag::SidewalkShed => "Sidewalk Shed",
            CategoryTag::Scaffold => "Scaffold",
            CategoryTag::Shoring => "Shoring",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CategoryTag::SidewalkShed => "#4CAF50",
            CategoryTag::Scaffold => "#FFEE58",
            CategoryTag::Shoring => "#9C27B0",
        }
    }
}
