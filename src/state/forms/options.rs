//! Closed option sets offered by the select fields

use serde::Serialize;

/// Fare class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FareType {
    #[default]
    Economy,
    Business,
    Premium,
}

impl FareType {
    pub const ALL: [FareType; 3] = [Self::Economy, Self::Business, Self::Premium];
    pub const LABELS: &'static [&'static str] = &["Economy", "Business", "Premium"];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Air conditioning class of the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BusType {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "Non-AC")]
    NonAc,
}

impl BusType {
    pub const ALL: [BusType; 2] = [Self::Ac, Self::NonAc];
    pub const LABELS: &'static [&'static str] = &["AC", "Non-AC"];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Ac => 0,
            Self::NonAc => 1,
        }
    }
}

/// Seating layout of the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BusSubType {
    Sleeper,
    Seater,
}

impl BusSubType {
    pub const ALL: [BusSubType; 2] = [Self::Sleeper, Self::Seater];
    pub const LABELS: &'static [&'static str] = &["Sleeper", "Seater"];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Sleeper => 0,
            Self::Seater => 1,
        }
    }
}
