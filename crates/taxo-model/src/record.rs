//! Dataset records and the dimensions they can be ordered along.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One row of the live dataset, exposing the six categorical fields.
///
/// Multi-valued source fields (a record tagged with several Sectors) arrive
/// as a single pre-joined display string; ordering treats the field's literal
/// string content as one value and never decomposes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub grouping: String,
    #[serde(default)]
    pub list: String,
}

/// The three independently orderable flat dimensions.
///
/// The Set/Grouping/List hierarchy is not a `FlatDimension`; its three
/// coupled levels are handled by the hierarchy walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlatDimension {
    Sector,
    Domain,
    Country,
}

impl FlatDimension {
    pub const ALL: [FlatDimension; 3] = [
        FlatDimension::Sector,
        FlatDimension::Domain,
        FlatDimension::Country,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            FlatDimension::Sector => "Sector",
            FlatDimension::Domain => "Domain",
            FlatDimension::Country => "Country",
        }
    }

    /// The record field this dimension orders.
    pub fn value_of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            FlatDimension::Sector => &record.sector,
            FlatDimension::Domain => &record.domain,
            FlatDimension::Country => &record.country,
        }
    }
}

impl fmt::Display for FlatDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FlatDimension {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sector" => Ok(FlatDimension::Sector),
            "domain" => Ok(FlatDimension::Domain),
            "country" => Ok(FlatDimension::Country),
            other => Err(ModelError::UnknownDimension(other.to_string())),
        }
    }
}
