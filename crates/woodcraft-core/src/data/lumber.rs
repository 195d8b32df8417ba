//! Lumber catalog module
//!
//! This module provides:
//! - Lumber categories used to group the catalog
//! - Stock profiles with nominal (sold-as) and actual (milled) dimensions
//! - Catalog management and lookup
//! - The standard catalog of common North American stock
//!
//! Scene units are inches. Geometry and cut lists use the actual
//! dimensions; labels show the nominal ones.

use crate::data::Color;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Lumber categories for catalog grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LumberCategory {
    /// Construction dimensional lumber (2x4, 4x4, ...)
    Dimensional,
    /// Sheet goods (plywood)
    SheetGood,
    /// Surfaced hardwood boards
    Hardwood,
}

impl LumberCategory {
    /// All categories in catalog display order
    pub const ALL: [LumberCategory; 3] = [Self::Dimensional, Self::SheetGood, Self::Hardwood];
}

impl fmt::Display for LumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimensional => write!(f, "Dimensional Lumber"),
            Self::SheetGood => write!(f, "Sheet Goods"),
            Self::Hardwood => write!(f, "Hardwood"),
        }
    }
}

/// Unique profile identifier (stock code such as `2x4`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl ProfileId {
    /// The stock code as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A stock profile in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumberProfile {
    /// Stable stock code
    pub id: ProfileId,
    /// Display name, e.g. `2×4`
    pub name: String,
    /// Nominal (marketing) width in inches
    pub nominal_width: f64,
    /// Nominal (marketing) height in inches
    pub nominal_height: f64,
    /// Milled width in inches
    pub actual_width: f64,
    /// Milled height in inches
    pub actual_height: f64,
    /// Stock length as sold, in inches
    pub default_length: f64,
    /// Catalog group
    pub category: LumberCategory,
    /// Default display color for new pieces
    pub color: Color,
}

impl LumberProfile {
    /// Create a new profile
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: LumberCategory,
        nominal: (f64, f64),
        actual: (f64, f64),
        default_length: f64,
        color: Color,
    ) -> Self {
        Self {
            id: ProfileId(id.into()),
            name: name.into(),
            nominal_width: nominal.0,
            nominal_height: nominal.1,
            actual_width: actual.0,
            actual_height: actual.1,
            default_length,
            category,
            color,
        }
    }

    /// Check the dimension invariants: everything positive and finite,
    /// actual never larger than nominal.
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("nominal_width", self.nominal_width),
            ("nominal_height", self.nominal_height),
            ("actual_width", self.actual_width),
            ("actual_height", self.actual_height),
            ("default_length", self.default_length),
        ];
        for (field, value) in dims {
            if !value.is_finite() {
                return Err(CoreError::NonFinite {
                    field: format!("{}.{}", self.id, field),
                });
            }
            if value <= 0.0 {
                return Err(CoreError::NonPositive {
                    field: format!("{}.{}", self.id, field),
                    value,
                });
            }
        }
        if self.actual_width > self.nominal_width || self.actual_height > self.nominal_height {
            return Err(CoreError::InvalidNumber {
                input: self.id.to_string(),
                reason: "actual dimensions exceed nominal dimensions".to_string(),
            });
        }
        Ok(())
    }

    /// Nominal size label, e.g. `2×4`
    pub fn nominal_label(&self) -> String {
        format!("{}×{}", self.nominal_width, self.nominal_height)
    }
}

/// Lumber catalog - ordered collection of profiles
#[derive(Debug, Clone, Default)]
pub struct LumberCatalog {
    profiles: Vec<Arc<LumberProfile>>,
}

impl LumberCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
        }
    }

    /// Add a profile, replacing any existing profile with the same id.
    pub fn add_profile(&mut self, profile: LumberProfile) {
        let profile = Arc::new(profile);
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(slot) => *slot = profile,
            None => self.profiles.push(profile),
        }
    }

    /// Get a profile by id
    pub fn get(&self, id: &str) -> Option<Arc<LumberProfile>> {
        self.profiles.iter().find(|p| p.id.as_str() == id).cloned()
    }

    /// Get a profile by id or fail with [`CoreError::UnknownProfile`]
    pub fn require(&self, id: &str) -> Result<Arc<LumberProfile>> {
        self.get(id).ok_or_else(|| CoreError::UnknownProfile { id: id.to_string() })
    }

    /// All profiles in catalog order
    pub fn profiles(&self) -> impl Iterator<Item = &Arc<LumberProfile>> {
        self.profiles.iter()
    }

    /// All profiles in a specific category, in catalog order
    pub fn by_category(&self, category: LumberCategory) -> Vec<Arc<LumberProfile>> {
        self.profiles
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Search profiles by name or id (partial match, case-insensitive)
    pub fn search_by_name(&self, query: &str) -> Vec<Arc<LumberProfile>> {
        let query_lower = query.to_lowercase();
        self.profiles
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query_lower)
                    || p.id.as_str().to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect()
    }

    /// Get the number of profiles in the catalog
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// The process-wide standard catalog
pub fn standard_catalog() -> &'static LumberCatalog {
    static CATALOG: OnceLock<LumberCatalog> = OnceLock::new();
    CATALOG.get_or_init(init_standard_catalog)
}

/// Build the standard catalog of common stock
pub fn init_standard_catalog() -> LumberCatalog {
    use LumberCategory::*;

    let mut catalog = LumberCatalog::new();
    let mut add = |id: &str,
                   name: &str,
                   category: LumberCategory,
                   nominal: (f64, f64),
                   actual: (f64, f64),
                   length: f64,
                   color: &str| {
        catalog.add_profile(LumberProfile::new(
            id,
            name,
            category,
            nominal,
            actual,
            length,
            Color::from_trusted(color),
        ));
    };

    // Dimensional lumber, 8' stock
    add("2x4", "2×4", Dimensional, (2.0, 4.0), (1.5, 3.5), 96.0, "#D4A574");
    add("2x6", "2×6", Dimensional, (2.0, 6.0), (1.5, 5.5), 96.0, "#C9956C");
    add("2x8", "2×8", Dimensional, (2.0, 8.0), (1.5, 7.25), 96.0, "#BE8664");
    add("2x10", "2×10", Dimensional, (2.0, 10.0), (1.5, 9.25), 96.0, "#B3775C");
    add("2x12", "2×12", Dimensional, (2.0, 12.0), (1.5, 11.25), 96.0, "#A86854");
    add("4x4", "4×4", Dimensional, (4.0, 4.0), (3.5, 3.5), 96.0, "#9D594C");
    add("1x4", "1×4", Dimensional, (1.0, 4.0), (0.75, 3.5), 96.0, "#DFB48C");
    add("1x6", "1×6", Dimensional, (1.0, 6.0), (0.75, 5.5), 96.0, "#D4A584");

    // Plywood, 4'x8' sheets: actual width is the thickness
    add("ply-1/4", "1/4\" Plywood", SheetGood, (48.0, 96.0), (0.25, 48.0), 96.0, "#E8D4B8");
    add("ply-1/2", "1/2\" Plywood", SheetGood, (48.0, 96.0), (0.5, 48.0), 96.0, "#DCC4A8");
    add("ply-3/4", "3/4\" Plywood", SheetGood, (48.0, 96.0), (0.75, 48.0), 96.0, "#D0B498");

    // Hardwood boards, 6' stock
    add("oak", "Oak Board", Hardwood, (1.0, 6.0), (0.75, 5.5), 72.0, "#8B7355");
    add("walnut", "Walnut Board", Hardwood, (1.0, 6.0), (0.75, 5.5), 72.0, "#5D4E37");
    add("maple", "Maple Board", Hardwood, (1.0, 6.0), (0.75, 5.5), 72.0, "#F5DEB3");

    catalog
}
