//! Fixed age/sex stratification used by every indicator.
//!
//! Backend field names are built from a base-cell stem (`Male_0_14`,
//! `Female_over_14`, ...) plus an indicator-specific suffix; the two
//! compound bands use the `Children`/`Adults` stems.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four base age/sex cells every indicator is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BaseCell {
    MaleUnder15,
    FemaleUnder15,
    MaleOver15,
    FemaleOver15,
}

impl BaseCell {
    /// All four cells in display order.
    pub const ALL: [BaseCell; 4] = [
        BaseCell::MaleUnder15,
        BaseCell::FemaleUnder15,
        BaseCell::MaleOver15,
        BaseCell::FemaleOver15,
    ];

    /// The backend field-name stem for this cell.
    pub fn stem(self) -> &'static str {
        match self {
            BaseCell::MaleUnder15 => "Male_0_14",
            BaseCell::FemaleUnder15 => "Female_0_14",
            BaseCell::MaleOver15 => "Male_over_14",
            BaseCell::FemaleOver15 => "Female_over_14",
        }
    }

    /// Human-readable cell label.
    pub fn label(self) -> &'static str {
        match self {
            BaseCell::MaleUnder15 => "Male 0-14",
            BaseCell::FemaleUnder15 => "Female 0-14",
            BaseCell::MaleOver15 => "Male 15+",
            BaseCell::FemaleOver15 => "Female 15+",
        }
    }

    /// Whether this cell belongs to the 0-14 band.
    pub fn is_child(self) -> bool {
        matches!(self, BaseCell::MaleUnder15 | BaseCell::FemaleUnder15)
    }
}

/// Age band an aggregate row belongs to, used by the UI age-view toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    All,
    Children,
    Adults,
}

/// The seven fixed demographic groups emitted per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemographicGroup {
    All,
    ChildrenAll,
    AdultsAll,
    MaleChildren,
    FemaleChildren,
    MaleAdults,
    FemaleAdults,
}

impl DemographicGroup {
    /// All seven groups in output order: compound rows first, base cells after.
    pub const ALL: [DemographicGroup; 7] = [
        DemographicGroup::All,
        DemographicGroup::ChildrenAll,
        DemographicGroup::AdultsAll,
        DemographicGroup::MaleChildren,
        DemographicGroup::FemaleChildren,
        DemographicGroup::MaleAdults,
        DemographicGroup::FemaleAdults,
    ];

    /// The base cells this group aggregates over.
    pub fn cells(self) -> &'static [BaseCell] {
        match self {
            DemographicGroup::All => &BaseCell::ALL,
            DemographicGroup::ChildrenAll => &[BaseCell::MaleUnder15, BaseCell::FemaleUnder15],
            DemographicGroup::AdultsAll => &[BaseCell::MaleOver15, BaseCell::FemaleOver15],
            DemographicGroup::MaleChildren => &[BaseCell::MaleUnder15],
            DemographicGroup::FemaleChildren => &[BaseCell::FemaleUnder15],
            DemographicGroup::MaleAdults => &[BaseCell::MaleOver15],
            DemographicGroup::FemaleAdults => &[BaseCell::FemaleOver15],
        }
    }

    /// The field-name stem for compound-band denominators (`Children_Total`,
    /// `Adults_Total`). Base cells and `All` derive their fields elsewhere.
    pub fn compound_stem(self) -> Option<&'static str> {
        match self {
            DemographicGroup::ChildrenAll => Some("Children"),
            DemographicGroup::AdultsAll => Some("Adults"),
            _ => None,
        }
    }

    /// The single base cell for the four leaf groups.
    pub fn base_cell(self) -> Option<BaseCell> {
        match self.cells() {
            [cell] => Some(*cell),
            _ => None,
        }
    }

    /// Whether this is one of the three always-emitted "All" family rows.
    pub fn is_summary(self) -> bool {
        matches!(
            self,
            DemographicGroup::All | DemographicGroup::ChildrenAll | DemographicGroup::AdultsAll
        )
    }

    /// Age band this group falls under.
    pub fn age_band(self) -> AgeBand {
        match self {
            DemographicGroup::All => AgeBand::All,
            DemographicGroup::ChildrenAll
            | DemographicGroup::MaleChildren
            | DemographicGroup::FemaleChildren => AgeBand::Children,
            DemographicGroup::AdultsAll
            | DemographicGroup::MaleAdults
            | DemographicGroup::FemaleAdults => AgeBand::Adults,
        }
    }

    /// Human-readable group label.
    pub fn label(self) -> &'static str {
        match self {
            DemographicGroup::All => "All",
            DemographicGroup::ChildrenAll => "All Children",
            DemographicGroup::AdultsAll => "All Adults",
            DemographicGroup::MaleChildren => BaseCell::MaleUnder15.label(),
            DemographicGroup::FemaleChildren => BaseCell::FemaleUnder15.label(),
            DemographicGroup::MaleAdults => BaseCell::MaleOver15.label(),
            DemographicGroup::FemaleAdults => BaseCell::FemaleOver15.label(),
        }
    }
}

impl fmt::Display for DemographicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
