use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseOptionError;

/// Who the trip is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    Solo,
    Couple,
    Family,
    Friends,
}

impl TravelType {
    pub const ALL: [TravelType; 4] = [
        TravelType::Solo,
        TravelType::Couple,
        TravelType::Family,
        TravelType::Friends,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TravelType::Solo => "solo",
            TravelType::Couple => "couple",
            TravelType::Family => "family",
            TravelType::Friends => "friends",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TravelType::Solo => "Solo",
            TravelType::Couple => "Couple",
            TravelType::Family => "Family",
            TravelType::Friends => "Friends",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TravelType::Solo => "🧳",
            TravelType::Couple => "👫",
            TravelType::Family => "👨‍👩‍👧‍👦",
            TravelType::Friends => "👯‍♂️",
        }
    }
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for TravelType {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        TravelType::ALL
            .into_iter()
            .find(|candidate| candidate.id() == normalized)
            .ok_or_else(|| ParseOptionError::TravelType(value.trim().to_string()))
    }
}

/// Spending range for the trip. Always set; defaults to [`BudgetTier::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    #[default]
    Medium,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [BudgetTier::Budget, BudgetTier::Medium, BudgetTier::Luxury];

    pub fn id(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Medium => "medium",
            BudgetTier::Luxury => "luxury",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget",
            BudgetTier::Medium => "Medium",
            BudgetTier::Luxury => "Luxury",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Economical options",
            BudgetTier::Medium => "Mid-range comfort",
            BudgetTier::Luxury => "Premium experience",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "💰",
            BudgetTier::Medium => "💰💰",
            BudgetTier::Luxury => "💰💰💰",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for BudgetTier {
    type Err = ParseOptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        BudgetTier::ALL
            .into_iter()
            .find(|candidate| candidate.id() == normalized)
            .ok_or_else(|| ParseOptionError::Budget(value.trim().to_string()))
    }
}

/// Accumulated trip data for one wizard session.
///
/// Fields are private so the traveler floors (`adults >= 1`, `children >= 0`)
/// hold for every value reachable through the public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripDraft {
    destination: String,
    start_date: String,
    end_date: String,
    travel_type: Option<TravelType>,
    adults: u32,
    children: u32,
    budget: BudgetTier,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            destination: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            travel_type: None,
            adults: 1,
            children: 0,
            budget: BudgetTier::default(),
        }
    }
}

impl TripDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn travel_type(&self) -> Option<TravelType> {
        self.travel_type
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    /// Applies a single field mutation. Decrements clamp at their floor.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Destination(value) => self.destination = value,
            FieldUpdate::StartDate(value) => self.start_date = value,
            FieldUpdate::EndDate(value) => self.end_date = value,
            FieldUpdate::TravelType(value) => self.travel_type = Some(value),
            FieldUpdate::Budget(value) => self.budget = value,
            FieldUpdate::IncrementAdults => self.adults = self.adults.saturating_add(1),
            FieldUpdate::DecrementAdults => self.adults = self.adults.saturating_sub(1).max(1),
            FieldUpdate::IncrementChildren => self.children = self.children.saturating_add(1),
            FieldUpdate::DecrementChildren => self.children = self.children.saturating_sub(1),
        }
    }
}

/// Field-level mutation requested by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Destination(String),
    StartDate(String),
    EndDate(String),
    TravelType(TravelType),
    Budget(BudgetTier),
    IncrementAdults,
    DecrementAdults,
    IncrementChildren,
    DecrementChildren,
}

impl FieldUpdate {
    /// Name of the draft field touched by this update, for logging.
    pub fn field(&self) -> &'static str {
        match self {
            FieldUpdate::Destination(_) => "destination",
            FieldUpdate::StartDate(_) => "start_date",
            FieldUpdate::EndDate(_) => "end_date",
            FieldUpdate::TravelType(_) => "travel_type",
            FieldUpdate::Budget(_) => "budget",
            FieldUpdate::IncrementAdults | FieldUpdate::DecrementAdults => "adults",
            FieldUpdate::IncrementChildren | FieldUpdate::DecrementChildren => "children",
        }
    }
}
