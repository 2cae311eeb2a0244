//! Presentation labels for the review step.

use serde::Serialize;

use super::draft::TripDraft;
use crate::destinations::DestinationCatalog;

pub const UNTITLED_TRIP: &str = "Your Trip";
pub const DATES_NOT_SPECIFIED: &str = "Dates not specified";
pub const TRAVEL_TYPE_NOT_SPECIFIED: &str = "Travel type not specified";

/// Derived, read-only view of a draft shown before the trip is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSummary {
    pub title: String,
    pub traveler_label: String,
    pub date_label: String,
    pub budget_label: String,
    pub image_ref: String,
}

impl ReviewSummary {
    /// Lines in the order the review card presents them.
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            format!("Dates: {}", self.date_label),
            format!("Travelers: {}", self.traveler_label),
            format!("Budget: {} Budget", self.budget_label),
            format!("Image: {}", self.image_ref),
        ]
    }
}

pub fn summarize(draft: &TripDraft, catalog: &DestinationCatalog) -> ReviewSummary {
    let title = if draft.destination().is_empty() {
        UNTITLED_TRIP.to_string()
    } else {
        draft.destination().to_string()
    };

    ReviewSummary {
        title,
        traveler_label: traveler_label(draft),
        date_label: date_label(draft),
        budget_label: draft.budget().title().to_string(),
        image_ref: catalog.image_for(draft.destination()).to_string(),
    }
}

pub fn traveler_label(draft: &TripDraft) -> String {
    let group = match draft.travel_type() {
        Some(kind) => format!("{} Travel", kind.title()),
        None => TRAVEL_TYPE_NOT_SPECIFIED.to_string(),
    };
    let mut label = format!(
        "{group} • {} {}",
        draft.adults(),
        pluralize(draft.adults(), "Adult", "Adults")
    );
    if draft.children() > 0 {
        label.push_str(&format!(
            ", {} {}",
            draft.children(),
            pluralize(draft.children(), "Child", "Children")
        ));
    }
    label
}

pub fn date_label(draft: &TripDraft) -> String {
    if !draft.start_date().is_empty() && !draft.end_date().is_empty() {
        format!("{} - {}", draft.start_date(), draft.end_date())
    } else {
        DATES_NOT_SPECIFIED.to_string()
    }
}

fn pluralize(count: u32, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::draft::{BudgetTier, FieldUpdate, TravelType};

    fn draft_with(updates: Vec<FieldUpdate>) -> TripDraft {
        let mut draft = TripDraft::new();
        for update in updates {
            draft.apply(update);
        }
        draft
    }

    #[test]
    fn couple_trip_to_tokyo() {
        let draft = draft_with(vec![
            FieldUpdate::Destination("Tokyo, Japan".into()),
            FieldUpdate::TravelType(TravelType::Couple),
            FieldUpdate::IncrementAdults,
            FieldUpdate::Budget(BudgetTier::Luxury),
        ]);
        let summary = summarize(&draft, &DestinationCatalog::popular());
        assert_eq!(summary.title, "Tokyo, Japan");
        assert_eq!(summary.traveler_label, "Couple Travel • 2 Adults");
        assert_eq!(summary.budget_label, "Luxury");
        assert_eq!(
            summary.image_ref,
            "https://images.pexels.com/photos/2506923/pexels-photo-2506923.jpeg"
        );
    }

    #[test]
    fn children_clause_is_pluralized() {
        let one = draft_with(vec![
            FieldUpdate::TravelType(TravelType::Family),
            FieldUpdate::IncrementChildren,
        ]);
        assert_eq!(traveler_label(&one), "Family Travel • 1 Adult, 1 Child");

        let three = draft_with(vec![
            FieldUpdate::TravelType(TravelType::Family),
            FieldUpdate::IncrementChildren,
            FieldUpdate::IncrementChildren,
            FieldUpdate::IncrementChildren,
        ]);
        assert_eq!(traveler_label(&three), "Family Travel • 1 Adult, 3 Children");
    }

    #[test]
    fn unset_fields_use_placeholders() {
        let draft = draft_with(vec![FieldUpdate::StartDate("10/15/2025".into())]);
        let summary = summarize(&draft, &DestinationCatalog::popular());
        assert_eq!(summary.title, UNTITLED_TRIP);
        assert_eq!(summary.date_label, DATES_NOT_SPECIFIED);
        assert_eq!(summary.traveler_label, "Travel type not specified • 1 Adult");
        assert_eq!(summary.budget_label, "Medium");
        assert_eq!(summary.image_ref, DestinationCatalog::popular().first().image_ref);
    }

    #[test]
    fn date_range_joins_both_ends() {
        let draft = draft_with(vec![
            FieldUpdate::StartDate("10/15/2025".into()),
            FieldUpdate::EndDate("10/22/2025".into()),
        ]);
        assert_eq!(date_label(&draft), "10/15/2025 - 10/22/2025");
    }
}
