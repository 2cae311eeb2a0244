use std::fmt;

/// Identifies a wizard step. The set is closed; ordering lives in [`StepCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Destination,
    Dates,
    Travelers,
    Budget,
    Review,
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StepId::Destination => "destination",
            StepId::Dates => "dates",
            StepId::Travelers => "travelers",
            StepId::Budget => "budget",
            StepId::Review => "review",
        };
        f.write_str(label)
    }
}

/// One stage of the wizard along with the prompt text shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
}

static STEPS: [Step; 5] = [
    Step {
        id: StepId::Destination,
        title: "Destination",
        heading: "Where would you like to go?",
        description: "Search for a city, region, or country",
    },
    Step {
        id: StepId::Dates,
        title: "Dates",
        heading: "When are you traveling?",
        description: "Select your trip dates",
    },
    Step {
        id: StepId::Travelers,
        title: "Travelers",
        heading: "Who's traveling?",
        description: "Select your travel group",
    },
    Step {
        id: StepId::Budget,
        title: "Budget",
        heading: "What's your budget?",
        description: "Select a budget range for your trip",
    },
    Step {
        id: StepId::Review,
        title: "Review",
        heading: "Review Your Trip",
        description: "Confirm your trip details before creating",
    },
];

/// Fixed, ordered sequence of wizard steps.
#[derive(Debug, Clone, Copy)]
pub struct StepCatalog {
    steps: &'static [Step],
}

impl StepCatalog {
    /// The destination → dates → travelers → budget → review sequence.
    pub fn standard() -> Self {
        Self { steps: &STEPS }
    }

    pub fn count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Returns the step at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= self.count()`. Indices are produced by the
    /// controller, so an out-of-range value is a bug rather than bad input.
    pub fn step_at(&self, index: usize) -> &Step {
        &self.steps[index]
    }

    pub fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
