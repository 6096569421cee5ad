//! Onboarding wizard steps as an explicit state machine.
//!
//! The multi-step flow (business info, document upload, review, then the
//! setup phase: profile, hours, staff, banking, pricing) is modeled as an
//! enumerated state set with a transition table, decoupled from any
//! rendering concern. The numeric form is the `setup_step` column on the
//! business profile; it only ever moves forward.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    BusinessInfo,
    Documents,
    Review,
    Profile,
    Hours,
    Staff,
    Banking,
    Pricing,
    Complete,
}

impl OnboardingStep {
    /// Numeric form persisted on the business profile.
    pub const fn step_number(&self) -> i32 {
        match self {
            OnboardingStep::BusinessInfo => 1,
            OnboardingStep::Documents => 2,
            OnboardingStep::Review => 3,
            OnboardingStep::Profile => 4,
            OnboardingStep::Hours => 5,
            OnboardingStep::Staff => 6,
            OnboardingStep::Banking => 7,
            OnboardingStep::Pricing => 8,
            OnboardingStep::Complete => 9,
        }
    }

    /// Inverse of [`step_number`](Self::step_number); out-of-range values
    /// clamp to the nearest endpoint so a corrupted marker never panics a
    /// read path.
    pub fn from_step_number(n: i32) -> Self {
        match n {
            i32::MIN..=1 => OnboardingStep::BusinessInfo,
            2 => OnboardingStep::Documents,
            3 => OnboardingStep::Review,
            4 => OnboardingStep::Profile,
            5 => OnboardingStep::Hours,
            6 => OnboardingStep::Staff,
            7 => OnboardingStep::Banking,
            8 => OnboardingStep::Pricing,
            _ => OnboardingStep::Complete,
        }
    }

    /// The step that follows this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            OnboardingStep::BusinessInfo => Some(OnboardingStep::Documents),
            OnboardingStep::Documents => Some(OnboardingStep::Review),
            OnboardingStep::Review => Some(OnboardingStep::Profile),
            OnboardingStep::Profile => Some(OnboardingStep::Hours),
            OnboardingStep::Hours => Some(OnboardingStep::Staff),
            OnboardingStep::Staff => Some(OnboardingStep::Banking),
            OnboardingStep::Banking => Some(OnboardingStep::Pricing),
            OnboardingStep::Pricing => Some(OnboardingStep::Complete),
            OnboardingStep::Complete => None,
        }
    }

    /// Progress is monotonic: a transition is valid only when it moves
    /// forward (or stays put, which concurrent duplicate advances rely on).
    pub fn can_advance_to(&self, target: Self) -> bool {
        target.step_number() >= self.step_number()
    }
}

impl Display for OnboardingStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            OnboardingStep::BusinessInfo => "business_info",
            OnboardingStep::Documents => "documents",
            OnboardingStep::Review => "review",
            OnboardingStep::Profile => "profile",
            OnboardingStep::Hours => "hours",
            OnboardingStep::Staff => "staff",
            OnboardingStep::Banking => "banking",
            OnboardingStep::Pricing => "pricing",
            OnboardingStep::Complete => "complete",
        };
        f.write_str(s)
    }
}
