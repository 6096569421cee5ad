use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use uuid::Uuid;

/// Legal form of a business, as declared during signup.
///
/// Stored as text; unrecognized values map to `Other` so a new legal form in
/// the signup flow never breaks reads. Requirement evaluation only
/// distinguishes sole proprietorships from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegalForm {
    SoleProprietorship,
    Partnership,
    Llc,
    Corporation,
    Other,
}

impl LegalForm {
    pub fn is_sole_proprietorship(&self) -> bool {
        matches!(self, LegalForm::SoleProprietorship)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LegalForm::SoleProprietorship => "sole_proprietorship",
            LegalForm::Partnership => "partnership",
            LegalForm::Llc => "llc",
            LegalForm::Corporation => "corporation",
            LegalForm::Other => "other",
        }
    }

    /// Lenient parse used for database text columns.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "sole_proprietorship" => LegalForm::SoleProprietorship,
            "partnership" => LegalForm::Partnership,
            "llc" => LegalForm::Llc,
            "corporation" => LegalForm::Corporation,
            _ => LegalForm::Other,
        }
    }
}

impl Display for LegalForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A business profile row from the onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub id: Uuid,
    pub business_name: String,
    pub legal_form: LegalForm,
    /// Monotonic onboarding progress marker; see [`crate::models::OnboardingStep`].
    pub setup_step: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
