//! Domain models shared across Provia components.

pub mod business;
pub mod document;
pub mod intake;
pub mod onboarding;

pub use business::{BusinessProfile, LegalForm};
pub use document::{Document, DocumentResponse, NewDocument, VerificationStatus};
pub use intake::{DocumentBatch, IntakeOutcome, UploadedDocument, UploadedFile};
pub use onboarding::OnboardingStep;
