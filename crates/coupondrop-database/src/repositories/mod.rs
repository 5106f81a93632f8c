//! Concrete Postgres repository implementations of the store traits.

pub mod eligibility;
pub mod history;
pub mod rotation;

pub use eligibility::EligibilityRepository;
pub use history::HistoryRepository;
pub use rotation::RotationRepository;
