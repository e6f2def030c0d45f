// Library interface for driveguide
// This allows integration tests to access internal modules

pub mod content;
pub mod errors;
pub mod quiz;
pub mod ui;

// Re-export commonly used types
pub use content::Section;
pub use errors::DriveGuideError;
pub use quiz::{
    AnswerSet, Budget, Capacity, Choice, DriveKind, Portability, PrimaryUse, Question,
    QuizSession, Recommendation, recommend,
};
