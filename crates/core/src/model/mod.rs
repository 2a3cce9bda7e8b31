mod answers;
mod artwork;
mod ids;
mod question;
mod stats;

pub use answers::AnswerSet;
pub use artwork::Artwork;
pub use ids::{ArtworkId, QuestionId};
pub use question::{Question, QuestionDraft, QuestionError};
pub use stats::ModelStats;
