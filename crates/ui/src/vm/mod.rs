mod artwork_vm;
mod learning_vm;
mod stats_vm;

pub use artwork_vm::{map_artwork_card, ArtworkCardVm};
pub use learning_vm::{LearningIntent, LearningOutcome, LearningVm, OptionVm, QuestionCardVm};
pub use stats_vm::{map_model_stats, ConfidenceBarVm, StatsVm};
