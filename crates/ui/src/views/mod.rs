mod dashboard;
mod dataset;
mod learning;
mod progress;
mod questionnaire;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use dataset::DatasetView;
pub use learning::LearningView;
pub use progress::ProgressView;
pub use questionnaire::QuestionnaireView;
pub use state::{view_state_from_resource, ViewError, ViewState};
