mod workflow;

pub use workflow::{AdvanceOutcome, ClassifyWorkflow, LoadOutcome, WorkflowPhase};
