use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown staffing model '{name}'")]
    UnknownModel { name: String },

    #[error("Period count mismatch in {scope}: expected {expected}, got {actual}")]
    PeriodCountMismatch {
        scope: String,
        expected: usize,
        actual: usize,
    },

    #[error("Plan '{plan_id}' defines no periods")]
    EmptyPlan { plan_id: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
