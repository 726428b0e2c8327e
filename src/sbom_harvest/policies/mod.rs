mod cutoff_policy;
mod retry_policy;

pub use cutoff_policy::{CutoffDecision, CutoffPolicy};
pub use retry_policy::RetryPolicy;
