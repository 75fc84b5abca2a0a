//! Critical Path Method over a verified task graph.
//!
//! Runs the forward pass for earliest times, the backward pass for latest
//! times, then derives slack and the zero-slack (critical) task set.

mod backward;
mod calculation;
mod forward;
mod slack;
mod types;

pub use backward::{backward_pass, BackwardPassResult};
pub use calculation::{
    calculate_critical_path, calculate_critical_path_with_config, calculate_for_graph,
    CriticalPathError,
};
pub use forward::{forward_pass, ForwardPassResult};
pub use slack::{calculate_slack, extract_critical_path};
pub use types::{CriticalPath, TaskTiming};
