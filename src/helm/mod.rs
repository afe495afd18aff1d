pub mod command;

pub use command::{plan_steps, run_step, ChartRequest, HelmStep};
