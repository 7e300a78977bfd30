mod progress_vm;
mod step_vm;

pub use progress_vm::ProgressVm;
pub use step_vm::{StepCardVm, map_step_card};
