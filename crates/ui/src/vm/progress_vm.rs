use guide_core::StepProgress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed: usize,
    pub total: usize,
    pub show_celebration: bool,
}

impl ProgressVm {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Завершено этапов: {} из {}", self.completed, self.total)
    }
}

impl From<StepProgress> for ProgressVm {
    fn from(progress: StepProgress) -> Self {
        Self {
            completed: progress.completed,
            total: progress.total,
            show_celebration: progress.is_complete,
        }
    }
}
