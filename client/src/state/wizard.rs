//! Wizard navigation view model.
//!
//! The host owns step transitions and the save operation; this only decides
//! what the navigation bar shows for a given set of step flags.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

/// Snapshot of the props a wizard navigation bar is rendered from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WizardNavState {
    pub current_step: usize,
    pub total_steps: usize,
    pub is_last_step: bool,
    pub is_saving: bool,
    pub is_new_user: bool,
}

/// Right-hand action of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Advance to the next step.
    Next,
    /// Submit the wizard. `busy` disables the button and shows a spinner.
    Save { label: &'static str, busy: bool },
}

impl WizardNavState {
    /// Previous is unavailable on the first step.
    #[must_use]
    pub fn previous_disabled(&self) -> bool {
        self.current_step == 0
    }

    #[must_use]
    pub fn primary_action(&self) -> PrimaryAction {
        if !self.is_last_step {
            return PrimaryAction::Next;
        }
        let label = if self.is_saving {
            "Saving..."
        } else if self.is_new_user {
            "Complete Setup"
        } else {
            "Save Profile"
        };
        PrimaryAction::Save { label, busy: self.is_saving }
    }

    /// One-based progress caption, e.g. `Step 2 of 4`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        let total = self.total_steps.max(1);
        let step = self.current_step.saturating_add(1).min(total);
        format!("Step {step} of {total}")
    }
}
