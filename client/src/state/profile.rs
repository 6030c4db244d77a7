//! Profile wizard state owned by the profile page.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::wizard::WizardNavState;

/// Titles of the profile wizard steps, in order.
pub const PROFILE_STEPS: [&str; 4] = ["About you", "Playing style", "Goals", "Review"];

/// Progress through the profile wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileWizardState {
    pub step: usize,
    pub saving: bool,
    pub saved: bool,
    pub new_user: bool,
}

impl Default for ProfileWizardState {
    fn default() -> Self {
        Self { step: 0, saving: false, saved: false, new_user: true }
    }
}

impl ProfileWizardState {
    #[must_use]
    pub fn total_steps(&self) -> usize {
        PROFILE_STEPS.len()
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step.saturating_add(1) >= self.total_steps()
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        PROFILE_STEPS.get(self.step).copied().unwrap_or_default()
    }

    /// Step back; no-op on the first step or while saving.
    pub fn previous(&mut self) {
        if !self.saving {
            self.step = self.step.saturating_sub(1);
        }
    }

    /// Step forward; no-op on the last step.
    pub fn next(&mut self) {
        if !self.is_last_step() {
            self.step += 1;
        }
    }

    /// Begin saving. Returns `false` when a save is already in flight or the
    /// wizard is not on its last step.
    pub fn begin_save(&mut self) -> bool {
        if self.saving || !self.is_last_step() {
            return false;
        }
        self.saving = true;
        true
    }

    /// Save finished; the user is no longer new.
    pub fn finish_save(&mut self) {
        self.saving = false;
        self.saved = true;
        self.new_user = false;
    }

    #[must_use]
    pub fn nav(&self) -> WizardNavState {
        WizardNavState {
            current_step: self.step,
            total_steps: self.total_steps(),
            is_last_step: self.is_last_step(),
            is_saving: self.saving,
            is_new_user: self.new_user,
        }
    }
}
