//! User confirmation for destructive section-list edits.
//!
//! The list controller receives this capability instead of opening a dialog
//! itself, so the same controller runs behind a GUI, a CLI or a test.

/// The question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    /// The prompt shown before a section is deleted.
    pub fn delete_section() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: "Time travel is still hard and there is no way back".to_string(),
            confirm_label: "Yes, delete it".to_string(),
        }
    }
}

pub trait Confirm {
    /// `true` to proceed.
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmPrompt) -> bool,
{
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}

/// Approves every prompt. For scripted edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        true
    }
}

/// Declines every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_confirm_sees_prompt() {
        let seen = RefCell::new(None);
        let confirm = |prompt: &ConfirmPrompt| {
            *seen.borrow_mut() = Some(prompt.title.clone());
            false
        };

        assert!(!confirm.confirm(&ConfirmPrompt::delete_section()));
        assert_eq!(seen.borrow().as_deref(), Some("Are you sure?"));
    }

    #[test]
    fn test_fixed_answers() {
        let prompt = ConfirmPrompt::delete_section();
        assert!(AlwaysConfirm.confirm(&prompt));
        assert!(!NeverConfirm.confirm(&prompt));
    }
}
