use std::rc::Rc;

use yew::prelude::*;

use super::transport::SubmitError;
use crate::config::SUCCESS_BANNER_MS;
use super::validation::{validate, Field, FieldErrors, LeadForm};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Why a submit click did not start a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid(Field),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub values: LeadForm,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    /// Set by the first edit since mount or since the last successful submit.
    pub started: bool,
}

impl ContactFormState {
    pub fn is_busy(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Stores the new value and drops that field's error without re-validating.
    pub fn edit(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.clear(field);
        self.started = true;
    }

    /// Validates and, when the form is clean, moves to `Submitting` and
    /// hands back the lead to deliver.
    pub fn begin_submit(&mut self) -> Result<LeadForm, SubmitBlocked> {
        if self.is_busy() {
            return Err(SubmitBlocked::InFlight);
        }
        let errors = validate(&self.values);
        if let Some(field) = errors.first() {
            self.errors = errors;
            return Err(SubmitBlocked::Invalid(field));
        }
        self.errors = FieldErrors::default();
        self.status = SubmitStatus::Submitting;
        Ok(self.values.clone())
    }

    /// Success clears the form; failure keeps every value for a retry.
    pub fn finish(&mut self, outcome: &Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.values = LeadForm::default();
                self.errors = FieldErrors::default();
                self.started = false;
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    pub fn dismiss_success(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Finished(Result<(), SubmitError>),
    DismissSuccess,
}

/// The timer a status arms on entry: only the success banner hides itself.
pub fn pending_timer(status: SubmitStatus) -> Option<(u32, FormAction)> {
    match status {
        SubmitStatus::Success => Some((SUCCESS_BANNER_MS, FormAction::DismissSuccess)),
        SubmitStatus::Idle | SubmitStatus::Submitting | SubmitStatus::Error => None,
    }
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Submit => {
                let _ = next.begin_submit();
            }
            FormAction::Finished(outcome) => next.finish(&outcome),
            FormAction::DismissSuccess => next.dismiss_success(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::valid_lead;

    fn filled() -> ContactFormState {
        ContactFormState {
            values: valid_lead(),
            started: true,
            ..ContactFormState::default()
        }
    }

    #[test]
    fn valid_submit_runs_idle_submitting_success_idle() {
        let mut state = filled();
        assert_eq!(state.status, SubmitStatus::Idle);

        let lead = state.begin_submit().expect("valid lead");
        assert_eq!(lead, valid_lead());
        assert_eq!(state.status, SubmitStatus::Submitting);

        state.finish(&Ok(()));
        assert_eq!(state.status, SubmitStatus::Success);
        assert_eq!(state.values, LeadForm::default());
        assert!(!state.started);

        state.dismiss_success();
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn invalid_submit_stays_idle_and_reports_first_field() {
        let mut state = ContactFormState::default();
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::Invalid(Field::Name)));
        assert_eq!(state.status, SubmitStatus::Idle);
        assert_eq!(state.errors.len(), 5);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut state = ContactFormState::default();
        let _ = state.begin_submit();
        state.edit(Field::Email, "x".into());
        assert!(state.errors.get(Field::Email).is_none());
        assert!(state.errors.get(Field::Name).is_some());
        assert!(state.started);
    }

    #[test]
    fn transport_failure_keeps_values() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish(&Err(SubmitError::Network("offline".into())));
        assert_eq!(state.status, SubmitStatus::Error);
        assert_eq!(state.values, valid_lead());

        // retry is allowed straight away
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn dismiss_only_affects_success_banner() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.dismiss_success();
        assert_eq!(state.status, SubmitStatus::Submitting);
    }

    #[test]
    fn reducer_walks_the_same_path() {
        let state = Rc::new(filled());
        let state = state.reduce(FormAction::Submit);
        assert!(state.is_busy());
        let state = state.reduce(FormAction::Finished(Ok(())));
        assert_eq!(state.status, SubmitStatus::Success);
        let state = state.reduce(FormAction::DismissSuccess);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn success_banner_hides_after_five_seconds() {
        let (delay, action) = pending_timer(SubmitStatus::Success).expect("banner timer");
        assert_eq!(delay, SUCCESS_BANNER_MS);
        assert_eq!(delay, 5_000);
        assert!(matches!(action, FormAction::DismissSuccess));

        let mut state = filled();
        state.begin_submit().unwrap();
        state.finish(&Ok(()));
        let state = Rc::new(state).reduce(action);
        assert_eq!(state.status, SubmitStatus::Idle);
    }

    #[test]
    fn only_success_arms_a_timer() {
        for status in [SubmitStatus::Idle, SubmitStatus::Submitting, SubmitStatus::Error] {
            assert!(pending_timer(status).is_none(), "{:?} armed a timer", status);
        }
    }
}
