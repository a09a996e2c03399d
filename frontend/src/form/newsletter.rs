use std::rc::Rc;

use yew::prelude::*;

use super::validation::is_valid_email;
use crate::config::{NEWSLETTER_BANNER_MS, NEWSLETTER_LATENCY_MS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewsletterState {
    pub email: String,
    pub status: NewsletterStatus,
}

pub enum NewsletterAction {
    Input(String),
    Submit,
    Subscribed,
    Reset,
}

impl NewsletterState {
    pub fn can_submit(&self) -> bool {
        self.status != NewsletterStatus::Loading && is_valid_email(&self.email)
    }
}

/// Loading settles after a simulated round trip, Success clears itself.
pub fn pending_timer(status: NewsletterStatus) -> Option<(u32, NewsletterAction)> {
    match status {
        NewsletterStatus::Loading => Some((NEWSLETTER_LATENCY_MS, NewsletterAction::Subscribed)),
        NewsletterStatus::Success => Some((NEWSLETTER_BANNER_MS, NewsletterAction::Reset)),
        NewsletterStatus::Idle | NewsletterStatus::Error => None,
    }
}

impl Reducible for NewsletterState {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NewsletterAction::Input(email) => next.email = email,
            // the pending round trip owns the outcome
            NewsletterAction::Submit if next.status == NewsletterStatus::Loading => return self,
            NewsletterAction::Submit => {
                next.status = if next.can_submit() {
                    NewsletterStatus::Loading
                } else {
                    NewsletterStatus::Error
                };
            }
            NewsletterAction::Subscribed => {
                next.email.clear();
                next.status = NewsletterStatus::Success;
            }
            NewsletterAction::Reset => {
                if next.status == NewsletterStatus::Success {
                    next.status = NewsletterStatus::Idle;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_clears_email_and_resets_to_idle() {
        let state = Rc::new(NewsletterState::default())
            .reduce(NewsletterAction::Input("ana@loja.com".into()))
            .reduce(NewsletterAction::Submit);
        assert_eq!(state.status, NewsletterStatus::Loading);
        let state = state.reduce(NewsletterAction::Subscribed);
        assert_eq!(state.email, "");
        assert_eq!(state.status, NewsletterStatus::Success);
        assert_eq!(state.reduce(NewsletterAction::Reset).status, NewsletterStatus::Idle);
    }

    #[test]
    fn bad_address_is_refused() {
        let state = Rc::new(NewsletterState::default())
            .reduce(NewsletterAction::Input("ana@".into()))
            .reduce(NewsletterAction::Submit);
        assert_eq!(state.status, NewsletterStatus::Error);
    }

    #[test]
    fn resubmitting_while_loading_keeps_the_signup() {
        let loading = Rc::new(NewsletterState::default())
            .reduce(NewsletterAction::Input("ana@loja.com".into()))
            .reduce(NewsletterAction::Submit);
        let again = loading.clone().reduce(NewsletterAction::Submit);
        assert_eq!(again.status, NewsletterStatus::Loading);
        assert!(Rc::ptr_eq(&loading, &again));
    }

    #[test]
    fn timers_follow_the_status() {
        let (delay, action) = pending_timer(NewsletterStatus::Loading).expect("round trip");
        assert_eq!(delay, NEWSLETTER_LATENCY_MS);
        assert!(matches!(action, NewsletterAction::Subscribed));

        let (delay, action) = pending_timer(NewsletterStatus::Success).expect("banner");
        assert_eq!(delay, NEWSLETTER_BANNER_MS);
        assert!(matches!(action, NewsletterAction::Reset));

        assert!(pending_timer(NewsletterStatus::Idle).is_none());
        assert!(pending_timer(NewsletterStatus::Error).is_none());
    }
}
