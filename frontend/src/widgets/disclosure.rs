use std::collections::BTreeSet;
use std::rc::Rc;

use yew::prelude::*;

/// How many entries of a disclosure group may be open together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenPolicy {
    /// Any number open at once (FAQ).
    Multi,
    /// At most one open (step timelines, tab groups).
    Single,
}

/// Open/closed state for a group of accordion items or tabs.
#[derive(Clone, Debug, PartialEq)]
pub struct Disclosure<Id: Ord> {
    policy: OpenPolicy,
    open: BTreeSet<Id>,
}

impl<Id: Ord + Clone> Disclosure<Id> {
    pub fn new(policy: OpenPolicy) -> Self {
        Self {
            policy,
            open: BTreeSet::new(),
        }
    }

    pub fn with_open(policy: OpenPolicy, id: Id) -> Self {
        let mut state = Self::new(policy);
        state.open.insert(id);
        state
    }

    pub fn is_open(&self, id: &Id) -> bool {
        self.open.contains(id)
    }

    #[cfg(test)]
    pub fn open_ids(&self) -> impl Iterator<Item = &Id> {
        self.open.iter()
    }

    #[cfg(test)]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    pub fn toggle(&mut self, id: Id) {
        match self.policy {
            OpenPolicy::Multi => {
                if !self.open.remove(&id) {
                    self.open.insert(id);
                }
            }
            OpenPolicy::Single => {
                let was_sole_open = self.open.len() == 1 && self.open.contains(&id);
                self.open.clear();
                if !was_sole_open {
                    self.open.insert(id);
                }
            }
        }
    }

    /// Opens `id` without ever closing it. Under `Single` every other entry
    /// closes, which is what a tab strip wants.
    pub fn select(&mut self, id: Id) {
        if self.policy == OpenPolicy::Single {
            self.open.clear();
        }
        self.open.insert(id);
    }

}

pub enum DisclosureAction<Id> {
    Toggle(Id),
    Select(Id),
}

impl<Id: Ord + Clone + 'static> Reducible for Disclosure<Id> {
    type Action = DisclosureAction<Id>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DisclosureAction::Toggle(id) => next.toggle(id),
            DisclosureAction::Select(id) => next.select(id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_state_under_both_policies() {
        for policy in [OpenPolicy::Multi, OpenPolicy::Single] {
            let mut state = Disclosure::new(policy);
            state.toggle("pricing");
            state.toggle("pricing");
            assert!(!state.is_open(&"pricing"), "{policy:?}");

            let mut state = Disclosure::with_open(policy, "pricing");
            state.toggle("pricing");
            state.toggle("pricing");
            assert!(state.is_open(&"pricing"), "{policy:?}");
        }
    }

    #[test]
    fn multi_keeps_several_items_open() {
        let mut faq = Disclosure::new(OpenPolicy::Multi);
        faq.toggle("pricing");
        faq.toggle("security");
        faq.toggle("support");
        assert_eq!(faq.open_count(), 3);
        faq.toggle("security");
        assert!(faq.is_open(&"pricing"));
        assert!(!faq.is_open(&"security"));
        assert!(faq.is_open(&"support"));
    }

    #[test]
    fn single_opening_b_closes_a() {
        let mut steps = Disclosure::new(OpenPolicy::Single);
        steps.toggle(1);
        assert!(steps.is_open(&1));
        steps.toggle(2);
        assert!(!steps.is_open(&1));
        assert!(steps.is_open(&2));
        assert_eq!(steps.open_count(), 1);
    }

    #[test]
    fn single_never_exceeds_one_open() {
        let mut steps = Disclosure::new(OpenPolicy::Single);
        for id in [3, 1, 1, 4, 5, 5, 2, 3] {
            steps.toggle(id);
            assert!(steps.open_count() <= 1);
        }
    }

    #[test]
    fn select_keeps_active_tab_open() {
        let mut tabs = Disclosure::with_open(OpenPolicy::Single, 0usize);
        tabs.select(0);
        assert!(tabs.is_open(&0));
        tabs.select(2);
        assert_eq!(tabs.open_ids().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn reducer_applies_actions_without_touching_previous_state() {
        let before = Rc::new(Disclosure::new(OpenPolicy::Multi));
        let after = before.clone().reduce(DisclosureAction::Toggle("a"));
        assert!(!before.is_open(&"a"));
        assert!(after.is_open(&"a"));
        assert_eq!(after.open_count(), 1);
    }
}
