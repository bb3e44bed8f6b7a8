/// Which single item on a page is expanded, selected or hovered.
///
/// At most one id is active; activating another id replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState<Id> {
    active: Option<Id>,
}

impl<Id> Default for ViewState<Id> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<Id: PartialEq> ViewState<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses `id` if it is the active one, otherwise makes it active.
    pub fn toggle(self, id: Id) -> Self {
        if self.active.as_ref() == Some(&id) {
            Self { active: None }
        } else {
            Self { active: Some(id) }
        }
    }

    pub fn activate(self, id: Id) -> Self {
        Self { active: Some(id) }
    }

    pub fn clear(self) -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &Id) -> bool {
        self.active.as_ref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state_strategy() -> impl Strategy<Value = ViewState<u8>> {
        prop::option::of(0u8..8).prop_map(|active| ViewState { active })
    }

    #[test]
    fn toggling_the_open_item_collapses_it() {
        let open = ViewState::new().toggle("faq-2");
        assert!(open.is_active(&"faq-2"));
        let closed = open.toggle("faq-2");
        assert_eq!(closed.active(), None);
    }

    #[test]
    fn hover_enter_and_leave() {
        let hovered = ViewState::new().activate("Windows");
        assert!(hovered.is_active(&"Windows"));
        assert!(!hovered.is_active(&"Linux"));
        assert_eq!(hovered.clear(), ViewState::new());
    }

    proptest! {
        #[test]
        fn toggle_is_involutive(state in state_strategy(), id in 0u8..8) {
            // With another item open the first toggle replaces it, so the pair
            // cannot restore that item.
            prop_assume!(state.active().map_or(true, |open| *open == id));
            prop_assert_eq!(state.clone().toggle(id).toggle(id), state);
        }

        #[test]
        fn only_the_last_opened_item_is_active(state in state_strategy(), a in 0u8..8, b in 0u8..8) {
            prop_assume!(a != b);
            let after = state.toggle(a).toggle(b);
            prop_assert_eq!(after.active(), Some(&b));
            prop_assert!(!after.is_active(&a));
        }
    }
}
