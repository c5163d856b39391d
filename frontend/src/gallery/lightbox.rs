/// Index one step forward in a ring of `len` items.
pub fn wrap_forward(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Index one step back in a ring of `len` items.
pub fn wrap_back(index: usize, len: usize) -> usize {
    (index % len + len - 1) % len
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// What a lightbox operation did, so the caller knows whether to take or
/// give back the scroll lock and key listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Moved,
    Closed,
    Unchanged,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open(_))
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            LightboxState::Open(i) => Some(i),
            LightboxState::Closed => None,
        }
    }

    /// Open at position `index` of a visible set holding `len` images.
    /// Out-of-range activations are dropped.
    pub fn activate(&mut self, index: usize, len: usize) -> Transition {
        if index >= len {
            return Transition::Unchanged;
        }
        match *self {
            LightboxState::Closed => {
                *self = LightboxState::Open(index);
                Transition::Opened
            }
            LightboxState::Open(current) if current == index => Transition::Unchanged,
            LightboxState::Open(_) => {
                *self = LightboxState::Open(index);
                Transition::Moved
            }
        }
    }

    pub fn next(&mut self, len: usize) -> Transition {
        self.step(len, wrap_forward)
    }

    pub fn previous(&mut self, len: usize) -> Transition {
        self.step(len, wrap_back)
    }

    pub fn dismiss(&mut self) -> Transition {
        match *self {
            LightboxState::Open(_) => {
                *self = LightboxState::Closed;
                Transition::Closed
            }
            LightboxState::Closed => Transition::Unchanged,
        }
    }

    fn step(&mut self, len: usize, advance: fn(usize, usize) -> usize) -> Transition {
        let Some(current) = self.index() else {
            return Transition::Unchanged;
        };
        // A filter change can race a pending click and leave nothing to show.
        if len == 0 {
            return self.dismiss();
        }
        let next = advance(current, len);
        *self = LightboxState::Open(next);
        if next == current {
            Transition::Unchanged
        } else {
            Transition::Moved
        }
    }

    /// "3 / 9" style position label for the overlay.
    pub fn counter_label(&self, len: usize) -> Option<String> {
        self.index().map(|i| format!("{} / {}", i + 1, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(LightboxState::default(), LightboxState::Closed);
        assert!(!LightboxState::default().is_open());
    }

    #[test]
    fn activate_opens_then_moves() {
        let mut state = LightboxState::Closed;
        assert_eq!(state.activate(2, 4), Transition::Opened);
        assert_eq!(state, LightboxState::Open(2));
        assert_eq!(state.activate(0, 4), Transition::Moved);
        assert_eq!(state, LightboxState::Open(0));
        assert_eq!(state.activate(0, 4), Transition::Unchanged);
    }

    #[test]
    fn activate_out_of_range_is_ignored() {
        let mut state = LightboxState::Closed;
        assert_eq!(state.activate(0, 0), Transition::Unchanged);
        assert_eq!(state.activate(5, 3), Transition::Unchanged);
        assert_eq!(state, LightboxState::Closed);
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = LightboxState::Open(0);
        assert_eq!(state.previous(5), Transition::Moved);
        assert_eq!(state, LightboxState::Open(4));
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut state = LightboxState::Open(4);
        assert_eq!(state.next(5), Transition::Moved);
        assert_eq!(state, LightboxState::Open(0));
    }

    #[test]
    fn single_image_wraps_to_itself() {
        let mut state = LightboxState::Open(0);
        assert_eq!(state.next(1), Transition::Unchanged);
        assert_eq!(state, LightboxState::Open(0));
        assert_eq!(state.previous(1), Transition::Unchanged);
        assert_eq!(state, LightboxState::Open(0));
    }

    #[test]
    fn navigation_while_closed_does_nothing() {
        let mut state = LightboxState::Closed;
        assert_eq!(state.next(3), Transition::Unchanged);
        assert_eq!(state.previous(3), Transition::Unchanged);
        assert_eq!(state, LightboxState::Closed);
    }

    #[test]
    fn navigating_an_empty_set_dismisses() {
        let mut state = LightboxState::Open(1);
        assert_eq!(state.next(0), Transition::Closed);
        assert_eq!(state, LightboxState::Closed);

        let mut state = LightboxState::Open(0);
        assert_eq!(state.previous(0), Transition::Closed);
    }

    #[test]
    fn stale_index_is_pulled_back_in_range() {
        let mut state = LightboxState::Open(7);
        state.previous(3);
        assert!(matches!(state, LightboxState::Open(i) if i < 3));
        let mut state = LightboxState::Open(7);
        state.next(3);
        assert!(matches!(state, LightboxState::Open(i) if i < 3));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut state = LightboxState::Open(3);
        assert_eq!(state.dismiss(), Transition::Closed);
        assert_eq!(state.dismiss(), Transition::Unchanged);
        assert_eq!(state, LightboxState::Closed);
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(LightboxState::Open(2).counter_label(9).as_deref(), Some("3 / 9"));
        assert_eq!(LightboxState::Closed.counter_label(9), None);
    }

    #[test]
    fn full_cycle_visits_every_index_once() {
        let len = 6;
        let mut state = LightboxState::Open(0);
        let mut seen = vec![0];
        for _ in 1..len {
            state.next(len);
            seen.push(state.index().unwrap());
        }
        seen.sort();
        assert_eq!(seen, (0..len).collect::<Vec<_>>());
        state.next(len);
        assert_eq!(state, LightboxState::Open(0));
    }
}
