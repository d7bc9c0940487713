//! Dirty/clean state machine gating the hull and its derived quantities.
//!
//! Transition table:
//!
//! | event                     | Clean  | Dirty |
//! |---------------------------|--------|-------|
//! | mutation                  | Dirty  | Dirty |
//! | tail removal              | Clean  | Dirty |
//! | `update()`                | Clean  | Clean |
//! | `clear_and_update()`      | Clean  | Clean |

/// Whether cached hull data reflects the raw vertex buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HullState {
    #[default]
    Clean,
    Dirty,
}

/// Events driving `HullState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullEvent {
    /// Any write into the vertex buffer except dropping the last vertex.
    Mutation,
    /// Dropping the last logical vertex: the rest of the hull keeps its order.
    TailRemoval,
    /// Hull recomputed (or trivially empty).
    Updated,
}

impl HullState {
    #[inline]
    pub fn on(self, event: HullEvent) -> HullState {
        match event {
            HullEvent::Mutation => HullState::Dirty,
            HullEvent::TailRemoval => self,
            HullEvent::Updated => HullState::Clean,
        }
    }

    #[inline]
    pub fn is_clean(self) -> bool {
        self == HullState::Clean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table() {
        use HullEvent::*;
        use HullState::*;
        let cases = [
            (Clean, Mutation, Dirty),
            (Dirty, Mutation, Dirty),
            (Clean, TailRemoval, Clean),
            (Dirty, TailRemoval, Dirty),
            (Clean, Updated, Clean),
            (Dirty, Updated, Clean),
        ];
        for (from, ev, to) in cases {
            assert_eq!(from.on(ev), to, "{from:?} --{ev:?}-->");
        }
        assert!(HullState::default().is_clean());
    }
}
