//! Reveal animation states

/// The four reveal states, strictly cyclic:
/// `Initial → ExpandingForward → Final → ContractingBackward → Initial`.
///
/// Exactly one is active at a time; it governs both which geometry is
/// drawn and how touch and measurement requests are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    /// Collapsed: the view occupies its originally assigned box
    #[default]
    Initial,
    /// Growing toward the parent's content box
    ExpandingForward,
    /// Shrinking back toward the assigned box
    ContractingBackward,
    /// Fully revealed: the view fills the parent's content box
    Final,
}

impl RevealState {
    /// True while either animation is in flight
    pub fn is_animating(self) -> bool {
        matches!(
            self,
            RevealState::ExpandingForward | RevealState::ContractingBackward
        )
    }
}
