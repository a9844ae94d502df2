// src/unlock/selection.rs
use super::options::UnlockOptionId;

/// Set of checked unlock options. Members are unique and kept in the
/// order they were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockSelection {
    selected: Vec<UnlockOptionId>,
}

impl Default for UnlockSelection {
    fn default() -> Self {
        Self {
            selected: vec![UnlockOptionId::Current],
        }
    }
}

impl UnlockSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns true if it is now selected.
    pub fn toggle(&mut self, id: UnlockOptionId) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(id);
            true
        }
    }

    /// Back to the initial `{current}` selection
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn contains(&self, id: UnlockOptionId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn can_unlock(&self) -> bool {
        !self.is_empty()
    }

    pub fn ids(&self) -> Vec<UnlockOptionId> {
        self.selected.clone()
    }
}

/// Forward a non-empty selection to the caller, request the dialog close,
/// then reset. Empty selections are ignored and nothing is called.
pub fn confirm_unlock<U, O>(selection: &mut UnlockSelection, on_unlock: U, on_open_change: O) -> bool
where
    U: FnOnce(Vec<UnlockOptionId>),
    O: FnOnce(bool),
{
    if !selection.can_unlock() {
        log::debug!("Unlock requested with nothing selected, ignoring");
        return false;
    }

    on_unlock(selection.ids());
    on_open_change(false);
    selection.reset();
    true
}

/// Request the dialog close and reset, whatever is selected
pub fn cancel_unlock<O>(selection: &mut UnlockSelection, on_open_change: O)
where
    O: FnOnce(bool),
{
    on_open_change(false);
    selection.reset();
}

/// Request the dialog close without touching the selection. Used for
/// backdrop clicks, Escape and the close button.
pub fn dismiss_unlock<O>(selection: &UnlockSelection, on_open_change: O)
where
    O: FnOnce(bool),
{
    log::debug!("Unlock dialog dismissed, keeping {:?}", selection.selected);
    on_open_change(false);
}
