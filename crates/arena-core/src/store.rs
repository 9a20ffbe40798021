use std::collections::HashMap;

use crate::action::Action;
use crate::error::{ArenaError, Result};
use crate::layer::StateKey;
use crate::state::{GameState, RenderState};

/// Holds the authoritative game state, one [`GameState`] slice per key.
///
/// All writes go through [`Store::dispatch`]; every applied action is kept in
/// a journal in dispatch order.
#[derive(Debug, Default)]
pub struct Store {
    states: HashMap<StateKey, GameState>,
    journal: Vec<Action>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            journal: Vec::new(),
        }
    }

    pub fn insert_state(&mut self, key: StateKey, state: GameState) {
        self.states.insert(key, state);
    }

    pub fn get_state(&self, key: StateKey) -> Result<&GameState> {
        self.states.get(&key).ok_or(ArenaError::UnknownStateKey(key))
    }

    /// Move the queued immediate render states out of a slice, oldest first.
    pub fn take_new_render_states(&mut self, key: StateKey) -> Result<Vec<RenderState>> {
        let state = self
            .states
            .get_mut(&key)
            .ok_or(ArenaError::UnknownStateKey(key))?;
        Ok(std::mem::take(&mut state.new_render_states))
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let key = action.key();
        let state = self
            .states
            .get_mut(&key)
            .ok_or(ArenaError::UnknownStateKey(key))?;
        action.apply(state)?;
        log::debug!("{} ({:?})", action.description(), key);
        self.journal.push(action);
        Ok(())
    }

    // ── Journal ──────────────────────────────────────────────────────

    pub fn journal(&self) -> &[Action] {
        &self.journal
    }

    pub fn dispatch_count(&self) -> usize {
        self.journal.len()
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }
}
