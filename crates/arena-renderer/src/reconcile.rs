use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use arena_core::{Player, PlayerId, RenderState};

use crate::layout::FinalRenderState;

/// Target render states in player order, indexed by player id.
#[derive(Debug, Clone, Default)]
pub struct Targets {
    entries: Vec<FinalRenderState>,
    index: HashMap<PlayerId, usize>,
}

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of targets. If an id repeats, the first entry wins
    /// and later ones are dropped.
    pub fn from_states(states: Vec<FinalRenderState>) -> Self {
        let mut entries = Vec::with_capacity(states.len());
        let mut index = HashMap::with_capacity(states.len());
        for fstate in states {
            if let Entry::Vacant(slot) = index.entry(fstate.stone.id) {
                slot.insert(entries.len());
                entries.push(fstate);
            }
        }
        Self { entries, index }
    }

    /// Rebuild for `players` without fresh geometry. Known players keep their
    /// previous placement, unknown ones sit at the origin with zero radius.
    pub fn carry_over(&self, players: &[Player]) -> Self {
        let entries = players
            .iter()
            .map(|player| {
                let (x, y, radius) = self
                    .get(&player.id)
                    .map_or((0.0, 0.0, 0.0), |prev| (prev.x, prev.y, prev.radius));
                FinalRenderState {
                    x,
                    y,
                    radius,
                    stone: player.clone(),
                }
            })
            .collect();
        Self::from_states(entries)
    }

    pub fn get(&self, id: &PlayerId) -> Option<&FinalRenderState> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FinalRenderState> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How the live render states line up against a new set of targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    /// Live entries that still have a target: `(index into live list, player)`.
    pub continuing: Vec<(usize, PlayerId)>,
    /// Live entries whose player has no target any more.
    pub removed: Vec<PlayerId>,
    /// Targets with no live entry.
    pub added: Vec<PlayerId>,
}

impl Reconciliation {
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Classify every player as continuing, removed or added.
pub fn reconcile(current: &[RenderState], targets: &Targets) -> Reconciliation {
    let mut result = Reconciliation::default();
    let mut live = HashSet::with_capacity(current.len());

    for (i, rstate) in current.iter().enumerate() {
        live.insert(rstate.stone);
        if targets.contains(&rstate.stone) {
            result.continuing.push((i, rstate.stone));
        } else {
            result.removed.push(rstate.stone);
        }
    }

    result.added = targets
        .iter()
        .map(|fstate| fstate.stone.id)
        .filter(|id| !live.contains(id))
        .collect();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridLayout;
    use arena_core::{GridPosition, Player, Size};

    fn targets_for(players: &[Player]) -> Targets {
        let layout = GridLayout::new(Size::new(400.0, 400.0), 4, 4, 0.8).unwrap();
        Targets::from_states(players.iter().map(|p| layout.final_render_state(p)).collect())
    }

    #[test]
    fn test_classifies_all_three() {
        let kept = Player::new("kept", GridPosition::new(0, 0));
        let gone = Player::new("gone", GridPosition::new(1, 1));
        let fresh = Player::new("fresh", GridPosition::new(2, 2));

        let current = vec![
            RenderState::new(gone.id, 150.0, 150.0, 40.0),
            RenderState::new(kept.id, 50.0, 50.0, 40.0),
        ];
        let targets = targets_for(&[kept.clone(), fresh.clone()]);

        let result = reconcile(&current, &targets);
        assert_eq!(result.continuing, vec![(1, kept.id)]);
        assert_eq!(result.removed, vec![gone.id]);
        assert_eq!(result.added, vec![fresh.id]);
        assert!(!result.is_unchanged());
    }

    #[test]
    fn test_same_players_unchanged() {
        let a = Player::new("a", GridPosition::new(0, 0));
        let b = Player::new("b", GridPosition::new(3, 3));
        let targets = targets_for(&[a.clone(), b.clone()]);
        let current: Vec<RenderState> = targets.iter().map(|f| f.to_render_state()).collect();

        let result = reconcile(&current, &targets);
        assert!(result.is_unchanged());
        assert_eq!(result.continuing.len(), 2);
    }

    #[test]
    fn test_repeated_player_kept_once() {
        let a = Player::new("a", GridPosition::new(0, 0));
        let mut moved = a.clone();
        moved.position = GridPosition::new(3, 3);
        let targets = targets_for(&[a.clone(), moved]);

        assert_eq!(targets.len(), 1);
        assert!((targets.get(&a.id).unwrap().x - 50.0).abs() < 1e-10);
        let result = reconcile(&[], &targets);
        assert_eq!(result.added, vec![a.id]);
    }

    #[test]
    fn test_carry_over_keeps_placement() {
        let mut a = Player::new("a", GridPosition::new(1, 2));
        let gone = Player::new("gone", GridPosition::new(0, 0));
        let fresh = Player::new("fresh", GridPosition::new(3, 3));
        let previous = targets_for(&[a.clone(), gone.clone()]);

        a.kill();
        a.position = GridPosition::new(0, 0);
        let targets = previous.carry_over(&[a.clone(), fresh.clone()]);

        assert_eq!(targets.len(), 2);
        assert!(!targets.contains(&gone.id));
        let kept = targets.get(&a.id).unwrap();
        assert!((kept.x - 250.0).abs() < 1e-10);
        assert!((kept.y - 150.0).abs() < 1e-10);
        assert!((kept.radius - 40.0).abs() < 1e-10);
        assert!(!kept.stone.alive);
        let placed = targets.get(&fresh.id).unwrap();
        assert_eq!((placed.x, placed.y, placed.radius), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_targets_lookup() {
        let a = Player::new("a", GridPosition::new(1, 2));
        let targets = targets_for(&[a.clone()]);
        let fstate = targets.get(&a.id).unwrap();
        assert!((fstate.x - 250.0).abs() < 1e-10);
        assert!((fstate.y - 150.0).abs() < 1e-10);
        assert!(targets.get(&Player::new("x", GridPosition::new(0, 0)).id).is_none());
    }
}
