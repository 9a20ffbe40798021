use std::collections::HashSet;

use arena_core::{
    Action, GameState, Layer, LayerType, PlayerId, RenderConfig, RenderState, Result, StateKey,
    Store,
};

use crate::animation::{is_settled, step_towards};
use crate::base::BaseLayer;
use crate::layout::{FinalRenderState, GridLayout};
use crate::reconcile::{reconcile, Targets};
use crate::surface::{draw_arc, ArcShape, Container, Surface};

/// Draws every player as a filled circle and glides tokens between grid cells.
///
/// `update()` turns the player slice of the store into pixel targets;
/// `render(dt)` moves each live token toward its target at
/// [`RenderConfig::player_speed`] and redraws the surface while anything is
/// still moving.
#[derive(Debug)]
pub struct PlayerLayer<C, S> {
    base: BaseLayer<C, S>,
    config: RenderConfig,
    /// Latest targets, replaced wholesale on every dirty update.
    targets: Targets,
    /// Live tokens in draw order. `None` until the first render.
    render_states: Option<Vec<RenderState>>,
    /// Immediate tokens received before the first render.
    pending: Vec<RenderState>,
    /// Tokens merged since the last render; they hold still for one pass.
    fresh: HashSet<PlayerId>,
    /// Targets were carried over without layout; recompute once there is area.
    geometry_stale: bool,
    dirty: bool,
}

impl<C: Container, S: Surface> PlayerLayer<C, S> {
    pub fn new(container: C, element: S, config: RenderConfig) -> Self {
        Self {
            base: BaseLayer::new(LayerType::Player, StateKey::Player, container, element),
            config,
            targets: Targets::new(),
            render_states: None,
            pending: Vec::new(),
            fresh: HashSet::new(),
            geometry_stale: false,
            dirty: false,
        }
    }

    pub fn base(&self) -> &BaseLayer<C, S> {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseLayer<C, S> {
        &mut self.base
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Live tokens in draw order. Empty before the first render.
    pub fn render_states(&self) -> &[RenderState] {
        self.render_states.as_deref().unwrap_or(&[])
    }

    pub fn render_state(&self, id: &PlayerId) -> Option<&RenderState> {
        self.render_states().iter().find(|r| r.stone == *id)
    }

    fn compute_targets(&self, state: &GameState) -> Option<Targets> {
        let size = self.base.container_size();
        let layout = GridLayout::new(size, state.columns, state.rows, self.config.radius_ratio)?;
        let entries = state
            .players
            .iter()
            .map(|player| layout.final_render_state(player))
            .collect();
        Some(Targets::from_states(entries))
    }

    fn draw(&mut self) {
        let Some(list) = self.render_states.as_ref() else {
            return;
        };
        let element = self.base.element_mut();
        let mut drawn = 0;
        for rstate in list {
            let Some(fstate) = self.targets.get(&rstate.stone) else {
                continue;
            };
            if !fstate.stone.alive {
                continue;
            }
            let arc = ArcShape::circle(fstate.stone.fill_style, rstate.x, rstate.y, rstate.radius);
            if draw_arc(&mut *element, &arc) {
                drawn += 1;
            }
        }
        log::trace!("drew {} of {} player tokens", drawn, list.len());
    }
}

impl<C: Container, S: Surface> Layer for PlayerLayer<C, S> {
    fn layer_type(&self) -> LayerType {
        self.base.layer_type
    }

    fn state_key(&self) -> StateKey {
        self.base.state_key
    }

    fn update(&mut self, store: &mut Store) -> Result<()> {
        let key = self.base.state_key;
        let state = store.get_state(key)?;
        let state_dirty = state.dirty;
        if !state_dirty && !self.geometry_stale {
            return Ok(());
        }

        match self.compute_targets(state) {
            Some(targets) => {
                log::debug!("computed {} player targets", targets.len());
                self.targets = targets;
                self.geometry_stale = false;
            }
            None => {
                if !state_dirty {
                    // Still no area to lay out on, and nothing new to track.
                    return Ok(());
                }
                log::warn!(
                    "no player geometry for grid {}x{} in container {:?}, keeping placements",
                    state.columns,
                    state.rows,
                    self.base.container_size()
                );
                self.targets = self.targets.carry_over(&state.players);
                self.geometry_stale = true;
            }
        }

        if state_dirty {
            let incoming = store.take_new_render_states(key)?;
            if !incoming.is_empty() {
                log::debug!("merging {} immediate player tokens", incoming.len());
                match self.render_states.as_mut() {
                    Some(list) => {
                        self.fresh.extend(incoming.iter().map(|r| r.stone));
                        merge(list, incoming);
                    }
                    None => self.pending.extend(incoming),
                }
            }
            store.dispatch(Action::update_dirty(false, key))?;
        }

        self.dirty = true;
        Ok(())
    }

    fn render(&mut self, dt: f64) {
        if !self.dirty {
            return;
        }

        match self.render_states.as_mut() {
            None => {
                let mut list: Vec<RenderState> = self
                    .targets
                    .iter()
                    .map(FinalRenderState::to_render_state)
                    .collect();
                merge(&mut list, std::mem::take(&mut self.pending));
                self.render_states = Some(list);
            }
            Some(list) => {
                let max_step = self.config.player_speed * dt;
                self.dirty = advance(list, &self.targets, &self.fresh, max_step);
            }
        }
        self.fresh.clear();

        self.base.fit_element();
        self.draw();
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Insert tokens, replacing any live token of the same player.
fn merge(list: &mut Vec<RenderState>, incoming: Vec<RenderState>) {
    for rstate in incoming {
        match list.iter_mut().find(|r| r.stone == rstate.stone) {
            Some(existing) => *existing = rstate,
            None => list.push(rstate),
        }
    }
}

/// One animation pass. Returns whether any token is still short of its target.
fn advance(
    list: &mut Vec<RenderState>,
    targets: &Targets,
    hold: &HashSet<PlayerId>,
    max_step: f64,
) -> bool {
    let plan = reconcile(list.as_slice(), targets);
    let mut settled = 0;

    for &(i, id) in &plan.continuing {
        let Some(fstate) = targets.get(&id) else {
            continue;
        };
        let rstate = &mut list[i];
        rstate.radius = fstate.radius;

        let target = fstate.target();
        if is_settled(rstate.center(), target) {
            settled += 1;
            continue;
        }
        if hold.contains(&id) {
            continue;
        }

        let next = step_towards(rstate.center(), target, max_step);
        rstate.x = next.x;
        rstate.y = next.y;
    }

    if !plan.removed.is_empty() {
        log::trace!("pruning {} player tokens", plan.removed.len());
        list.retain(|r| targets.contains(&r.stone));
    }

    // Players without a token appear on their target.
    for id in &plan.added {
        if let Some(fstate) = targets.get(id) {
            list.push(fstate.to_render_state());
            settled += 1;
        }
    }

    settled < list.len()
}
