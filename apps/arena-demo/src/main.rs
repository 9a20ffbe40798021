//! Drives the player layer headlessly at a fixed frame rate.
//!
//! Usage: `arena-demo [--json] [config.json]`
//!
//! A short scripted match is played on an 8×8 board: players move, one dies,
//! one leaves, and a late joiner drops in at a fixed pixel position. Each
//! rendered frame is summarised on stdout, or dumped in full with `--json`.

use serde::Serialize;

use arena_core::{
    Action, ArenaError, FillStyle, GameState, GridPosition, Layer, Player, RenderConfig,
    RenderState, StateKey, Store,
};
use arena_renderer::{PlayerLayer, RecordingSurface, RenderFrame, Viewport};

const FRAME_RATE: f64 = 60.0;
const FRAMES: u32 = 150;

#[derive(Debug, Default)]
struct Options {
    json: bool,
    config_path: Option<String>,
}

fn parse_args() -> Options {
    let mut options = Options::default();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            options.json = true;
        } else {
            options.config_path = Some(arg);
        }
    }
    options
}

#[derive(Serialize)]
struct FrameSummary<'a> {
    frame: u32,
    dirty: bool,
    tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    drawn: Option<&'a RenderFrame>,
}

/// Actions to dispatch before a given frame.
fn script(players: &[Player]) -> Result<Vec<(u32, Action)>, ArenaError> {
    let key = StateKey::Player;
    let late = Player::new("dana", GridPosition::new(7, 0)).with_fill("#f0c020".parse()?);
    let late_id = late.id;

    Ok(vec![
        (
            20,
            Action::MovePlayer {
                key,
                id: players[0].id,
                position: GridPosition::new(0, 5),
            },
        ),
        (
            20,
            Action::MovePlayer {
                key,
                id: players[1].id,
                position: GridPosition::new(6, 6),
            },
        ),
        (60, Action::KillPlayer { key, id: players[2].id }),
        (90, Action::RemovePlayer { key, id: players[1].id }),
        (
            100,
            Action::SpawnPlayer {
                key,
                player: late,
                render_state: Some(RenderState::new(late_id, 0.0, 800.0, 40.0)),
            },
        ),
    ])
}

fn main() -> Result<(), ArenaError> {
    env_logger::init();
    let options = parse_args();

    let config = match &options.config_path {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    log::info!(
        "player speed {} px/s, radius ratio {}",
        config.player_speed,
        config.radius_ratio
    );

    let players = vec![
        Player::new("ana", GridPosition::new(0, 0)).with_fill("#e04040".parse()?),
        Player::new("ben", GridPosition::new(3, 3)).with_fill("#40a0e0".parse()?),
        Player::new("cyd", GridPosition::new(5, 1)).with_fill("#40c060".parse()?),
    ];
    let mut store = Store::new();
    store.insert_state(
        StateKey::Player,
        GameState::new(8, 8).with_players(players.clone()),
    );

    let mut layer = PlayerLayer::new(Viewport::new(800.0, 800.0), RecordingSurface::new(), config);
    let mut scheduled = script(&players)?.into_iter().peekable();
    let dt = 1.0 / FRAME_RATE;

    for frame in 0..FRAMES {
        while let Some((_, action)) = scheduled.next_if(|(at, _)| *at == frame) {
            store.dispatch(action)?;
        }

        layer.update(&mut store)?;
        layer.render(dt);

        let drawn = layer.base_mut().element_mut().take_frames();
        if drawn.is_empty() {
            continue;
        }
        for recorded in &drawn {
            let summary = FrameSummary {
                frame,
                dirty: layer.is_dirty(),
                tokens: layer.render_states().len(),
                drawn: options.json.then_some(recorded),
            };
            println!("{}", serde_json::to_string(&summary)?);
        }
    }

    log::info!(
        "done: {} actions dispatched, {} players alive, {} tokens live",
        store.dispatch_count(),
        store.get_state(StateKey::Player)?.alive_count(),
        layer.render_states().len()
    );
    Ok(())
}
