//! Simulation engine: the core of the game.
//!
//! `Simulation` owns the grid, both entities and the random stream,
//! processes player commands, runs all systems, and produces
//! `SimSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::path::Path;

use glam::DVec2;
use rand_chacha::ChaCha8Rng;

use blockcraft_core::commands::PlayerCommand;
use blockcraft_core::constants::{
    DEFAULT_SEED, DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH, HOTBAR, MAX_TICK_DT,
};
use blockcraft_core::state::SimSnapshot;
use blockcraft_core::tile::TileKind;
use blockcraft_core::types::SimTime;
use blockcraft_world::{generate, seeded_stream, Grid};

use crate::entity::{Creature, Mobile, Player};
use crate::persistence::{self, SaveResult};
use crate::systems;
use crate::systems::creature_ai::StepOutcome;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// World seed. Same seed and size = same world and same creature path.
    pub seed: i64,
    pub width: i32,
    pub height: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the world size. Both dimensions are raised to at least 1.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width.max(1);
        self.height = height.max(1);
        self
    }
}

/// A mine or place request waiting for the interaction pass of a tick.
/// Places carry the tile selected when the command was drained.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingAction {
    Mine { x: i32, y: i32 },
    Place { x: i32, y: i32, kind: TileKind },
}

/// The simulation. Owns the world and all sim state.
#[derive(Debug, Clone)]
pub struct Simulation {
    seed: i64,
    grid: Grid,
    player: Player,
    creature: Creature,
    hotbar: Vec<TileKind>,
    rng: ChaCha8Rng,
    time: SimTime,
    command_queue: VecDeque<PlayerCommand>,
    move_intent: Option<DVec2>,
    pending_actions: Vec<PendingAction>,
}

impl Simulation {
    /// Generate a world from `config` and spawn the player and creature.
    pub fn new(config: SimConfig) -> Self {
        let mut grid = Grid::new(config.width, config.height);
        let mut rng = seeded_stream(config.seed);
        generate(&mut grid, &mut rng);

        let player = world_setup::spawn_player(&grid);
        let creature = world_setup::spawn_creature(player.position());
        log::debug!(
            "generated {}x{} world from seed {}, player at {}",
            grid.width(),
            grid.height(),
            config.seed,
            player.position()
        );

        Self {
            seed: config.seed,
            grid,
            player,
            creature,
            hotbar: HOTBAR.to_vec(),
            rng,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            move_intent: None,
            pending_actions: Vec::new(),
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn hotbar(&self) -> &[TileKind] {
        &self.hotbar
    }

    pub fn selected_index(&self) -> usize {
        self.player.selected_index()
    }

    /// Tile in the selected hotbar slot.
    pub fn selected_tile(&self) -> TileKind {
        self.hotbar
            .get(self.player.selected_index())
            .copied()
            .unwrap_or(TileKind::Air)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Walk the player toward `(dx, dy)` for `dt` seconds.
    pub fn move_player(&mut self, dx: f64, dy: f64, dt: f64) {
        self.player.walk(&self.grid, DVec2::new(dx, dy), dt);
    }

    /// Mine the tile at `(x, y)`. Returns whether anything changed.
    pub fn mine(&mut self, x: i32, y: i32) -> bool {
        systems::interaction::mine(&mut self.grid, &mut self.player, x, y)
    }

    /// Place the selected hotbar tile at `(x, y)`.
    pub fn place(&mut self, x: i32, y: i32) -> bool {
        let kind = self.selected_tile();
        self.place_kind(x, y, kind)
    }

    /// Place a specific tile kind at `(x, y)`, regardless of selection.
    pub fn place_kind(&mut self, x: i32, y: i32, kind: TileKind) -> bool {
        systems::interaction::place(&mut self.grid, &mut self.player, x, y, kind)
    }

    /// Select hotbar slot `index`, wrapping in both directions.
    pub fn set_selected_index(&mut self, index: i32) {
        self.player.set_selected_index(index, self.hotbar.len());
    }

    /// Move the selection by `delta` slots, wrapping in both directions.
    pub fn cycle_selection(&mut self, delta: i32) {
        let len = self.hotbar.len() as i64;
        if len == 0 {
            return;
        }
        let index = (self.player.selected_index() as i64 + delta as i64).rem_euclid(len);
        self.set_selected_index(index as i32);
    }

    /// Run the creature's wandering behaviour for `dt` seconds.
    pub fn update_creature(&mut self, dt: f64) -> StepOutcome {
        systems::creature_ai::run(
            &mut self.creature,
            &self.grid,
            &mut self.rng,
            self.player.position(),
            dt,
        )
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `dt` is clamped to `[0, MAX_TICK_DT]`; a non-finite `dt` counts as 0.
    pub fn tick(&mut self, dt: f64) -> SimSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_TICK_DT)
        } else {
            0.0
        };

        self.process_commands();
        self.run_systems(dt);
        self.time.advance(dt);

        self.snapshot()
    }

    /// Snapshot of the current state without advancing time.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(
            self.time,
            self.seed,
            &self.grid,
            &self.player,
            &self.creature,
            &self.hotbar,
        )
    }

    /// Encode the state in the `BC2D:1` text format.
    pub fn encode(&self) -> String {
        persistence::encode(self)
    }

    /// Decode a simulation from `BC2D:1` text.
    pub fn decode(text: &str) -> SaveResult<Simulation> {
        persistence::decode(text)
    }

    /// Save to `path`, replacing any previous file atomically.
    pub fn save(&self, path: impl AsRef<Path>) -> SaveResult<()> {
        persistence::save_to_file(self, path.as_ref())
    }

    /// Load a simulation from `path`.
    pub fn load(path: impl AsRef<Path>) -> SaveResult<Simulation> {
        persistence::load_from_file(path.as_ref())
    }

    /// Replace this simulation with the one saved at `path`.
    /// On error `self` is left untouched.
    pub fn restore(&mut self, path: impl AsRef<Path>) -> SaveResult<()> {
        *self = Self::load(path)?;
        Ok(())
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Put the creature back next to the player, as on a fresh spawn.
    pub(crate) fn respawn_creature(&mut self) {
        self.creature = world_setup::spawn_creature(self.player.position());
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::MovePlayer { dx, dy } => {
                self.move_intent = Some(DVec2::new(dx, dy));
            }
            PlayerCommand::Mine { x, y } => {
                self.pending_actions.push(PendingAction::Mine { x, y });
            }
            PlayerCommand::Place { x, y } => {
                let kind = self.selected_tile();
                self.pending_actions.push(PendingAction::Place { x, y, kind });
            }
            PlayerCommand::SelectSlot { index } => {
                self.set_selected_index(index);
            }
            PlayerCommand::CycleSlot { delta } => {
                self.cycle_selection(delta);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Player movement
        if let Some(direction) = self.move_intent.take() {
            self.player.walk(&self.grid, direction, dt);
        }
        // 2. Creature AI
        self.update_creature(dt);
        // 3. Mining and placing, in command order
        for action in std::mem::take(&mut self.pending_actions) {
            match action {
                PendingAction::Mine { x, y } => {
                    self.mine(x, y);
                }
                PendingAction::Place { x, y, kind } => {
                    self.place_kind(x, y, kind);
                }
            }
        }
    }
}
