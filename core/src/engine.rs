use chrono::{DateTime, TimeDelta, Utc};
use ndarray::Array2;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from reset to the final reveal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    options: GameOptions,
    values: HiddenField,
    visible: Array2<CellState>,
    started_at: Option<DateTime<Utc>>,
    stopped_at: Option<DateTime<Utc>>,
    mines_left: isize,
    cells_to_open: CellCount,
    won: Option<bool>,
}

impl GameState {
    /// Fresh board whose mines get placed on the first open.
    pub fn new(options: GameOptions, seed: u64, exclusion: StartExclusion) -> Self {
        Self::with_field(options, HiddenField::Pending { seed, exclusion })
    }

    /// Fresh board on a fixed layout, bypassing the player option bounds.
    pub fn with_layout(layout: MineLayout) -> Self {
        let (rows, cols) = layout.size();
        let options = GameOptions::new_unchecked(rows, cols, layout.mine_count());
        Self::with_field(options, HiddenField::Placed(layout))
    }

    fn with_field(options: GameOptions, values: HiddenField) -> Self {
        Self {
            options,
            values,
            visible: Array2::default(options.size().to_nd_index()),
            started_at: None,
            stopped_at: None,
            mines_left: options.mines as isize,
            cells_to_open: options.safe_cell_count(),
            won: None,
        }
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn size(&self) -> Coord2 {
        self.options.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.visible[coords.to_nd_index()]
    }

    pub fn visible(&self) -> &Array2<CellState> {
        &self.visible
    }

    /// Placed mines, `None` until the first cell is opened.
    pub fn layout(&self) -> Option<&MineLayout> {
        self.values.layout()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn stopped_at(&self) -> Option<DateTime<Utc>> {
        self.stopped_at
    }

    /// Mines minus placed flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        self.mines_left
    }

    /// Safe cells still closed; the game is won when this reaches zero.
    pub fn cells_to_open(&self) -> CellCount {
        self.cells_to_open
    }

    pub fn won(&self) -> Option<bool> {
        self.won
    }

    pub fn status(&self) -> GameStatus {
        match (self.won, self.started_at) {
            (Some(true), _) => GameStatus::Won,
            (Some(false), _) => GameStatus::Lost,
            (None, Some(_)) => GameStatus::InProgress,
            (None, None) => GameStatus::NotStarted,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Time played so far, frozen once the game stops.
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        match self.started_at {
            Some(started_at) => (self.stopped_at.unwrap_or(now) - started_at).max(TimeDelta::zero()),
            None => TimeDelta::zero(),
        }
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        u32::try_from(self.elapsed(now).num_seconds()).unwrap_or(u32::MAX)
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Opens a closed or question-marked cell, flooding through empty regions.
    ///
    /// The first open of a game places the mines around it.
    pub fn open(&mut self, coords: Coord2, clock: &impl Clock) -> Result<OpenOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.is_finished() || !self.cell_at(coords).is_openable() {
            return Ok(OpenOutcome::NoChange);
        }

        if let HiddenField::Pending { seed, exclusion } = self.values {
            let layout = RandomMinefieldGenerator::new(seed, coords, exclusion).generate(self.options);
            self.values = HiddenField::Placed(layout);
        }
        let HiddenField::Placed(layout) = &self.values else {
            return Ok(OpenOutcome::NoChange);
        };

        if self.started_at.is_none() {
            let now = clock.now();
            log::debug!("started at {}", now);
            self.started_at = Some(now);
        }

        let flood = flood_reveal(&mut self.visible, layout, coords);
        self.cells_to_open = self.cells_to_open.saturating_sub(flood.opened);

        Ok(if flood.hit_mine {
            self.finish(false, clock);
            OpenOutcome::Explode
        } else if self.cells_to_open == 0 {
            self.finish(true, clock);
            OpenOutcome::Win
        } else {
            OpenOutcome::Safe
        })
    }

    /// Cycles a cell through `Closed -> Flag -> Question -> Closed`.
    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let previous = self.cell_at(coords);
        let next = previous.next_mark();
        if next == previous {
            return Ok(MarkOutcome::NoChange);
        }

        self.visible[coords.to_nd_index()] = next;
        if next == CellState::Flag {
            self.mines_left -= 1;
        } else if previous == CellState::Flag {
            self.mines_left += 1;
        }
        Ok(MarkOutcome::Changed)
    }

    /// Shows the whole truth grid, turning flags on safe cells into wrong flags.
    ///
    /// Does nothing while the mines are still unplaced.
    pub fn reveal_all(&mut self) -> bool {
        let Some(layout) = self.values.layout() else {
            log::warn!("Nothing to reveal, mines are not placed yet");
            return false;
        };

        let visible = Array2::from_shape_fn(self.visible.dim(), |(row, col)| {
            let value = layout[(row as Coord, col as Coord)];
            match self.visible[(row, col)] {
                CellState::Flag | CellState::RevealedWrongFlag if !value.is_mine() => {
                    CellState::RevealedWrongFlag
                }
                _ => CellState::Revealed(value),
            }
        });
        self.visible = visible;
        true
    }

    fn finish(&mut self, won: bool, clock: &impl Clock) {
        if self.is_finished() {
            return;
        }

        let now = clock.now();
        self.won = Some(won);
        self.stopped_at = Some(now);
        log::debug!("{} at {}", if won { "won" } else { "lost" }, now);
    }
}

struct Flood {
    opened: CellCount,
    hit_mine: bool,
}

/// Reveals `start` and, through every zero it uncovers, the openable cells around it.
fn flood_reveal(visible: &mut Array2<CellState>, layout: &MineLayout, start: Coord2) -> Flood {
    let size = layout.size();
    let mut flood = Flood {
        opened: 0,
        hit_mine: false,
    };
    let mut to_visit = vec![start];

    while let Some(coords) = to_visit.pop() {
        let cell = &mut visible[coords.to_nd_index()];
        // queued twice, or flagged since
        if !cell.is_openable() {
            continue;
        }

        let value = layout[coords];
        *cell = CellState::Revealed(value);

        match value {
            BoardValue::Mine => flood.hit_mine = true,
            BoardValue::Number(count) => {
                flood.opened += 1;
                log::trace!("Opened {:?}, mine count: {}", coords, count);

                if count == 0 {
                    to_visit.extend(
                        neighbors(coords, size)
                            .filter(|&pos| visible[pos.to_nd_index()].is_openable()),
                    );
                }
            }
        }
    }
    flood
}

/// Player actions accepted by [`GameEngine::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Reset(GameOptions),
    Open(Coord2),
    Mark(Coord2),
    RevealAll,
}

/// Turns a game state and a player action into the next game state.
#[derive(Clone, Debug)]
pub struct GameEngine<C = SystemClock> {
    clock: C,
    seeds: SmallRng,
    exclusion: StartExclusion,
}

impl GameEngine {
    /// Engine on the wall clock, seeded from the current time.
    pub fn new() -> Self {
        let seed = SystemClock.now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self::with_clock(SystemClock, seed)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GameEngine<C> {
    pub fn with_clock(clock: C, seed: u64) -> Self {
        Self {
            clock,
            seeds: SmallRng::seed_from_u64(seed),
            exclusion: StartExclusion::default(),
        }
    }

    pub fn with_exclusion(mut self, exclusion: StartExclusion) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn exclusion(&self) -> StartExclusion {
        self.exclusion
    }

    /// Starts a new game; every game draws its own placement seed.
    pub fn reset(&mut self, options: GameOptions) -> Result<GameState> {
        options.validate()?;
        let seed: u64 = self.seeds.random();
        log::debug!("New {}x{} game with {} mines", options.rows, options.cols, options.mines);
        Ok(GameState::new(options, seed, self.exclusion))
    }

    pub fn open(&self, state: &GameState, coords: Coord2) -> Result<GameState> {
        let mut next = state.clone();
        next.open(coords, &self.clock)?;
        Ok(next)
    }

    pub fn mark(&self, state: &GameState, coords: Coord2) -> Result<GameState> {
        let mut next = state.clone();
        next.mark(coords)?;
        Ok(next)
    }

    pub fn reveal_all(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        next.reveal_all();
        next
    }

    pub fn apply(&mut self, state: &GameState, action: Action) -> Result<GameState> {
        match action {
            Action::Reset(options) => self.reset(options),
            Action::Open(coords) => self.open(state, coords),
            Action::Mark(coords) => self.mark(state, coords),
            Action::RevealAll => Ok(self.reveal_all(state)),
        }
    }
}
