//! The command-driven [`Session`]: [`Command`] in, [`Event`] out.

use gridseek_core::{Assignment, Grid, Point, TypeKind, compute_frame};
use gridseek_paths::{Search, SearchState, Variant};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::recording::Recording;

// ---------------------------------------------------------------------------
// Command / Event
// ---------------------------------------------------------------------------

/// An input to [`Session::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Set the kind of one cell. Only Default, Wall, Start and Target.
    Assign { pos: Point, kind: TypeKind },
    /// Clear the grid and drop any search.
    Reset,
    /// Run a fresh search to completion.
    Run(Variant),
    /// Begin a fresh search and perform its first step.
    Start(Variant),
    /// Advance the current search by one step.
    Step,
}

/// The result of a successful [`Session::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The assignment verdict. Rejections leave the grid untouched.
    Assigned(Assignment),
    Reset,
    /// The search advanced and is still running.
    Progress(SearchState),
    /// The search ended. `path_len` is the hop count, `0` on failure.
    Finished { state: SearchState, path_len: usize },
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A grid plus at most one search over it.
///
/// Editing is refused while a search is running; `Reset`, `Run` and `Start`
/// cancel a running search. The marks of a finished search stay on the grid
/// until the next `Run`, `Start` or `Reset`.
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    variant: Variant,
    search: Option<Search<Variant>>,
    recording: Recording,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let grid = Grid::new(config.columns, config.rows)?;
        log::debug!("new session on {}x{} grid", config.columns, config.rows);
        let recording = Recording::new(&grid);
        Ok(Self {
            grid,
            variant: config.variant,
            search: None,
            recording,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The variant of the last search, or the configured one before any.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// State of the current search, `Idle` when there is none.
    pub fn state(&self) -> SearchState {
        self.search.as_ref().map_or(SearchState::Idle, Search::state)
    }

    /// Whether a search is in flight and the grid is locked.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.state() == SearchState::Running
    }

    /// Path of the last successful search, Start excluded.
    pub fn path(&self) -> &[Point] {
        self.search.as_ref().map(|s| s.path()).unwrap_or_default()
    }

    /// Cells visited by the current search, in order.
    pub fn visited_order(&self) -> &[Point] {
        self.search.as_ref().map(|s| s.visited_order()).unwrap_or_default()
    }

    /// Frames recorded since the last `Run` or `Start`.
    #[inline]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Row-major `(coordinate, kind)` pairs for rendering.
    pub fn kinds(&self) -> impl Iterator<Item = (Point, TypeKind)> + '_ {
        self.grid.kinds()
    }

    /// Process a command.
    pub fn update(&mut self, cmd: Command) -> Result<Event, SessionError> {
        match cmd {
            Command::Assign { pos, kind } => self.assign(pos, kind).map(Event::Assigned),
            Command::Reset => {
                self.reset();
                Ok(Event::Reset)
            }
            Command::Run(variant) => {
                self.start(variant)?;
                let mut state = self.state();
                while !state.is_terminal() {
                    state = self.advance()?;
                }
                Ok(self.outcome(state))
            }
            Command::Start(variant) => {
                self.start(variant)?;
                Ok(self.outcome(self.state()))
            }
            Command::Step => {
                let state = self.advance()?;
                Ok(self.outcome(state))
            }
        }
    }

    fn assign(&mut self, pos: Point, kind: TypeKind) -> Result<Assignment, SessionError> {
        if kind.is_algorithmic() {
            return Err(SessionError::NotAlgorithmicInput(kind));
        }
        if self.is_busy() {
            return Err(SessionError::Busy);
        }
        let verdict = self.grid.assign_checked(pos, kind)?;
        log::trace!("assign {kind} at {pos}: {verdict:?}");
        Ok(verdict)
    }

    fn reset(&mut self) {
        if self.is_busy() {
            log::debug!("reset cancels running {} search", self.variant);
        }
        self.search = None;
        self.grid.reset();
        self.recording = Recording::new(&self.grid);
    }

    /// Clear old marks, rebuild neighbors and take the first step.
    fn start(&mut self, variant: Variant) -> Result<(), SessionError> {
        self.grid.clear_search();
        self.grid.rebuild_neighbors();
        self.recording = Recording::new(&self.grid);
        self.variant = variant;
        self.search = Some(Search::new(variant));
        if let Err(e) = self.advance() {
            self.search = None;
            return Err(e);
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<SearchState, SessionError> {
        let search = self.search.as_mut().ok_or(SessionError::NoSearch)?;
        if search.state().is_terminal() {
            return Ok(search.state());
        }
        let before = self.grid.snapshot();
        let state = search.step(&mut self.grid)?;
        self.recording.push(compute_frame(&before, &self.grid));
        Ok(state)
    }

    fn outcome(&self, state: SearchState) -> Event {
        if state.is_terminal() {
            Event::Finished {
                state,
                path_len: self.path().len(),
            }
        } else {
            Event::Progress(state)
        }
    }
}
