use std::collections::VecDeque;
use std::fmt;

use gridseek_core::{Grid, Point, TypeKind};

use crate::path::reconstruct;
use crate::traits::Strategy;
use crate::variant::Variant;

// ---------------------------------------------------------------------------
// SearchState / SearchError
// ---------------------------------------------------------------------------

/// Lifecycle of a [`Search`]: `Idle → Running → {Succeeded, Failed}`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Not started, or reset.
    #[default]
    Idle,
    Running,
    /// Target reached; the path is marked.
    Succeeded,
    /// Frontier exhausted without reaching Target. Not an error.
    Failed,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "no solution found",
        })
    }
}

/// A search was started on a grid that lacks an endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    MissingStart,
    MissingTarget,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("search needs a START cell"),
            Self::MissingTarget => f.write_str("search needs a TARGET cell"),
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A step-wise search over a [`Grid`], parameterized by its [`Strategy`].
///
/// The search owns its frontier and visited set but not the grid: each
/// [`step`](Self::step) borrows the grid mutably for its duration. Callers
/// must not edit the grid while the search is `Running` and must call
/// [`Grid::rebuild_neighbors`] before the first step.
#[derive(Clone, Debug)]
pub struct Search<S> {
    strategy: S,
    state: SearchState,
    start: Point,
    target: Point,
    frontier: VecDeque<Point>,
    // Indexed by `Grid::index_of`.
    in_frontier: Vec<bool>,
    visited: Vec<bool>,
    visited_order: Vec<Point>,
    path: Vec<Point>,
    // Scratch buffer for neighbor lists.
    nbuf: Vec<Point>,
}

impl<S: Default + Strategy> Default for Search<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Strategy> Search<S> {
    /// Create an idle search.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            state: SearchState::Idle,
            start: Point::ZERO,
            target: Point::ZERO,
            frontier: VecDeque::new(),
            in_frontier: Vec::new(),
            visited: Vec::new(),
            visited_order: Vec::new(),
            path: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Cells finalized so far, in visitation order. Includes Start and, on
    /// success, Target.
    #[inline]
    pub fn visited_order(&self) -> &[Point] {
        &self.visited_order
    }

    /// The reconstructed path in Start→Target order (Start excluded,
    /// Target included). Empty unless the search succeeded.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Number of cells discovered but not yet visited.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Return to `Idle`, forgetting all progress. The grid is not touched.
    pub fn reset(&mut self) {
        self.state = SearchState::Idle;
        self.frontier.clear();
        self.in_frontier.clear();
        self.visited.clear();
        self.visited_order.clear();
        self.path.clear();
    }

    /// Perform one unit of progress and return the resulting state.
    ///
    /// The first call on an idle search checks that Start and Target exist,
    /// seeds the frontier with Start and then visits it. Calls on a finished
    /// search change nothing.
    pub fn step(&mut self, grid: &mut Grid) -> Result<SearchState, SearchError> {
        match self.state {
            SearchState::Idle => self.begin(grid)?,
            SearchState::Running => {}
            finished => return Ok(finished),
        }
        debug_assert_eq!(self.visited.len(), grid.len(), "search resumed on another grid");

        let Some(current) = self.strategy.select_next(&mut self.frontier, grid) else {
            log::debug!(
                "no path from {} to {} after visiting {} cells",
                self.start,
                self.target,
                self.visited_order.len()
            );
            self.state = SearchState::Failed;
            return Ok(self.state);
        };

        let ci = self.index(grid, current);
        self.in_frontier[ci] = false;
        self.visited[ci] = true;
        self.visited_order.push(current);

        // Start and Target are immutable and keep their kind.
        let verdict = grid.assign(current, TypeKind::Visited);
        debug_assert!(
            verdict.is_applied() || grid.kind_at(current).is_immutable(),
            "visiting {current} rejected: {verdict:?}"
        );
        log::trace!("visit {current}, frontier {}", self.frontier.len());

        if current == self.target {
            self.path = reconstruct(grid, self.start, self.target);
            self.state = SearchState::Succeeded;
            log::debug!(
                "reached {} in {} hops, {} cells visited",
                self.target,
                self.path.len(),
                self.visited_order.len()
            );
            return Ok(self.state);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(grid[current].neighbors());

        for &n in nbuf.iter() {
            let ni = self.index(grid, n);
            if self.visited[ni] {
                continue;
            }
            if self.in_frontier[ni] {
                if self.strategy.on_improve(grid, current, n, self.target) {
                    grid.set_predecessor(n, Some(current));
                    log::trace!("shorter route to {n} through {current}");
                }
                continue;
            }
            grid.set_predecessor(n, Some(current));
            self.strategy.on_relax(grid, current, n, self.target);
            let verdict = grid.assign(n, TypeKind::Queued);
            debug_assert!(
                verdict.is_applied() || n == self.target,
                "queueing {n} rejected: {verdict:?}"
            );
            self.frontier.push_back(n);
            self.in_frontier[ni] = true;
        }

        self.nbuf = nbuf;
        Ok(self.state)
    }

    /// Step until the search succeeds or fails.
    pub fn run(&mut self, grid: &mut Grid) -> Result<SearchState, SearchError> {
        loop {
            let state = self.step(grid)?;
            if state.is_terminal() {
                return Ok(state);
            }
        }
    }

    /// Enter `Running`: check the endpoints and seed the frontier.
    fn begin(&mut self, grid: &mut Grid) -> Result<(), SearchError> {
        let start = grid.lookup(TypeKind::Start).ok_or(SearchError::MissingStart)?;
        let target = grid
            .lookup(TypeKind::Target)
            .ok_or(SearchError::MissingTarget)?;

        self.reset();
        self.start = start;
        self.target = target;
        self.in_frontier.resize(grid.len(), false);
        self.visited.resize(grid.len(), false);

        grid.set_predecessor(start, None);
        self.strategy.on_seed(grid, start, target);
        self.frontier.push_back(start);
        let si = self.index(grid, start);
        self.in_frontier[si] = true;

        self.state = SearchState::Running;
        log::debug!("search from {start} to {target} on {}", grid.bounds());
        Ok(())
    }

    #[inline]
    fn index(&self, grid: &Grid, p: Point) -> usize {
        match grid.index_of(p) {
            Some(i) => i,
            None => panic!("search reached {p} outside grid bounds {}", grid.bounds()),
        }
    }
}

/// Rebuild the neighbor graph and run `variant` to completion.
///
/// Returns the path (Start excluded, Target included) or `None` when no
/// path exists. Search marks stay on the grid.
pub fn find_path(grid: &mut Grid, variant: Variant) -> Result<Option<Vec<Point>>, SearchError> {
    grid.rebuild_neighbors();
    let mut search = Search::new(variant);
    match search.run(grid)? {
        SearchState::Succeeded => Ok(Some(search.path)),
        _ => Ok(None),
    }
}
