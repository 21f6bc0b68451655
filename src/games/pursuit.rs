//! A small grid pursuit game: one collector, N-1 chasers.
//!
//! The maximizer walks a walled grid eating pellets; adversaries chase
//! it. The game is won when the last pellet is eaten and lost on capture.
//! Physics are the minimum needed to exercise the engine on a game with
//! real branching; this module is a demo/test capability, not a product
//! feature.
//!
//! Layouts parse from ASCII maps:
//!
//! ```text
//! %%%%%
//! %P.G%
//! %%%%%
//! ```
//!
//! `%` wall, `.` pellet, `P` maximizer, `G` adversary, space open floor.
//!
//! Snapshots clone cheaply: the wall layout is shared behind an `Arc` and
//! the pellet set is a persistent `im::HashSet`.

use std::sync::Arc;

use im::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AgentIndex, GameState};
use crate::eval::ReflexEvaluationFn;

const TIME_PENALTY: f64 = 1.0;
const PELLET_REWARD: f64 = 10.0;
const WIN_REWARD: f64 = 500.0;
const CAPTURE_PENALTY: f64 = 500.0;

/// Sentinel scores used by the default reflex evaluation for moves that
/// are immediately decisive.
const REFLEX_DEATH: f64 = -9999.0;
const REFLEX_PELLET: f64 = 9999.0;

/// A grid move. `Stop` is always legal for the maximizer and a fallback
/// for boxed-in adversaries, so non-terminal states always offer at
/// least one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    North,
    South,
    East,
    West,
    Stop,
}

impl Move {
    const CARDINALS: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    /// Grid delta, with y growing downward.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East => (1, 0),
            Move::West => (-1, 0),
            Move::Stop => (0, 0),
        }
    }
}

/// Immutable wall layout, shared between all snapshots of a game.
#[derive(Debug)]
struct Layout {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Layout {
    fn is_wall(&self, (x, y): (i32, i32)) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return true;
        }
        self.walls[(y * self.width + x) as usize]
    }
}

/// Manhattan distance between grid positions.
#[must_use]
pub fn manhattan(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// A pursuit-game position snapshot.
#[derive(Clone, Debug)]
pub struct PursuitState {
    layout: Arc<Layout>,
    /// Agent positions; index 0 is the maximizer.
    positions: SmallVec<[(i32, i32); 4]>,
    pellets: HashSet<(i32, i32)>,
    score: f64,
    captured: bool,
}

impl PursuitState {
    /// Parse an ASCII layout into an initial position.
    ///
    /// Panics on malformed layouts (no `P`, unknown characters); layouts
    /// are authored constants, not runtime input.
    #[must_use]
    pub fn parse(ascii: &str) -> Self {
        let rows: Vec<&str> = ascii
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(!rows.is_empty(), "empty layout");

        let height = rows.len() as i32;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0) as i32;

        let mut walls = vec![false; (width * height) as usize];
        let mut pellets = HashSet::new();
        let mut maximizer = None;
        let mut chasers: Vec<(i32, i32)> = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = (x as i32, y as i32);
                match ch {
                    '%' => walls[(pos.1 * width + pos.0) as usize] = true,
                    '.' => {
                        pellets.insert(pos);
                    }
                    'P' => {
                        assert!(maximizer.is_none(), "layout has more than one P");
                        maximizer = Some(pos);
                    }
                    'G' => chasers.push(pos),
                    ' ' => {}
                    other => panic!("unknown layout character {other:?}"),
                }
            }
        }

        let maximizer = maximizer.expect("layout has no P");
        let mut positions = SmallVec::new();
        positions.push(maximizer);
        positions.extend(chasers);

        Self {
            layout: Arc::new(Layout {
                width,
                height,
                walls,
            }),
            positions,
            pellets,
            score: 0.0,
            captured: false,
        }
    }

    /// Position of an agent.
    #[must_use]
    pub fn position(&self, agent: AgentIndex) -> (i32, i32) {
        self.positions[agent.index()]
    }

    /// Remaining pellet positions.
    #[must_use]
    pub fn pellets(&self) -> &HashSet<(i32, i32)> {
        &self.pellets
    }

    fn adversary_positions(&self) -> &[(i32, i32)] {
        &self.positions[1..]
    }

    fn nearest_pellet_distance(&self, from: (i32, i32)) -> Option<i32> {
        self.pellets.iter().map(|&p| manhattan(from, p)).min()
    }

    fn nearest_adversary_distance(&self, from: (i32, i32)) -> Option<i32> {
        self.adversary_positions()
            .iter()
            .map(|&g| manhattan(from, g))
            .min()
    }
}

impl GameState for PursuitState {
    type Action = Move;

    fn agent_count(&self) -> usize {
        self.positions.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }

        let pos = self.position(agent);
        let mut actions: Vec<Move> = Move::CARDINALS
            .iter()
            .copied()
            .filter(|mv| {
                let (dx, dy) = mv.delta();
                !self.layout.is_wall((pos.0 + dx, pos.1 + dy))
            })
            .collect();

        // Stop keeps the action set non-empty: always for the maximizer,
        // and for an adversary only when it is boxed in.
        if agent.is_maximizer() || actions.is_empty() {
            actions.push(Move::Stop);
        }
        actions
    }

    fn successor(&self, agent: AgentIndex, action: &Move) -> Self {
        debug_assert!(!self.is_terminal(), "successor of a terminal state");

        let mut next = self.clone();
        let (dx, dy) = action.delta();
        let pos = next.positions[agent.index()];
        let target = (pos.0 + dx, pos.1 + dy);
        debug_assert!(!next.layout.is_wall(target), "illegal move into a wall");
        next.positions[agent.index()] = target;

        if agent.is_maximizer() {
            next.score -= TIME_PENALTY;
            if next.adversary_positions().contains(&target) {
                next.captured = true;
                next.score -= CAPTURE_PENALTY;
            } else if next.pellets.remove(&target).is_some() {
                next.score += PELLET_REWARD;
                if next.pellets.is_empty() {
                    next.score += WIN_REWARD;
                }
            }
        } else if target == next.positions[0] {
            next.captured = true;
            next.score -= CAPTURE_PENALTY;
        }

        next
    }

    fn is_win(&self) -> bool {
        !self.captured && self.pellets.is_empty()
    }

    fn is_lose(&self) -> bool {
        self.captured
    }

    fn score(&self) -> f64 {
        self.score
    }
}

/// Default reflex evaluation for the pursuit game.
///
/// Mirrors the classic reflex-agent heuristic shape: decisive sentinel
/// scores for moves that eat a pellet or step onto an adversary, else a
/// ratio favoring distance from chasers and closeness to pellets. A
/// replaceable default, not part of the engine contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct PursuitReflexEval;

impl ReflexEvaluationFn<PursuitState> for PursuitReflexEval {
    fn evaluate(&self, before: &PursuitState, after: &PursuitState) -> f64 {
        if after.pellets.is_empty() {
            return after.score();
        }

        let pos = after.position(AgentIndex::MAXIMIZER);
        if after.adversary_positions().contains(&pos) {
            return REFLEX_DEATH;
        }
        if after.pellets.len() < before.pellets.len() {
            return REFLEX_PELLET;
        }

        let escape = after
            .nearest_adversary_distance(pos)
            .unwrap_or(after.layout.width + after.layout.height);
        // The position holds no pellet (it would have been eaten), so the
        // distance is at least 1.
        let hunger = after.nearest_pellet_distance(pos).unwrap_or(1).max(1);

        f64::from(escape) / f64::from(hunger.pow(3))
    }
}

/// State evaluation for the pursuit game: score minus nearest-pellet
/// distance, so deeper searches keep moving toward food between rewards.
///
/// Register as `"pursuit"` in an [`EvalRegistry`](crate::eval::EvalRegistry)
/// to select it by configuration key.
#[must_use]
pub fn pursuit_evaluation(state: &PursuitState) -> f64 {
    let pos = state.position(AgentIndex::MAXIMIZER);
    match state.nearest_pellet_distance(pos) {
        Some(distance) => state.score() - f64::from(distance),
        None => state.score(),
    }
}
