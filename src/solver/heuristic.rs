use std::str::FromStr;

use core::fmt;

use crate::error::SelectorError;
use crate::position::Position;

/// Distance estimate used to order the frontier in A* and greedy best-first.
///
/// Movement is 4-directional with unit step cost, so Manhattan is the exact
/// unobstructed distance and Euclidean a looser lower bound. Chebyshev is the
/// 8-directional movement metric; it is kept for experimentation, and A*
/// results obtained with it carry no optimality guarantee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Chebyshev,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
    ];

    /// Estimated distance from `a` to `b`.
    pub fn estimate(&self, a: Position, b: Position) -> f64 {
        let d_row = (a.row - b.row).abs() as f64;
        let d_col = (a.col - b.col).abs() as f64;
        match self {
            Heuristic::Manhattan => d_row + d_col,
            Heuristic::Euclidean => (d_row * d_row + d_col * d_col).sqrt(),
            Heuristic::Chebyshev => d_row.max(d_col),
        }
    }

    /// Whether A* paired with this heuristic is guaranteed to return
    /// minimum-step routes.
    pub fn guarantees_optimality(&self) -> bool {
        !matches!(self, Heuristic::Chebyshev)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Chebyshev => "chebyshev",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Heuristic {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Heuristic, SelectorError> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            "chebyshev" => Ok(Heuristic::Chebyshev),
            _ => Err(SelectorError::UnknownHeuristic(s.to_owned())),
        }
    }
}
