use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::course::{HOLES, Scoring, TeeSet};
use crate::handicap::{course_handicap, stroke_allocation};

/// A roster line as supplied by the surrounding application.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub handicap_index: f64,
    #[serde(default)]
    pub scores: [Option<i32>; HOLES],
}

/// A golfer enriched with the handicap data for the tee they are playing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub stroke_allocation: [i32; HOLES],
    /// Gross strokes per hole; `None` while the hole is unplayed.
    pub scores: [Option<i32>; HOLES],
}

impl Player {
    pub fn enrich(entry: &RosterEntry, tee: &TeeSet) -> Self {
        let course_handicap = course_handicap(entry.handicap_index, tee.slope, tee.rating, tee.par());
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            handicap_index: entry.handicap_index,
            course_handicap,
            stroke_allocation: stroke_allocation(course_handicap, &tee.hole_difficulty),
            scores: entry.scores,
        }
    }

    /// Record (or clear, with `None`) the gross score for a 0-based hole.
    pub fn record(&mut self, hole: usize, gross: Option<i32>) {
        if let Some(slot) = self.scores.get_mut(hole) {
            *slot = gross;
        }
    }

    pub fn gross(&self, hole: usize) -> Option<i32> {
        self.scores.get(hole).copied().flatten()
    }

    pub fn net(&self, hole: usize) -> Option<i32> {
        self.gross(hole)
            .map(|gross| gross - self.stroke_allocation[hole])
    }

    pub fn score(&self, hole: usize, scoring: Scoring) -> Option<i32> {
        match scoring {
            Scoring::Gross => self.gross(hole),
            Scoring::Net => self.net(hole),
        }
    }

    pub fn holes_played(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_complete(&self, holes: Range<usize>) -> bool {
        holes.into_iter().all(|h| self.gross(h).is_some())
    }

    pub fn gross_total(&self) -> i32 {
        self.scores.iter().flatten().sum()
    }
}
