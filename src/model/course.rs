use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

pub const HOLES: usize = 18;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeeSet {
    #[serde(default)]
    pub name: String,
    /// Course rating. `None` (or zero) means the tee has no rating on file.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub slope: Option<u32>,
    pub pars: [u8; HOLES],
    /// Stroke index per hole, 1 = hardest.
    pub hole_difficulty: [u8; HOLES],
}

impl TeeSet {
    pub fn par(&self) -> i32 {
        self.pars.iter().map(|&p| i32::from(p)).sum()
    }
}

/// A contiguous stretch of holes that a wager stake is attached to.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Front,
    Back,
    Overall,
    /// One of the three six-hole legs of a rotating-partners game (0, 1 or 2).
    Leg(u8),
}

impl Segment {
    pub const NINES: [Segment; 3] = [Segment::Front, Segment::Back, Segment::Overall];
    pub const LEGS: [Segment; 3] = [Segment::Leg(0), Segment::Leg(1), Segment::Leg(2)];

    pub fn holes(self) -> Range<usize> {
        match self {
            Segment::Front => 0..9,
            Segment::Back => 9..18,
            Segment::Overall => 0..HOLES,
            Segment::Leg(leg) => {
                let start = usize::from(leg.min(2)) * 6;
                start..start + 6
            }
        }
    }

    pub fn len(self) -> usize {
        self.holes().len()
    }

    pub fn is_empty(self) -> bool {
        self.holes().is_empty()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Front => write!(f, "Front 9"),
            Segment::Back => write!(f, "Back 9"),
            Segment::Overall => write!(f, "Overall"),
            Segment::Leg(_) => {
                let holes = self.holes();
                write!(f, "Holes {}-{}", holes.start + 1, holes.end)
            }
        }
    }
}

/// Gross or handicap-adjusted comparison.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    #[default]
    Gross,
    Net,
}

impl fmt::Display for Scoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scoring::Gross => "Gross",
            Scoring::Net => "Net",
        };
        write!(f, "{s}")
    }
}
