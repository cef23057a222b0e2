use serde::{Deserialize, Serialize};

use super::course::Segment;

/// "`from` owes `to` `amount`" for a single wager.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PayoutEdge {
    pub from: usize,
    pub to: usize,
    pub amount: f64,
}

/// A payment produced by netting every wager of a group.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SettlementTransfer {
    pub from: usize,
    pub to: usize,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SkinHole {
    Unplayed,
    Won { player: usize, skins: u32 },
    Carried,
    Push,
}

/// Team scores for one segment. For match formats the values are holes won.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SegmentLine {
    pub segment: Segment,
    pub team1: [usize; 2],
    pub team2: [usize; 2],
    pub team1_score: i32,
    pub team2_score: i32,
    pub holes_played: usize,
    pub status: String,
    /// 1 or 2 once the segment has paid out.
    pub winner: Option<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerTotal {
    pub player: usize,
    pub total: i32,
    pub holes_played: usize,
}

/// Wager-specific data that only the display layer reads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WagerDetail {
    None,
    Totals {
        totals: Vec<PlayerTotal>,
        winners: Vec<usize>,
    },
    Segments {
        lines: Vec<SegmentLine>,
    },
    Skins {
        holes: Vec<SkinHole>,
        skins_won: Vec<u32>,
        total_skins: u32,
        per_skin_value: f64,
        earnings: Vec<f64>,
        /// Carry left unresolved after the last completed hole.
        carry: u32,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WagerResult {
    pub title: String,
    pub details: Vec<String>,
    pub status: Option<String>,
    pub payouts: Vec<PayoutEdge>,
    pub detail: WagerDetail,
}

impl WagerResult {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: Vec::new(),
            status: None,
            payouts: Vec::new(),
            detail: WagerDetail::None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Everything the rendering layer needs for one group.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupSettlement {
    pub results: Vec<WagerResult>,
    pub settlements: Vec<SettlementTransfer>,
    pub balances: Vec<f64>,
}
