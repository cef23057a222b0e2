#![allow(dead_code)]

use rusty_golf_wagers::model::{HOLES, PayoutEdge, Player, RosterEntry, TeeSet};

pub const RANKS: [u8; HOLES] = [7, 15, 1, 11, 3, 17, 9, 13, 5, 8, 16, 2, 12, 4, 18, 10, 14, 6];

/// Par 72, rating 72.0 and slope 113, so course handicap == rounded index.
pub fn tee() -> TeeSet {
    TeeSet {
        name: "White".to_string(),
        rating: Some(72.0),
        slope: Some(113),
        pars: [4; HOLES],
        hole_difficulty: RANKS,
    }
}

pub fn player(name: &str, handicap_index: f64, scores: [Option<i32>; HOLES]) -> Player {
    let entry = RosterEntry {
        id: name.to_lowercase(),
        name: name.to_string(),
        handicap_index,
        scores,
    };
    Player::enrich(&entry, &tee())
}

pub fn scratch(name: &str, scores: [Option<i32>; HOLES]) -> Player {
    player(name, 0.0, scores)
}

/// Scores for the first `played.len()` holes, the rest unplayed.
pub fn card(played: &[i32]) -> [Option<i32>; HOLES] {
    let mut scores = [None; HOLES];
    for (slot, &s) in scores.iter_mut().zip(played) {
        *slot = Some(s);
    }
    scores
}

pub fn flat(score: i32) -> [Option<i32>; HOLES] {
    [Some(score); HOLES]
}

pub fn received(edges: &[PayoutEdge], player: usize) -> f64 {
    edges.iter().filter(|e| e.to == player).map(|e| e.amount).sum()
}

pub fn paid(edges: &[PayoutEdge], player: usize) -> f64 {
    edges.iter().filter(|e| e.from == player).map(|e| e.amount).sum()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
