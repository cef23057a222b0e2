use crate::model::{Player, Scoring, Segment, SegmentLine, TeamSplit};

use super::payout::best_ball;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tally {
    /// Sum of best-ball scores; lower wins.
    StrokeTotal,
    /// Count of holes won on best ball; higher wins.
    HolesWon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SegmentTally {
    pub team1: i32,
    pub team2: i32,
    /// Holes on which all four players have a score.
    pub holes_played: usize,
}

impl SegmentTally {
    /// 1 or 2 for the leading side, `None` when level.
    pub fn leader(&self, tally: Tally) -> Option<u8> {
        let (better, worse) = match tally {
            Tally::StrokeTotal => (self.team1 < self.team2, self.team1 > self.team2),
            Tally::HolesWon => (self.team1 > self.team2, self.team1 < self.team2),
        };
        match (better, worse) {
            (true, _) => Some(1),
            (_, true) => Some(2),
            _ => None,
        }
    }
}

/// Walk a segment and accumulate both teams' scores over the holes that
/// every member has finished.
pub fn tally_segment(
    players: &[Player],
    split: &TeamSplit,
    segment: Segment,
    scoring: Scoring,
    tally: Tally,
) -> SegmentTally {
    let mut out = SegmentTally::default();
    for hole in segment.holes() {
        let (Some(t1), Some(t2)) = (
            best_ball(players, split.team1(), hole, scoring),
            best_ball(players, split.team2(), hole, scoring),
        ) else {
            continue;
        };
        out.holes_played += 1;
        match tally {
            Tally::StrokeTotal => {
                out.team1 += t1;
                out.team2 += t2;
            }
            Tally::HolesWon => {
                if t1 < t2 {
                    out.team1 += 1;
                } else if t2 < t1 {
                    out.team2 += 1;
                }
            }
        }
    }
    out
}

pub fn segment_line(
    split: &TeamSplit,
    segment: Segment,
    tally: &SegmentTally,
    status: String,
    winner: Option<u8>,
) -> SegmentLine {
    SegmentLine {
        segment,
        team1: split.team1().members(),
        team2: split.team2().members(),
        team1_score: tally.team1,
        team2_score: tally.team2,
        holes_played: tally.holes_played,
        status,
        winner,
    }
}

/// "Team 1 2 UP (4 left)", "Team 2 WIN 5-3", "HALVED 4-4" and the like.
pub fn match_status(segment: Segment, tally: &SegmentTally) -> String {
    let left = segment.len().saturating_sub(tally.holes_played);
    let margin = (tally.team1 - tally.team2).abs();
    let leader = tally.leader(Tally::HolesWon);
    if tally.holes_played == 0 {
        return format!("Not started ({left} left)");
    }
    if left == 0 {
        return match leader {
            Some(team) => {
                let (won, lost) = if team == 1 {
                    (tally.team1, tally.team2)
                } else {
                    (tally.team2, tally.team1)
                };
                format!("Team {team} WIN {won}-{lost}")
            }
            None => format!("HALVED {}-{}", tally.team1, tally.team2),
        };
    }
    match leader {
        Some(team) => format!("Team {team} {margin} UP ({left} left)"),
        None => format!("ALL SQUARE ({left} left)"),
    }
}

pub fn stroke_status(segment: Segment, tally: &SegmentTally) -> String {
    let left = segment.len().saturating_sub(tally.holes_played);
    if tally.holes_played == 0 {
        return format!("Not started ({left} left)");
    }
    let leader = tally.leader(Tally::StrokeTotal);
    let margin = (tally.team1 - tally.team2).abs();
    if left == 0 {
        return match leader {
            Some(team) => format!("Team {team} wins {}-{}", tally.team1, tally.team2),
            None => format!("Tied {}-{}", tally.team1, tally.team2),
        };
    }
    match leader {
        Some(team) => format!(
            "Team {team} by {margin} thru {} ({left} left)",
            tally.holes_played
        ),
        None => format!("All square thru {} ({left} left)", tally.holes_played),
    }
}
