use crate::model::{
    HOLES, NassauStakes, PlayerTotal, Player, Scoring, Segment, TeamSplit, WagerDetail, WagerResult,
};

use super::payout::{split_stake, team_payouts};
use super::segment::{Tally, segment_line, stroke_status, tally_segment};
use super::{names, out_of_range};

fn comparison_total(player: &Player, scoring: Scoring) -> i32 {
    match scoring {
        Scoring::Gross => player.gross_total(),
        Scoring::Net => player.gross_total() - player.course_handicap,
    }
}

/// Low total takes the stake from everyone else once the whole group has
/// finished 18. Tied winners split each loser's stake.
pub fn individual_stroke(players: &[Player], scoring: Scoring, stake: f64) -> WagerResult {
    let mut result = WagerResult::new(format!("{scoring} Stroke Play"));

    let totals: Vec<PlayerTotal> = players
        .iter()
        .enumerate()
        .map(|(i, p)| PlayerTotal {
            player: i,
            total: comparison_total(p, scoring),
            holes_played: p.holes_played(),
        })
        .collect();

    for (p, t) in players.iter().zip(&totals) {
        result
            .details
            .push(format!("{}: {} (thru {})", p.name, t.total, t.holes_played));
    }

    let complete = players.len() >= 2 && players.iter().all(|p| p.is_complete(0..HOLES));
    let mut winners = Vec::new();
    if complete {
        let low = totals.iter().map(|t| t.total).min().unwrap_or_default();
        winners = totals
            .iter()
            .filter(|t| t.total == low)
            .map(|t| t.player)
            .collect();
        let losers: Vec<usize> = (0..players.len()).filter(|i| !winners.contains(i)).collect();
        result.payouts = split_stake(&winners, &losers, stake);
        result.status = Some(if losers.is_empty() {
            "Everyone tied".to_string()
        } else if winners.len() == 1 {
            format!("{} wins", names(players, &winners))
        } else {
            format!("Tied: {}", names(players, &winners))
        });
    } else {
        let waiting = players
            .iter()
            .filter(|p| !p.is_complete(0..HOLES))
            .count();
        result.status = Some(format!("Waiting on {waiting} player(s) to finish"));
    }

    log::debug!(
        "individual stroke ({scoring}): complete={complete} winners={winners:?} edges={}",
        result.payouts.len()
    );
    result.detail = WagerDetail::Totals { totals, winners };
    result
}

/// Best-ball stroke play with separate front, back and overall stakes.
pub fn team_stroke(
    players: &[Player],
    scoring: Scoring,
    teams: &TeamSplit,
    stakes: &NassauStakes,
) -> WagerResult {
    let title = format!("{scoring} Best Ball Stroke Play");
    if !teams.fits(players.len()) {
        return out_of_range(title, players.len());
    }
    let mut result = WagerResult::new(title);

    let mut lines = Vec::new();
    for (segment, stake) in Segment::NINES
        .into_iter()
        .zip([stakes.front, stakes.back, stakes.overall])
    {
        let tally = tally_segment(players, teams, segment, scoring, Tally::StrokeTotal);
        let complete = tally.holes_played == segment.len();
        let winner = complete.then(|| tally.leader(Tally::StrokeTotal)).flatten();
        match winner {
            Some(1) => result
                .payouts
                .extend(team_payouts(teams.team1(), teams.team2(), stake)),
            Some(_) => result
                .payouts
                .extend(team_payouts(teams.team2(), teams.team1(), stake)),
            None => {}
        }
        let status = stroke_status(segment, &tally);
        result.details.push(format!("{segment}: {status}"));
        lines.push(segment_line(teams, segment, &tally, status, winner));
    }

    let finished = lines.iter().all(|l| l.holes_played == l.segment.len());
    result.status = Some(if finished { "Final" } else { "In progress" }.to_string());
    log::debug!("team stroke ({scoring}): edges={}", result.payouts.len());
    result.detail = WagerDetail::Segments { lines };
    result
}
