use crate::model::{NassauStakes, Player, Scoring, Segment, TeamSplit, WagerDetail, WagerResult};

use super::out_of_range;
use super::payout::team_payouts;
use super::segment::{Tally, match_status, segment_line, tally_segment};

/// Net best-ball match play, paid as a nassau.
///
/// A hole counts once all four players have a score on it. A nine pays as
/// soon as one side is ahead on at least one played hole. The overall pays
/// only once all 18 are played and the match is not halved.
pub fn match_play(players: &[Player], teams: &TeamSplit, stakes: &NassauStakes) -> WagerResult {
    let title = "Best Ball Match Play".to_string();
    if !teams.fits(players.len()) {
        return out_of_range(title, players.len());
    }
    let mut result = WagerResult::new(title);

    let mut lines = Vec::new();
    for (segment, stake) in Segment::NINES
        .into_iter()
        .zip([stakes.front, stakes.back, stakes.overall])
    {
        let tally = tally_segment(players, teams, segment, Scoring::Net, Tally::HolesWon);
        let payable = match segment {
            Segment::Overall => tally.holes_played == segment.len(),
            _ => tally.holes_played > 0,
        };
        let winner = payable.then(|| tally.leader(Tally::HolesWon)).flatten();
        match winner {
            Some(1) => result
                .payouts
                .extend(team_payouts(teams.team1(), teams.team2(), stake)),
            Some(_) => result
                .payouts
                .extend(team_payouts(teams.team2(), teams.team1(), stake)),
            None => {}
        }
        let status = match_status(segment, &tally);
        result.details.push(format!("{segment}: {status}"));
        lines.push(segment_line(teams, segment, &tally, status, winner));
    }

    let overall = lines
        .last()
        .map(|l| l.status.clone())
        .unwrap_or_default();
    result.status = Some(overall);
    log::debug!("match play: edges={}", result.payouts.len());
    result.detail = WagerDetail::Segments { lines };
    result
}
