use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Player, Scoring, Segment, SixesMode, TeamSplit, WagerDetail, WagerResult};

use super::out_of_range;
use super::payout::team_payouts;
use super::segment::{Tally, match_status, segment_line, stroke_status, tally_segment};

pub const SIXES_PLAYERS: usize = 4;

/// The three ways to split four players into two pairs.
const PARTITIONS: [TeamSplit; 3] = [
    TeamSplit::new_unchecked([0, 1], [2, 3]),
    TeamSplit::new_unchecked([0, 2], [1, 3]),
    TeamSplit::new_unchecked([0, 3], [1, 2]),
];

/// Draw the partner rotation for the three legs.
///
/// Each partition is used exactly once, in random order and with random side
/// labels, so every player partners each of the others for one leg. Drawing
/// three of the six labelled splits independently could repeat a partition.
pub fn random_pairings<R: Rng + ?Sized>(rng: &mut R) -> [TeamSplit; 3] {
    let mut legs = PARTITIONS;
    legs.shuffle(rng);
    for leg in &mut legs {
        if rng.random_bool(0.5) {
            *leg = leg.mirrored();
        }
    }
    legs
}

/// Rotating partners: three six-hole legs, each a net best-ball contest
/// between that leg's pairs. A leg pays once at least one hole of it is done
/// and one pair is ahead.
pub fn sixes(
    players: &[Player],
    mode: SixesMode,
    stake_per_segment: f64,
    pairings: Option<&[TeamSplit; 3]>,
) -> WagerResult {
    let title = format!("Sixes ({mode})");
    if players.len() != SIXES_PLAYERS {
        log::warn!("sixes needs {SIXES_PLAYERS} players, got {}", players.len());
        return WagerResult::new(title)
            .with_status(format!("Sixes needs exactly {SIXES_PLAYERS} players"));
    }
    let Some(pairings) = pairings else {
        log::warn!("sixes has no pairings assigned");
        return WagerResult::new(title).with_status("Pairings not assigned");
    };
    if pairings.iter().any(|p| !p.fits(players.len())) {
        return out_of_range(title, players.len());
    }

    let tally_rule = match mode {
        SixesMode::Match => Tally::HolesWon,
        SixesMode::Stroke => Tally::StrokeTotal,
    };

    let mut result = WagerResult::new(title);
    let mut lines = Vec::new();
    for (segment, split) in Segment::LEGS.into_iter().zip(pairings) {
        let tally = tally_segment(players, split, segment, Scoring::Net, tally_rule);
        let winner = (tally.holes_played > 0)
            .then(|| tally.leader(tally_rule))
            .flatten();
        match winner {
            Some(1) => result.payouts.extend(team_payouts(
                split.team1(),
                split.team2(),
                stake_per_segment,
            )),
            Some(_) => result.payouts.extend(team_payouts(
                split.team2(),
                split.team1(),
                stake_per_segment,
            )),
            None => {}
        }
        let status = match mode {
            SixesMode::Match => match_status(segment, &tally),
            SixesMode::Stroke => stroke_status(segment, &tally),
        };
        let [a, b] = split.team1().members();
        let [c, d] = split.team2().members();
        result.details.push(format!(
            "{segment}: {} & {} vs {} & {}: {status}",
            players[a].name, players[b].name, players[c].name, players[d].name
        ));
        lines.push(segment_line(split, segment, &tally, status, winner));
    }

    let decided = lines.iter().filter(|l| l.winner.is_some()).count();
    result.status = Some(format!("{decided} of 3 legs paying"));
    log::debug!("sixes ({mode}): edges={}", result.payouts.len());
    result.detail = WagerDetail::Segments { lines };
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn partners(split: &TeamSplit) -> [[usize; 2]; 2] {
        let mut teams = split.teams().map(|t| {
            let mut m = t.members();
            m.sort_unstable();
            m
        });
        teams.sort_unstable();
        teams
    }

    #[test]
    fn every_partition_used_once() {
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let legs = random_pairings(&mut rng);
            let mut seen: Vec<_> = legs.iter().map(partners).collect();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 3, "seed {seed} repeated a partition");
        }
    }

    #[test]
    fn same_seed_same_rotation() {
        let a = random_pairings(&mut SmallRng::seed_from_u64(7));
        let b = random_pairings(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
