pub mod match_play;
pub mod payout;
pub mod segment;
pub mod sixes;
pub mod skins;
pub mod stroke;

pub use match_play::match_play;
pub use payout::PAYOUT_EPSILON;
pub use sixes::{random_pairings, sixes};
pub use skins::skins;
pub use stroke::{individual_stroke, team_stroke};

use crate::model::{Player, WagerInstance, WagerResult};

/// Run the calculator for one configured wager.
pub fn calculate(players: &[Player], wager: &WagerInstance) -> WagerResult {
    match wager {
        WagerInstance::IndividualStroke { scoring, stake } => {
            individual_stroke(players, *scoring, *stake)
        }
        WagerInstance::TeamStroke {
            scoring,
            teams,
            stakes,
        } => team_stroke(players, *scoring, teams, stakes),
        WagerInstance::MatchPlay { teams, stakes } => match_play(players, teams, stakes),
        WagerInstance::Skins {
            scoring,
            carry_over,
            pot_per_player,
        } => skins(players, *scoring, *carry_over, *pot_per_player),
        WagerInstance::Sixes {
            mode,
            stake_per_segment,
            pairings,
        } => sixes(players, *mode, *stake_per_segment, pairings.as_ref()),
    }
}

fn names(players: &[Player], indices: &[usize]) -> String {
    indices
        .iter()
        .filter_map(|&i| players.get(i))
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn out_of_range(title: String, player_count: usize) -> WagerResult {
    log::warn!("{title}: teams reference players outside a group of {player_count}");
    WagerResult::new(title).with_status("Teams reference players outside the group")
}
