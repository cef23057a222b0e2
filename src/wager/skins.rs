use crate::model::{HOLES, Player, Scoring, SkinHole, WagerDetail, WagerResult};

use super::payout::proportional_payouts;

/// Skins over 18 holes.
///
/// Holes are decided in order once every player has a score. A unique low
/// score takes one skin plus any carry. A tie either carries (when enabled)
/// or is a push. The pot is `pot_per_player * players` and each skin is worth
/// `pot / total_skins`; players settle the difference between what they won
/// and what they put in.
pub fn skins(players: &[Player], scoring: Scoring, carry_over: bool, pot_per_player: f64) -> WagerResult {
    let title = if carry_over {
        format!("{scoring} Skins (carry-over)")
    } else {
        format!("{scoring} Skins")
    };
    let mut result = WagerResult::new(title);

    let mut holes = vec![SkinHole::Unplayed; HOLES];
    let mut skins_won = vec![0_u32; players.len()];
    let mut carry = 0_u32;

    for (hole, outcome) in holes.iter_mut().enumerate() {
        let Some(values) = players
            .iter()
            .map(|p| p.score(hole, scoring))
            .collect::<Option<Vec<i32>>>()
        else {
            continue;
        };
        let Some(&low) = values.iter().min() else {
            continue;
        };
        let mut lowest = values.iter().enumerate().filter(|&(_, &v)| v == low);
        match (lowest.next(), lowest.next()) {
            (Some((player, _)), None) => {
                let skins = 1 + carry;
                skins_won[player] += skins;
                carry = 0;
                *outcome = SkinHole::Won { player, skins };
            }
            _ if carry_over => {
                carry += 1;
                *outcome = SkinHole::Carried;
            }
            _ => *outcome = SkinHole::Push,
        }
    }

    let total_skins: u32 = skins_won.iter().sum();
    let pot = pot_per_player * players.len() as f64;
    let per_skin_value = if total_skins > 0 {
        pot / f64::from(total_skins)
    } else {
        0.0
    };
    let earnings: Vec<f64> = skins_won
        .iter()
        .map(|&s| f64::from(s) * per_skin_value)
        .collect();

    let pnl: Vec<f64> = earnings.iter().map(|e| e - pot_per_player).collect();
    result.payouts = proportional_payouts(&pnl);

    for (hole, outcome) in holes.iter().enumerate() {
        match outcome {
            SkinHole::Won { player, skins } => result.details.push(format!(
                "Hole {}: {} ({skins})",
                hole + 1,
                players[*player].name
            )),
            SkinHole::Carried => result.details.push(format!("Hole {}: carried", hole + 1)),
            SkinHole::Push => result.details.push(format!("Hole {}: push", hole + 1)),
            SkinHole::Unplayed => {}
        }
    }
    result.status = Some(format!(
        "{total_skins} skins at ${per_skin_value:.2}{}",
        if carry > 0 {
            format!(", {carry} carrying")
        } else {
            String::new()
        }
    ));

    log::debug!(
        "skins ({scoring}, carry_over={carry_over}): total={total_skins} carry={carry} edges={}",
        result.payouts.len()
    );
    result.detail = WagerDetail::Skins {
        holes,
        skins_won,
        total_skins,
        per_skin_value,
        earnings,
        carry,
    };
    result
}
