use crate::model::{PayoutEdge, Player, Scoring, Team};

/// Per-wager edges below this are treated as zero.
pub const PAYOUT_EPSILON: f64 = 0.005;

pub(crate) fn push_edge(edges: &mut Vec<PayoutEdge>, from: usize, to: usize, amount: f64) {
    if from == to || !amount.is_finite() || amount < PAYOUT_EPSILON {
        return;
    }
    edges.push(PayoutEdge { from, to, amount });
}

/// Each loser pays `stake` in total, split evenly across the winners.
pub fn split_stake(winners: &[usize], losers: &[usize], stake: f64) -> Vec<PayoutEdge> {
    let mut edges = Vec::new();
    if winners.is_empty() {
        return edges;
    }
    let share = stake / winners.len() as f64;
    for &loser in losers {
        for &winner in winners {
            push_edge(&mut edges, loser, winner, share);
        }
    }
    edges
}

pub fn team_payouts(winners: Team, losers: Team, stake: f64) -> Vec<PayoutEdge> {
    split_stake(&winners.members(), &losers.members(), stake)
}

/// Turn a zero-sum profit/loss vector into edges: every player who is down
/// pays each player who is up in proportion to that player's share of the
/// total winnings.
pub fn proportional_payouts(pnl: &[f64]) -> Vec<PayoutEdge> {
    let owed: Vec<(usize, f64)> = pnl
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, v)| v > PAYOUT_EPSILON)
        .collect();
    let total_owed: f64 = owed.iter().map(|&(_, v)| v).sum();

    let mut edges = Vec::new();
    if total_owed <= 0.0 {
        return edges;
    }
    for (ower, &loss) in pnl.iter().enumerate() {
        if loss >= -PAYOUT_EPSILON {
            continue;
        }
        for &(winner, gain) in &owed {
            push_edge(&mut edges, ower, winner, -loss * gain / total_owed);
        }
    }
    edges
}

/// The lower of the two partners' scores on a hole, or `None` unless both
/// have played it.
pub fn best_ball(players: &[Player], team: Team, hole: usize, scoring: Scoring) -> Option<i32> {
    let [a, b] = team.members();
    let a = players.get(a)?.score(hole, scoring)?;
    let b = players.get(b)?.score(hole, scoring)?;
    Some(a.min(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_stake_among_tied_winners() {
        let edges = split_stake(&[0, 2], &[1, 3], 10.0);
        assert_eq!(edges.len(), 4);
        assert!(edges.iter().all(|e| (e.amount - 5.0).abs() < 1e-9));
    }

    #[test]
    fn proportional_payouts_weight_by_winnings() {
        let edges = proportional_payouts(&[30.0, 10.0, -20.0, -20.0]);
        let into_zero: f64 = edges.iter().filter(|e| e.to == 0).map(|e| e.amount).sum();
        let into_one: f64 = edges.iter().filter(|e| e.to == 1).map(|e| e.amount).sum();
        assert!((into_zero - 30.0).abs() < 1e-9);
        assert!((into_one - 10.0).abs() < 1e-9);
        assert!(edges.iter().all(|e| e.from >= 2));
    }

    #[test]
    fn dust_is_dropped() {
        let mut edges = Vec::new();
        push_edge(&mut edges, 0, 1, 0.004);
        push_edge(&mut edges, 1, 1, 5.0);
        assert!(edges.is_empty());
    }
}
