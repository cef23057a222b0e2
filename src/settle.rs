use rand::Rng;

use crate::ledger::settle_edges;
use crate::model::{GroupSettlement, PayoutEdge, Player, WagerInstance};
use crate::wager::{calculate, random_pairings};

/// Settle every wager for one group.
///
/// Pure: the same players and wagers always produce the same settlement.
#[must_use]
pub fn settle_group(players: &[Player], wagers: &[WagerInstance]) -> GroupSettlement {
    let results: Vec<_> = wagers.iter().map(|w| calculate(players, w)).collect();
    let edges: Vec<PayoutEdge> = results
        .iter()
        .flat_map(|r| r.payouts.iter().copied())
        .collect();
    let (balances, settlements) = settle_edges(&edges, players.len());
    log::debug!(
        "settled {} wagers: {} edges, {} transfers",
        results.len(),
        edges.len(),
        settlements.len()
    );
    GroupSettlement {
        results,
        settlements,
        balances,
    }
}

/// Give every sixes wager without a partner rotation a random one.
/// Returns how many wagers were filled in.
pub fn assign_missing_pairings<R: Rng + ?Sized>(wagers: &mut [WagerInstance], rng: &mut R) -> usize {
    let mut assigned = 0;
    for wager in wagers.iter_mut() {
        if let WagerInstance::Sixes { pairings, .. } = wager {
            if pairings.is_none() {
                *pairings = Some(random_pairings(rng));
                assigned += 1;
            }
        }
    }
    assigned
}
