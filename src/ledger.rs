use std::cmp::Ordering;

use crate::model::{PayoutEdge, SettlementTransfer};

/// Float noise below this many cents is treated as a whole cent.
const SNAP: f64 = 1e-6;

/// Net position per player: what they are owed minus what they owe.
/// Edges naming a player outside `player_count` are ignored.
pub fn net_balances(edges: &[PayoutEdge], player_count: usize) -> Vec<f64> {
    let mut balances = vec![0.0; player_count];
    for edge in edges {
        if edge.from >= player_count || edge.to >= player_count || edge.from == edge.to {
            log::warn!("dropping edge {} -> {} outside the group", edge.from, edge.to);
            continue;
        }
        balances[edge.to] += edge.amount;
        balances[edge.from] -= edge.amount;
    }
    balances
}

/// Collapse net balances into as few payments as the greedy largest-first
/// match produces. Debtors and creditors are each sorted by size, largest
/// first, with ties kept in player order.
///
/// Matching runs on whole cents from [`balances_in_cents`], so a player
/// joins the netting once their balance rounds to at least a cent and every
/// transfer of a cent or more is emitted. Replaying the transfers lands each
/// player within a cent of their balance.
pub fn settle_balances(balances: &[f64]) -> Vec<SettlementTransfer> {
    let mut debtors: Vec<(usize, i64)> = Vec::new();
    let mut creditors: Vec<(usize, i64)> = Vec::new();
    for (player, cents) in balances_in_cents(balances).into_iter().enumerate() {
        match cents.cmp(&0) {
            Ordering::Less => debtors.push((player, -cents)),
            Ordering::Greater => creditors.push((player, cents)),
            Ordering::Equal => {}
        }
    }
    debtors.sort_by(|a, b| b.1.cmp(&a.1));
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut transfers = Vec::new();
    let (mut d, mut c) = (0, 0);
    while d < debtors.len() && c < creditors.len() {
        let cents = debtors[d].1.min(creditors[c].1);
        transfers.push(SettlementTransfer {
            from: debtors[d].0,
            to: creditors[c].0,
            amount: cents as f64 / 100.0,
        });
        debtors[d].1 -= cents;
        creditors[c].1 -= cents;
        if debtors[d].1 == 0 {
            d += 1;
        }
        if creditors[c].1 == 0 {
            c += 1;
        }
    }

    log::debug!(
        "netted {} debtors against {} creditors into {} transfers",
        debtors.len(),
        creditors.len(),
        transfers.len()
    );
    transfers
}

/// Round each balance to whole cents so the result still sums to zero.
///
/// Every balance is floored, then the cents the floors dropped go one each
/// to the players with the largest remainders, ties in player order. No
/// player moves by a full cent.
pub fn balances_in_cents(balances: &[f64]) -> Vec<i64> {
    let exact: Vec<f64> = balances
        .iter()
        .map(|b| {
            let cents = b * 100.0;
            let nearest = cents.round();
            // 0.29 * 100 is 28.999999999999996
            if (cents - nearest).abs() < SNAP { nearest } else { cents }
        })
        .collect();
    let mut rounded: Vec<i64> = exact.iter().map(|c| c.floor() as i64).collect();

    let short = -rounded.iter().sum::<i64>();
    let short = usize::try_from(short).unwrap_or(0).min(rounded.len());
    let mut by_remainder: Vec<usize> = (0..rounded.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });
    for &player in by_remainder.iter().take(short) {
        rounded[player] += 1;
    }
    rounded
}

/// Net every wager's edges for a group.
pub fn settle_edges(edges: &[PayoutEdge], player_count: usize) -> (Vec<f64>, Vec<SettlementTransfer>) {
    let balances = net_balances(edges, player_count);
    let transfers = settle_balances(&balances);
    (balances, transfers)
}

/// Balances implied by a list of transfers.
pub fn replay(transfers: &[SettlementTransfer], player_count: usize) -> Vec<f64> {
    let mut balances = vec![0.0; player_count];
    for t in transfers {
        if t.from < player_count && t.to < player_count {
            balances[t.to] += t.amount;
            balances[t.from] -= t.amount;
        }
    }
    balances
}
