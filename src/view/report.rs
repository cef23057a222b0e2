use crate::model::{GroupSettlement, Player, WagerResult};
use crate::round::RoundFile;

fn player_name(players: &[Player], index: usize) -> &str {
    players.get(index).map_or("?", |p| p.name.as_str())
}

fn render_card(lines: &mut Vec<String>, players: &[Player], result: &WagerResult) {
    lines.push(format!("== {} ==", result.title));
    if let Some(status) = &result.status {
        lines.push(format!("   {status}"));
    }
    lines.extend(result.details.iter().map(|line| format!("   {line}")));
    lines.extend(result.payouts.iter().map(|edge| {
        format!(
            "   {} -> {}: ${:.2}",
            player_name(players, edge.from),
            player_name(players, edge.to),
            edge.amount
        )
    }));
}

/// Plain-text bet cards, balances and the payments that settle them.
pub fn render_text(round: &RoundFile, players: &[Player], settlement: &GroupSettlement) -> String {
    let mut lines = Vec::new();

    let course = round.course.as_deref().unwrap_or("Round");
    lines.push(match round.played_on {
        Some(date) => format!("{course} ({}) - {}", round.tee.name, date.format("%b %-d, %Y")),
        None => format!("{course} ({})", round.tee.name),
    });
    lines.extend(players.iter().map(|p| {
        format!(
            "  {:<20} HI {:>5.1}  CH {:>3}  thru {}",
            p.name,
            p.handicap_index,
            p.course_handicap,
            p.holes_played()
        )
    }));
    lines.push(String::new());

    for result in &settlement.results {
        render_card(&mut lines, players, result);
        lines.push(String::new());
    }

    lines.push("== Balances ==".to_string());
    lines.extend(
        settlement
            .balances
            .iter()
            .enumerate()
            .map(|(i, balance)| format!("   {:<20} {:>+9.2}", player_name(players, i), balance)),
    );
    lines.push(String::new());

    lines.push("== Settle up ==".to_string());
    if settlement.settlements.is_empty() {
        lines.push("   All square.".to_string());
    }
    lines.extend(settlement.settlements.iter().map(|t| {
        format!(
            "   {} pays {} ${:.2}",
            player_name(players, t.from),
            player_name(players, t.to),
            t.amount
        )
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
