use rand::SeedableRng;
use rand::rngs::SmallRng;
use rusty_golf_wagers::ledger::replay;
use rusty_golf_wagers::model::{GroupSettlement, WagerDetail};
use rusty_golf_wagers::round::RoundFile;
use rusty_golf_wagers::view::render_text;
use rusty_golf_wagers::{assign_missing_pairings, settle_group};

fn settled_fixture() -> Result<(RoundFile, GroupSettlement), Box<dyn std::error::Error>> {
    let mut round = RoundFile::from_json(include_str!("test7_round.json"))?;
    let assigned = assign_missing_pairings(&mut round.wagers, &mut SmallRng::seed_from_u64(42));
    assert_eq!(assigned, 1);
    let settlement = settle_group(&round.players(), &round.wagers);
    Ok((round, settlement))
}

#[test]
fn test_fixture_enrichment() -> Result<(), Box<dyn std::error::Error>> {
    let round = RoundFile::from_json(include_str!("test7_round.json"))?;
    let players = round.players();
    let handicaps: Vec<i32> = players.iter().map(|p| p.course_handicap).collect();
    // index * 125 / 113, rating equals par
    assert_eq!(handicaps, vec![0, 10, 5, 15]);
    for p in &players {
        assert_eq!(p.stroke_allocation.iter().sum::<i32>(), p.course_handicap);
        assert_eq!(p.holes_played(), 18);
    }
    assert_eq!(round.tee.par(), 72);
    Ok(())
}

#[test]
fn test_group_settlement_properties() -> Result<(), Box<dyn std::error::Error>> {
    let (round, settlement) = settled_fixture()?;
    let player_count = round.roster.len();

    assert_eq!(settlement.results.len(), round.wagers.len());
    assert_eq!(settlement.balances.len(), player_count);

    let sum: f64 = settlement.balances.iter().sum();
    assert!(sum.abs() < 1e-6, "balances sum to {sum}");

    for result in &settlement.results {
        assert!(result.payouts.iter().all(|e| e.from != e.to), "{}", result.title);
        assert!(result.payouts.iter().all(|e| e.amount >= 0.005), "{}", result.title);
    }

    if settlement.balances.iter().any(|b| b.abs() > 0.01) {
        assert!(!settlement.settlements.is_empty());
        assert!(settlement.settlements.len() < player_count);
    }
    assert!(settlement.settlements.iter().all(|t| t.from != t.to));

    let replayed = replay(&settlement.settlements, player_count);
    for (player, (want, got)) in settlement.balances.iter().zip(&replayed).enumerate() {
        assert!(
            (want - got).abs() <= 0.01,
            "player {player}: balance {want} replayed as {got}"
        );
    }

    let skins = settlement
        .results
        .iter()
        .find_map(|r| match &r.detail {
            WagerDetail::Skins {
                earnings,
                total_skins,
                ..
            } => Some((earnings.clone(), *total_skins)),
            _ => None,
        })
        .ok_or("missing skins result")?;
    if skins.1 > 0 {
        let pot: f64 = skins.0.iter().sum();
        assert!((pot - 80.0).abs() < 1e-6);
    }
    Ok(())
}

#[test]
fn test_settlement_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let (round, first) = settled_fixture()?;
    let second = settle_group(&round.players(), &round.wagers);
    assert_eq!(first, second);

    let (_, reseeded) = settled_fixture()?;
    assert_eq!(first, reseeded);
    Ok(())
}

#[test]
fn test_text_report_lists_everyone() -> Result<(), Box<dyn std::error::Error>> {
    let (round, settlement) = settled_fixture()?;
    let report = render_text(&round, &round.players(), &settlement);

    assert!(report.starts_with("Lakeside Municipal (White) - Sep 19, 2026"));
    for name in ["Ann", "Ben", "Cal", "Dee"] {
        assert!(report.contains(name), "report missing {name}");
    }
    assert!(report.contains("== Net Skins (carry-over) =="));
    assert!(report.contains("== Settle up =="));

    let json = serde_json::to_string(&settlement)?;
    let back: GroupSettlement = serde_json::from_str(&json)?;
    assert_eq!(back.settlements, settlement.settlements);
    Ok(())
}

#[test]
fn test_text_report_without_date_or_debts() -> Result<(), Box<dyn std::error::Error>> {
    let mut round = RoundFile::from_json(include_str!("test7_round.json"))?;
    round.played_on = None;
    round.course = None;
    round.wagers.clear();
    let players = round.players();
    let settlement = settle_group(&players, &round.wagers);
    let report = render_text(&round, &players, &settlement);

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Round (White)");
    assert!(lines[1].starts_with("  Ann"));
    assert!(report.ends_with("== Settle up ==\n   All square.\n"), "{report}");
    assert_eq!(report.matches("+0.00").count(), 4);
    Ok(())
}
