/// Output formatting: terminal table and JSON.
use serde::Serialize;
use swisspair_core::{Pair, PairingReport, PlayerRecord};

#[derive(Serialize)]
struct JsonStanding<'a> {
    rank: usize,
    id: i64,
    name: &'a str,
    wins: u32,
    matches: u32,
    opponent_strength: u32,
}

#[derive(Serialize)]
struct JsonPair<'a> {
    id1: i64,
    name1: &'a str,
    id2: i64,
    name2: &'a str,
}

#[derive(Serialize)]
struct JsonPairing<'a> {
    pairs: Vec<JsonPair<'a>>,
    repair_attempts: usize,
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>, header: &str) -> usize {
    names.map(str::len).max().unwrap_or(0).max(header.len())
}

/// Render standings as a padded terminal table.
pub fn standings_table(records: &[PlayerRecord]) -> String {
    let width = name_width(records.iter().map(|r| r.player.name.as_str()), "Player");

    let mut out = String::new();
    out.push_str(&format!(" # |   ID | {:<width$} | Wins | Matches | Opp. strength\n", "Player"));
    out.push_str(&format!("---|------|-{}-|------|---------|--------------\n", "-".repeat(width)));

    for (i, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>2} | {:>4} | {:<width$} | {:>4} | {:>7} | {:>13}\n",
            i + 1,
            r.player.id,
            r.player.name,
            r.wins,
            r.matches,
            r.opponent_strength,
        ));
    }

    out.push_str(&format!("\n{} players\n", records.len()));
    out
}

/// Render pairings as a padded terminal table.
pub fn pairing_table(report: &PairingReport) -> String {
    let width = name_width(
        report.pairs.iter().map(|p| p.player1.name.as_str()),
        "Player 1",
    );

    let mut out = String::new();
    out.push_str(&format!(
        "Table |  ID1 | {:<width$} |  ID2 | Player 2\n",
        "Player 1"
    ));
    out.push_str(&format!(
        "------|------|-{}-|------|---------\n",
        "-".repeat(width)
    ));

    for (i, pair) in report.pairs.iter().enumerate() {
        let (id1, name1, id2, name2) = pair.as_tuple();
        out.push_str(&format!(
            "{:>5} | {:>4} | {:<width$} | {:>4} | {}\n",
            i + 1,
            id1,
            name1,
            id2,
            name2,
        ));
    }

    out.push_str(&format!("\n{} pairs", report.pairs.len()));
    if report.attempts > 0 {
        out.push_str(&format!(
            " ({} rematch repair swaps)",
            report.attempts
        ));
    }
    out.push('\n');
    out
}

pub fn standings_json(records: &[PlayerRecord]) -> serde_json::Result<String> {
    let rows: Vec<JsonStanding> = records
        .iter()
        .enumerate()
        .map(|(i, r)| JsonStanding {
            rank: i + 1,
            id: r.player.id,
            name: &r.player.name,
            wins: r.wins,
            matches: r.matches,
            opponent_strength: r.opponent_strength,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

fn json_pair(pair: &Pair) -> JsonPair<'_> {
    let (id1, name1, id2, name2) = pair.as_tuple();
    JsonPair { id1, name1, id2, name2 }
}

pub fn pairing_json(report: &PairingReport) -> serde_json::Result<String> {
    let output = JsonPairing {
        pairs: report.pairs.iter().map(json_pair).collect(),
        repair_attempts: report.attempts,
    };
    serde_json::to_string_pretty(&output)
}
