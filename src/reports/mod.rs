use armorforge::scanner::{ArmorStat, Rejection, ScanCounters, ScanStatistics};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

pub fn print_counters(counters: &ScanCounters) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Outcome").add_attribute(Attribute::Bold),
        Cell::new("Permutations"),
        Cell::new("Share"),
    ]);
    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let total = counters.scanned.max(1) as f32;
    let share = |n: usize| format!("{:.2}%", n as f32 / total * 100.0);

    table.add_row(vec![
        Cell::new("accepted").fg(Color::Green),
        Cell::new(counters.accepted),
        Cell::new(share(counters.accepted)),
    ]);
    for reason in Rejection::iter() {
        let n = counters.rejected_by(reason);
        table.add_row(vec![
            Cell::new(reason.to_string()).fg(Color::Red),
            Cell::new(n),
            Cell::new(share(n)),
        ]);
    }
    table.add_row(vec![
        Cell::new("scanned").add_attribute(Attribute::Bold),
        Cell::new(counters.scanned),
        Cell::new(""),
    ]);

    println!("\n{}", table);
}

fn combo_label(mask: u8) -> String {
    ArmorStat::iter()
        .filter(|s| mask & s.bit() != 0)
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

pub fn print_statistics(stats: &ScanStatistics) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Stat").add_attribute(Attribute::Bold),
        Cell::new("Max Tier").fg(Color::Cyan),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    for stat in ArmorStat::iter() {
        table.add_row(vec![
            Cell::new(stat.to_string()),
            Cell::new(stats.max_tiers[stat.index()]).fg(Color::Cyan),
        ]);
    }
    println!("\n{}", table);

    let mut combos = Table::new();
    combos
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    combos.set_header(vec![
        Cell::new("Stats at 100").add_attribute(Attribute::Bold),
        Cell::new("Combination"),
    ]);
    for &mask in &stats.combos_3x100 {
        combos.add_row(vec![Cell::new("3"), Cell::new(combo_label(mask))]);
    }
    for &mask in &stats.combos_4x100 {
        combos.add_row(vec![
            Cell::new("4").fg(Color::Green),
            Cell::new(combo_label(mask)),
        ]);
    }
    println!("\n{}", combos);
}
