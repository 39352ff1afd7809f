use crate::error::AfResult;
use crate::scanner::types::StatModifier;
use crate::scanner::{AcceptedPermutation, ScanStatistics};
use std::io::Write;

fn mod_label(m: &StatModifier) -> String {
    format!("{}_{}", m.magnitude, m.stat)
}

/// One row per accepted permutation: `index,mod_count,mods` where mods are
/// `minor_mobility;major_strength` style labels.
pub fn write_results_csv<W: Write>(writer: W, results: &[AcceptedPermutation]) -> AfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["index", "mod_count", "mods"])?;
    for r in results {
        let labels: Vec<String> = r.mods.iter().map(mod_label).collect();
        wtr.write_record([
            r.index.to_string(),
            r.mods.len().to_string(),
            labels.join(";"),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_statistics_json<W: Write>(writer: W, statistics: &ScanStatistics) -> AfResult<()> {
    serde_json::to_writer_pretty(writer, statistics)?;
    Ok(())
}
