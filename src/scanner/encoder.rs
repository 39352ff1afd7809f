use super::types::StatModifier;
use crate::consts::{
    RESULT_INDEX_HI, RESULT_INDEX_LO, RESULT_MODS, RESULT_MOD_SLOTS, RESULT_WIDTH,
};
use crate::error::{AfResult, ArmorForgeError};
use serde::{Deserialize, Serialize};

/// An accepted permutation: its absolute catalog index and every mod it needs
/// (required mods first, then waste reduction in application order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedPermutation {
    pub index: u32,
    pub mods: Vec<StatModifier>,
}

/// Result record layout (u16 words):
///
/// | word | content |
/// |------|---------|
/// | 0 | index & 0xFFFF |
/// | 1 | index >> 16 |
/// | 2..8 | mod ids, 0 = empty |
pub fn encode_record(result: &AcceptedPermutation, out: &mut [u16]) {
    out[RESULT_INDEX_LO] = (result.index & 0xFFFF) as u16;
    out[RESULT_INDEX_HI] = ((result.index >> 16) & 0xFFFF) as u16;
    for slot in 0..RESULT_MOD_SLOTS {
        out[RESULT_MODS + slot] = result.mods.get(slot).map_or(0, |m| m.id());
    }
}

pub fn encode_results(results: &[AcceptedPermutation]) -> Vec<u16> {
    let mut buffer = vec![0u16; results.len() * RESULT_WIDTH];
    for (result, out) in results.iter().zip(buffer.chunks_exact_mut(RESULT_WIDTH)) {
        encode_record(result, out);
    }
    buffer
}

pub fn decode_results(buffer: &[u16]) -> AfResult<Vec<AcceptedPermutation>> {
    if buffer.len() % RESULT_WIDTH != 0 {
        return Err(ArmorForgeError::Input(format!(
            "Result buffer holds {} words, not a multiple of the record width {}",
            buffer.len(),
            RESULT_WIDTH
        )));
    }

    buffer
        .chunks_exact(RESULT_WIDTH)
        .map(|record| {
            let index =
                record[RESULT_INDEX_LO] as u32 | ((record[RESULT_INDEX_HI] as u32) << 16);
            let mut mods = Vec::new();
            for &id in &record[RESULT_MODS..RESULT_WIDTH] {
                if id == 0 {
                    continue;
                }
                let m = StatModifier::from_id(id).ok_or_else(|| {
                    ArmorForgeError::Input(format!("Unknown mod id {} in result {}", id, index))
                })?;
                mods.push(m);
            }
            Ok(AcceptedPermutation { index, mods })
        })
        .collect()
}

/// Little-endian byte image of a result buffer.
pub fn to_le_bytes(buffer: &[u16]) -> Vec<u8> {
    buffer.iter().flat_map(|w| w.to_le_bytes()).collect()
}

pub fn from_le_bytes(bytes: &[u8]) -> AfResult<Vec<u16>> {
    if bytes.len() % 2 != 0 {
        return Err(ArmorForgeError::Input(format!(
            "Result byte stream has odd length {}",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}
