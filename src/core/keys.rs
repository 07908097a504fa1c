use crate::utils::error::{EtlError, Result};

/// 將數字鍵解析為整數：允許前後空白與正負號，前導零會被去掉
pub fn parse_integer_key(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|e| EtlError::InvalidKey {
        key: raw.to_string(),
        reason: e.to_string(),
    })
}

/// "007" -> "7"
pub fn canonical_key(raw: &str) -> Result<String> {
    parse_integer_key(raw).map(|n| n.to_string())
}

pub fn shift_key(raw: &str, offset: i64) -> Result<String> {
    let value = parse_integer_key(raw)?;
    value
        .checked_add(offset)
        .map(|n| n.to_string())
        .ok_or_else(|| EtlError::InvalidKey {
            key: raw.to_string(),
            reason: format!("offset {} overflows a 64-bit key", offset),
        })
}
