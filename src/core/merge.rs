use crate::core::keys::{parse_integer_key, shift_key};
use crate::domain::model::MergedDataset;
use crate::utils::error::Result;
use serde_json::{Map, Value};

/// 每個來源之間的鍵偏移間距 (1-50, 51-100, 101-150)
pub const SOURCE_OFFSET_STEP: i64 = 50;

/// 第 n 個來源的預設偏移
pub fn default_offset(index: usize) -> i64 {
    SOURCE_OFFSET_STEP.saturating_mul(index as i64)
}

/// 依序合併多個來源。偏移為 0 的來源保留原本的鍵字串，其他來源的鍵會加上偏移；
/// 鍵衝突時後寫入者覆蓋前者，不視為錯誤。
pub fn merge_with_offsets<'a, I>(sources: I) -> Result<MergedDataset>
where
    I: IntoIterator<Item = (&'a Map<String, Value>, i64)>,
{
    let mut merged = MergedDataset::new();

    for (entries, offset) in sources {
        for (key, value) in entries {
            let new_key = if offset == 0 {
                parse_integer_key(key)?;
                key.clone()
            } else {
                shift_key(key, offset)?
            };

            if merged.insert(new_key.clone(), value.clone()).is_some() {
                tracing::debug!("Key {} overwritten by a later source", new_key);
            }
        }
    }

    Ok(merged)
}

/// 三個來源，偏移分別為 0、50、100
pub fn merge_three(
    first: &Map<String, Value>,
    second: &Map<String, Value>,
    third: &Map<String, Value>,
) -> Result<MergedDataset> {
    merge_with_offsets([
        (first, default_offset(0)),
        (second, default_offset(1)),
        (third, default_offset(2)),
    ])
}
