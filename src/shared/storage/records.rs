use super::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// キーに保存されたJSON配列をレコードの列として読み込む
///
/// # 引数
/// * `store` - キーバリューストア
/// * `key` - コレクションのキー
/// * `validate` - 各レコードのスキーマ検証
///
/// # 戻り値
/// レコードの列。キーが存在しない場合は空。
/// 配列として解析できない場合はエラー。個々の不正なレコードは警告を出して読み飛ばす。
pub fn read_collection<T, S, F>(store: &S, key: &str, validate: F) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
    F: Fn(&T) -> AppResult<()>,
{
    let bytes = match store.get(key)? {
        Some(bytes) => bytes,
        None => return Ok(Vec::new()),
    };

    let raw: Vec<Value> = match serde_json::from_slice::<Value>(&bytes)? {
        Value::Array(items) => items,
        _ => {
            return Err(AppError::storage(format!(
                "{key}の保存データが配列ではありません"
            )))
        }
    };

    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record = serde_json::from_value::<T>(value)
                .map_err(AppError::from)
                .and_then(|record| validate(&record).map(|_| record));
            match record {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("不正なレコードを読み飛ばします: key={key}, index={index}, error={e}");
                    None
                }
            }
        })
        .collect();

    if records.len() != total {
        log::warn!(
            "{key}: {}件中{}件のレコードを読み込みました",
            total,
            records.len()
        );
    }

    Ok(records)
}

/// レコードの列をJSON配列としてキーに保存する（全体を書き換える）
pub fn write_collection<T, S>(store: &S, key: &str, records: &[T]) -> AppResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec(records)?;
    store.set(key, &bytes)
}
