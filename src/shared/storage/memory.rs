use super::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// プロセス内のメモリ上に値を保持するストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// 空のストアを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存されているキーの数を取得する
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// ストアが空かどうか
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| AppError::storage(format!("ストアのロック取得失敗: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::storage(format!("ストアのロック取得失敗: {e}")))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AppError::storage(format!("ストアのロック取得失敗: {e}")))?;
        entries.remove(key);
        Ok(())
    }
}
