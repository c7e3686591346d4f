use super::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 単一のJSONファイルにキーと値を保存するストア
///
/// ファイルの中身は `{ "キー": "値(UTF-8文字列)" }` 形式のオブジェクト。
/// 書き込みのたびにファイル全体を一時ファイル経由で置き換える。
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // 同一プロセス内での読み込み-変更-書き込みを直列化する
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// ストアを作成する（ファイルは最初の書き込み時に作成される）
    ///
    /// # 引数
    /// * `path` - ストアファイルのパス
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// ストアファイルのパスを取得する
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(AppError::storage(format!(
                "ストアファイルの形式が不正です: {:?}",
                self.path
            ))),
        }
    }

    /// 書き込み用に既存のエントリーを読み込む
    ///
    /// ファイルが壊れている場合は警告を出して空から書き直す。
    /// I/Oエラーはそのまま返す。
    fn read_entries_for_write(&self) -> AppResult<Map<String, Value>> {
        match self.read_entries() {
            Err(e @ (AppError::Json(_) | AppError::Storage(_))) => {
                log::warn!(
                    "ストアファイルが壊れているため、空の状態から書き直します: path={:?}, error={e}",
                    self.path
                );
                Ok(Map::new())
            }
            result => result,
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let entries = self.read_entries()?;
        match entries.get(key) {
            Some(Value::String(text)) => Ok(Some(text.as_bytes().to_vec())),
            Some(_) => Err(AppError::storage(format!(
                "キー{key}の値が文字列ではありません"
            ))),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> AppResult<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| AppError::storage(format!("UTF-8以外の値は保存できません: {e}")))?;

        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AppError::storage(format!("ストアのロック取得失敗: {e}")))?;

        let mut entries = self.read_entries_for_write()?;
        entries.insert(key.to_string(), Value::String(text.to_string()));
        self.write_entries(&entries)?;

        log::debug!("ストアファイルに保存しました: key={key}, path={:?}", self.path);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| AppError::storage(format!("ストアのロック取得失敗: {e}")))?;

        let mut entries = self.read_entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("store.json"));

        // ファイルが無い状態ではNone
        assert_eq!(store.get("expenses").unwrap(), None);

        store.set("expenses", b"[]").unwrap();
        store.set("categories", "[{\"icon\":\"🎬\"}]".as_bytes()).unwrap();
        assert!(store.path().exists());

        // 別インスタンスからも読める（永続化されている）
        let reopened = JsonFileStore::new(store.path().to_path_buf());
        assert_eq!(reopened.get("expenses").unwrap(), Some(b"[]".to_vec()));
        assert_eq!(
            reopened.get("categories").unwrap(),
            Some("[{\"icon\":\"🎬\"}]".as_bytes().to_vec())
        );

        reopened.remove("expenses").unwrap();
        assert_eq!(store.get("expenses").unwrap(), None);
        assert!(store.get("categories").unwrap().is_some());
    }

    #[test]
    fn test_file_store_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("store.json");
        let store = JsonFileStore::new(&path);

        store.set("key", b"value").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.get("key").is_err());

        // オブジェクト以外のJSONも不正
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(store.get("key"), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_corrupt_file_is_overwritten_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "{truncated").unwrap();

        let store = JsonFileStore::new(&path);
        store.set("expenses", b"[]").unwrap();
        assert_eq!(store.get("expenses").unwrap(), Some(b"[]".to_vec()));

        // オブジェクト以外のJSONでも削除できる
        fs::write(&path, "[1, 2, 3]").unwrap();
        store.remove("expenses").unwrap();
        store.set("categories", b"[]").unwrap();
        assert_eq!(store.get("expenses").unwrap(), None);
        assert_eq!(store.get("categories").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_file_store_rejects_non_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("store.json"));

        let result = store.set("key", &[0xff, 0xfe]);
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
