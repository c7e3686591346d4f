use super::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;

/// SQLiteの`kv`テーブルに値を保存するストア
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// データベースファイルを開き、テーブルを作成する
    ///
    /// # 引数
    /// * `database_path` - データベースファイルのパス
    ///
    /// # 戻り値
    /// ストア、または失敗時はエラー
    pub fn open<P: AsRef<Path>>(database_path: P) -> AppResult<Self> {
        let conn = Connection::open(database_path.as_ref())?;
        create_tables(&conn)?;

        log::info!("データベースを初期化しました: {:?}", database_path.as_ref());

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// メモリ上のデータベースでストアを作成する（テスト用）
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> AppResult<T>) -> AppResult<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| AppError::storage(format!("データベースロック取得失敗: {e}")))?;
        f(&conn)
    }
}

/// データベーステーブルを作成する
///
/// # 引数
/// * `conn` - データベース接続
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY NOT NULL,
            value BLOB NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        self.with_conn(|conn| {
            let value = conn
                .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                    row.get::<_, Vec<u8>>(0)
                })
                .optional()?;
            Ok(value)
        })
    }

    fn set(&self, key: &str, value: &[u8]) -> AppResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, now],
            )?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
            Ok(())
        })
    }
}
