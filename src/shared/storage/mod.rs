/// キーバリューストア抽象
///
/// 経費・カテゴリーのコレクションはこのトレイトを通してのみ永続化されます。
/// バックエンドは起動時に設定から選択され、リポジトリに注入されます：
/// - `MemoryStore`: プロセス内マップ（テスト・一時セッション用）
/// - `JsonFileStore`: 単一JSONファイルのストア
/// - `SqliteStore`: SQLiteの`kv`テーブル
pub mod file;
pub mod memory;
pub mod records;
pub mod sqlite;

use crate::shared::errors::AppResult;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use records::{read_collection, write_collection};
pub use sqlite::SqliteStore;

/// バイト列を保存する同期キーバリューストア
///
/// 各操作は失敗しうる（容量超過、ストレージ無効化など）。
/// 失敗の扱い（空データへの縮退）は呼び出し側のリポジトリが決める。
pub trait KeyValueStore: Send + Sync {
    /// キーに対応する値を取得する（存在しない場合はNone）
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    /// キーに値を保存する（既存の値は上書き）
    fn set(&self, key: &str, value: &[u8]) -> AppResult<()>;

    /// キーを削除する（存在しない場合も成功）
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}
