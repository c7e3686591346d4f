use crate::features::expenses::models::Expense;
use crate::shared::errors::AppResult;
use crate::shared::storage::{read_collection, write_collection, KeyValueStore};

/// 経費コレクションを保存するキー
pub const EXPENSES_KEY: &str = "finance-tracker-expenses";

/// 保存されている経費をすべて読み込む（新しい順）
///
/// # 戻り値
/// 経費のリスト、または読み込み・解析失敗時はエラー
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Vec<Expense>> {
    read_collection(store, EXPENSES_KEY, Expense::validate)
}

/// 経費のリスト全体を保存する
pub fn save_all<S: KeyValueStore + ?Sized>(store: &S, expenses: &[Expense]) -> AppResult<()> {
    write_collection(store, EXPENSES_KEY, expenses)
}

/// 経費一覧を取得する
///
/// # 戻り値
/// 経費のリスト。保存データが存在しない・破損している場合は空のリスト。
pub fn find_all<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Expense> {
    load(store).unwrap_or_else(|e| {
        log::log!(e.log_level(), "経費データを読み込めませんでした。空として扱います: {e}");
        Vec::new()
    })
}

/// 経費を先頭に追加して保存する
///
/// 保存に失敗した場合はログを出力して何もしない。
pub fn prepend<S: KeyValueStore + ?Sized>(store: &S, expense: Expense) {
    let mut expenses = find_all(store);
    let id = expense.id.clone();
    expenses.insert(0, expense);

    match save_all(store, &expenses) {
        Ok(()) => log::debug!("経費を保存しました: id={id}, total={}", expenses.len()),
        Err(e) => log::log!(e.log_level(), "経費の保存に失敗しました: id={id}, error={e}"),
    }
}

/// 経費コレクションを削除する
pub fn clear<S: KeyValueStore + ?Sized>(store: &S) {
    if let Err(e) = store.remove(EXPENSES_KEY) {
        log::log!(e.log_level(), "経費データの削除に失敗しました: {e}");
    }
}
