use crate::features::categories::models::{is_default_category, Category, DEFAULT_CATEGORIES};
use crate::shared::errors::AppResult;
use crate::shared::storage::{read_collection, write_collection, KeyValueStore};

/// カスタムカテゴリーを保存するキー
pub const CATEGORIES_KEY: &str = "finance-tracker-categories";

/// 保存されているカスタムカテゴリーを読み込む（既定カテゴリーは含まない場合がある）
pub fn load_stored<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Vec<Category>> {
    read_collection(store, CATEGORIES_KEY, Category::validate)
}

/// 既定カテゴリーと保存済みカテゴリーを結合する
///
/// 既定カテゴリーが先頭に並び、保存順のカスタムカテゴリーが続く。
/// IDが重複した場合は既定カテゴリーを優先し、保存側の重複も1件にまとめる。
pub fn merge_with_defaults(stored: Vec<Category>) -> Vec<Category> {
    let mut categories = DEFAULT_CATEGORIES.clone();
    for category in stored {
        if categories.iter().any(|c| c.id == category.id) {
            log::debug!("重複するカテゴリーIDを無視します: id={}", category.id);
            continue;
        }
        categories.push(category);
    }
    categories
}

/// カテゴリー一覧を取得する
///
/// # 戻り値
/// 既定カテゴリーを必ず含むカテゴリーのリスト。
/// 保存データが存在しない・破損している場合は既定カテゴリーのみ。
pub fn find_all<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Category> {
    let stored = load_stored(store).unwrap_or_else(|e| {
        log::log!(e.log_level(), "カテゴリーデータを読み込めませんでした。既定値を使用します: {e}");
        Vec::new()
    });
    merge_with_defaults(stored)
}

/// カテゴリー一覧を保存する（既定カテゴリーは保存しない）
pub fn save_all<S: KeyValueStore + ?Sized>(store: &S, categories: &[Category]) -> AppResult<()> {
    let custom: Vec<&Category> = categories
        .iter()
        .filter(|c| !is_default_category(&c.id))
        .collect();
    write_collection(store, CATEGORIES_KEY, &custom)
}

/// カテゴリーを末尾に追加して保存する
///
/// 保存に失敗した場合はログを出力して何もしない。
pub fn append<S: KeyValueStore + ?Sized>(store: &S, category: Category) {
    let mut categories = find_all(store);
    let id = category.id.clone();
    categories.push(category);

    match save_all(store, &categories) {
        Ok(()) => log::debug!("カテゴリーを保存しました: id={id}"),
        Err(e) => log::log!(e.log_level(), "カテゴリーの保存に失敗しました: id={id}, error={e}"),
    }
}

/// カスタムカテゴリーを削除する
pub fn clear<S: KeyValueStore + ?Sized>(store: &S) {
    if let Err(e) = store.remove(CATEGORIES_KEY) {
        log::log!(e.log_level(), "カテゴリーデータの削除に失敗しました: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::NEUTRAL_COLOR;
    use crate::shared::storage::MemoryStore;

    fn ids(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_find_all_returns_defaults_when_empty() {
        let store = MemoryStore::new();
        let categories = find_all(&store);
        assert_eq!(categories, *DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_append_persists_only_custom_categories() {
        let store = MemoryStore::new();
        append(&store, Category::new("gym", "Gym", "🏃‍♂️", NEUTRAL_COLOR));
        append(&store, Category::new("coffee", "Coffee", "☕", NEUTRAL_COLOR));

        let categories = find_all(&store);
        assert_eq!(
            ids(&categories),
            vec!["food", "transport", "shopping", "bills", "other", "gym", "coffee"]
        );

        let stored = load_stored(&store).unwrap();
        assert_eq!(ids(&stored), vec!["gym", "coffee"]);
    }

    #[test]
    fn test_default_wins_on_id_collision() {
        let store = MemoryStore::new();
        let stored = r#"[
            {"id":"food","name":"Groceries","icon":"🥦","color":"x"},
            {"id":"gym","name":"Gym","icon":"🏃‍♂️","color":"x"},
            {"id":"gym","name":"Gym again","icon":"🏃‍♂️","color":"x"}
        ]"#;
        store.set(CATEGORIES_KEY, stored.as_bytes()).unwrap();

        let categories = find_all(&store);
        assert_eq!(
            ids(&categories),
            vec!["food", "transport", "shopping", "bills", "other", "gym"]
        );
        assert_eq!(categories[0].name, "Food");
        assert_eq!(categories[5].name, "Gym");
    }

    #[test]
    fn test_malformed_data_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(CATEGORIES_KEY, b"<html>").unwrap();

        assert_eq!(find_all(&store), *DEFAULT_CATEGORIES);
    }

    #[test]
    fn test_clear_restores_defaults() {
        let store = MemoryStore::new();
        append(&store, Category::new("gym", "Gym", "🏃‍♂️", NEUTRAL_COLOR));

        clear(&store);
        assert_eq!(find_all(&store), *DEFAULT_CATEGORIES);
        assert_eq!(store.get(CATEGORIES_KEY).unwrap(), None);
    }
}
