use crate::features::categories::models::{Category, FALLBACK_ICON, NEUTRAL_COLOR};
use crate::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::storage::KeyValueStore;
use crate::shared::utils::{normalize_string, slugify};

/// カスタムカテゴリーを作成する
///
/// # 引数
/// * `repo` - リポジトリ
/// * `name` - 表示名（前後の空白は取り除いて保存する）
/// * `icon` - アイコン（空の場合は既定のアイコン）
///
/// # 戻り値
/// 作成されたカテゴリー、または失敗時はエラー（この場合は何も保存しない）
pub fn create_category<S: KeyValueStore>(
    repo: &Repository<S>,
    name: &str,
    icon: &str,
) -> AppResult<Category> {
    let name = normalize_string(name);

    // バリデーション: 名前は必須
    if name.is_empty() {
        return Err(AppError::validation("カテゴリー名を入力してください"));
    }

    let id = slugify(&name);
    let existing = repo.list_categories();

    // バリデーション: 名前（大文字小文字を区別しない）とIDの重複
    let lowered = name.to_lowercase();
    if existing
        .iter()
        .any(|c| c.name.to_lowercase() == lowered || c.id == id)
    {
        return Err(AppError::validation(format!(
            "カテゴリー「{name}」は既に存在します"
        )));
    }

    let icon = match icon.trim() {
        "" => FALLBACK_ICON,
        icon => icon,
    };

    let category = Category::new(&id, &name, icon, NEUTRAL_COLOR);
    repo.add_category(category.clone());
    log::info!("カテゴリーを作成しました: id={id}");

    Ok(category)
}

/// すべてのデータを削除する
///
/// # 戻り値
/// 削除後のカテゴリー一覧（既定カテゴリーのみ）
pub fn clear_all_data<S: KeyValueStore>(repo: &Repository<S>) -> Vec<Category> {
    repo.clear_all();
    repo.list_categories()
}
