use crate::shared::errors::{AppError, AppResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 見つからないカテゴリーや新規カテゴリーに使うアイコン
pub const FALLBACK_ICON: &str = "📦";

/// カスタムカテゴリーと不明なカテゴリーに使う色
pub const NEUTRAL_COLOR: &str = "hsl(240 5% 64.9%)";

/// カスタムカテゴリー作成時に選べるアイコン
pub const CATEGORY_ICON_OPTIONS: [&str; 18] = [
    "🍕", "🚗", "🛍️", "📄", "📦", "🎬", "💊", "🎓", "🏠", "✈️", "🎵", "💅", "🏃‍♂️", "📱", "🍺", "☕",
    "🎉", "🔧",
];

/// カテゴリーデータモデル
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// 表示用の色トークン（計算には使わない）
    pub color: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// 存在しないカテゴリーIDに対する表示用の代替カテゴリー
    pub fn fallback(id: &str) -> Self {
        Self::new(id, id, FALLBACK_ICON, NEUTRAL_COLOR)
    }

    /// 保存データから読み込んだレコードのスキーマ検証
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::validation("カテゴリーIDが空です"));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::validation(format!(
                "カテゴリー名が空です: id={}",
                self.id
            )));
        }
        Ok(())
    }
}

/// 常に存在する既定のカテゴリー（この順序で先頭に並ぶ）
pub static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::new("food", "Food", "🍕", "hsl(32.1 94.6% 43.7%)"),
        Category::new("transport", "Transport", "🚗", "hsl(221.2 83.2% 53.3%)"),
        Category::new("shopping", "Shopping", "🛍️", "hsl(270.7 91% 65.1%)"),
        Category::new("bills", "Bills", "📄", "hsl(0 84.2% 60.2%)"),
        Category::new("other", "Other", "📦", "hsl(240 5% 64.9%)"),
    ]
});

/// 既定のカテゴリーIDかどうか
pub fn is_default_category(id: &str) -> bool {
    DEFAULT_CATEGORIES.iter().any(|c| c.id == id)
}

/// IDでカテゴリーを探す
pub fn find_category<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.id == id)
}

/// IDでカテゴリーを探し、見つからない場合は代替カテゴリーを返す
pub fn category_or_fallback(categories: &[Category], id: &str) -> Category {
    find_category(categories, id)
        .cloned()
        .unwrap_or_else(|| Category::fallback(id))
}
