/// カテゴリー機能モジュール
///
/// 既定カテゴリー、カスタムカテゴリーの保存と作成、カテゴリーの検索を提供します。
pub mod commands;
pub mod models;
pub mod repository;

pub use commands::{clear_all_data, create_category};
pub use models::{
    category_or_fallback, find_category, is_default_category, Category, CATEGORY_ICON_OPTIONS,
    DEFAULT_CATEGORIES, FALLBACK_ICON, NEUTRAL_COLOR,
};
