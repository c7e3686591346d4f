/// 経費機能モジュール
///
/// このモジュールは経費管理に関連する機能を提供します：
/// - 経費の作成（入力値のバリデーション）
/// - 経費一覧の読み込みと保存（新しい順）
/// - 一覧の並び順・絞り込み条件
// サブモジュールの宣言
pub mod commands;
pub mod models;
pub mod repository;

// モデル
pub use models::{CategoryFilter, Expense, ExpenseForm, SortOption};

// コマンド（表示層から呼ばれる入口）
pub use commands::create_expense;
