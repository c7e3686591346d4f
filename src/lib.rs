pub mod features;
pub mod repository;
pub mod shared;

use features::categories::{self, Category};
use features::expenses::{self, Expense, ExpenseForm};
use features::summary::{self, CategoryBreakdown, DateGroup, ListQuery, OverviewSnapshot, Totals};
use repository::Repository;
use shared::config::{
    initialize_application, initialize_logging_system, load_environment_variables,
    EnvironmentConfig, InitializationResult,
};
use shared::errors::AppResult;
use shared::storage::KeyValueStore;
use shared::utils::Clock;

/// アプリケーション状態（リポジトリと時計を保持）
///
/// 表示層はこの状態を通してのみデータを読み書きする。
/// 「今日」に依存する集計は `clock` の日付で計算される。
pub struct AppState {
    pub repository: Repository<Box<dyn KeyValueStore>>,
    pub clock: Clock,
    pub initialization: InitializationResult,
}

impl AppState {
    /// 環境変数から設定を読み込み、アプリケーションを初期化する
    ///
    /// # 処理内容
    /// 1. .envファイルの読み込み
    /// 2. 環境設定の構築
    /// 3. ログシステムの初期化
    /// 4. データディレクトリとストアの初期化
    pub fn initialize() -> AppResult<Self> {
        load_environment_variables();
        let config = EnvironmentConfig::from_env()?;
        initialize_logging_system(&config);

        log::info!("アプリケーション初期化を開始します...");
        initialize_application(&config)
    }

    /// 経費一覧（新しい順）
    pub fn expenses(&self) -> Vec<Expense> {
        self.repository.list_expenses()
    }

    /// カテゴリー一覧（既定カテゴリーが先頭）
    pub fn categories(&self) -> Vec<Category> {
        self.repository.list_categories()
    }

    /// 経費を作成する
    pub fn add_expense(&self, form: &ExpenseForm) -> AppResult<Expense> {
        expenses::create_expense(&self.repository, form, &self.clock)
    }

    /// カスタムカテゴリーを作成する
    pub fn add_category(&self, name: &str, icon: &str) -> AppResult<Category> {
        categories::create_category(&self.repository, name, icon)
    }

    /// すべてのデータを削除し、削除後のカテゴリー一覧を返す
    pub fn clear_all_data(&self) -> Vec<Category> {
        categories::clear_all_data(&self.repository)
    }

    /// 今日・今週・今月の合計
    pub fn totals(&self) -> Totals {
        summary::compute_totals(&self.expenses(), self.clock.today())
    }

    /// 今月のカテゴリー別内訳
    pub fn category_breakdown(&self) -> CategoryBreakdown {
        summary::compute_category_breakdown(&self.expenses(), self.clock.today())
    }

    /// 経費を日付ラベルごとにまとめる
    pub fn group_by_date(&self, expenses: &[Expense]) -> Vec<DateGroup> {
        summary::group_by_date(expenses, self.clock.today())
    }

    /// 一覧画面の集計結果
    pub fn overview(&self, query: &ListQuery) -> OverviewSnapshot {
        summary::build_overview(
            &self.expenses(),
            &self.categories(),
            query,
            self.clock.today(),
        )
    }
}
