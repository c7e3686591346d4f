/// 集計機能モジュール
///
/// 経費一覧から表示用の派生データを計算する純粋関数を提供します：
/// - 日付ラベルごとのグループ化
/// - 今日・今週・今月の合計
/// - 今月のカテゴリー別内訳と割合
/// - 検索・絞り込み・並べ替え
///
/// 「今日」に依存する関数はすべて `today` を引数に取ります。
pub mod breakdown;
pub mod dates;
pub mod listing;
pub mod overview;
pub mod totals;

pub use breakdown::{compute_category_breakdown, rank_breakdown, CategoryBreakdown, CategoryTotal};
pub use dates::{format_date_label, is_this_month, is_this_week, is_today, week_start};
pub use listing::{filter_and_sort, group_by_date, DateGroup};
pub use overview::{build_overview, BreakdownRow, ListQuery, OverviewSnapshot};
pub use totals::{compute_totals, Totals};
