use super::breakdown::{compute_category_breakdown, rank_breakdown, CategoryTotal};
use super::listing::{filter_and_sort, group_by_date, DateGroup};
use super::totals::{compute_totals, Totals};
use crate::features::categories::{category_or_fallback, Category};
use crate::features::expenses::{CategoryFilter, Expense, SortOption};
use chrono::NaiveDate;
use serde::Serialize;

/// 一覧画面の検索・絞り込み・並び順の条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub category_filter: CategoryFilter,
    pub sort: SortOption,
}

/// 内訳の1行（カテゴリー情報付き）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    /// 不明なカテゴリーIDの場合は代替カテゴリー
    pub category: Category,
    #[serde(flatten)]
    pub total: CategoryTotal,
}

/// 一覧画面がまとめて描画する集計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    /// 今日・今週・今月の合計（絞り込み前の全経費が対象）
    pub totals: Totals,
    /// 今月の内訳（金額の大きい順）
    pub breakdown: Vec<BreakdownRow>,
    /// 絞り込み・並べ替え後の経費を日付ラベルでまとめたもの
    pub groups: Vec<DateGroup>,
    /// 絞り込み後の件数
    pub visible_count: usize,
}

/// 一覧画面の集計結果を作る
pub fn build_overview(
    expenses: &[Expense],
    categories: &[Category],
    query: &ListQuery,
    today: NaiveDate,
) -> OverviewSnapshot {
    let totals = compute_totals(expenses, today);

    let breakdown = rank_breakdown(&compute_category_breakdown(expenses, today))
        .into_iter()
        .map(|(id, total)| BreakdownRow {
            category: category_or_fallback(categories, &id),
            total,
        })
        .collect();

    let visible = filter_and_sort(
        expenses,
        &query.search_term,
        &query.category_filter,
        query.sort,
    );
    let visible_count = visible.len();
    let groups = group_by_date(&visible, today);

    OverviewSnapshot {
        totals,
        breakdown,
        groups,
        visible_count,
    }
}
