use super::dates::format_date_label;
use crate::features::expenses::{CategoryFilter, Expense, SortOption};
use chrono::NaiveDate;
use serde::Serialize;

/// 同じ見出しラベルにまとめられた経費
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateGroup {
    /// `"Today"`、`"Yesterday"`、または `"Mon, Jan 1"` 形式のラベル
    pub label: String,
    pub expenses: Vec<Expense>,
}

/// 経費を日付ラベルごとにまとめる
///
/// グループはラベルが最初に現れた順に並び、グループ内では入力順を保つ（並べ替えない）。
pub fn group_by_date(expenses: &[Expense], today: NaiveDate) -> Vec<DateGroup> {
    let mut groups: Vec<DateGroup> = Vec::new();

    for expense in expenses {
        let label = format_date_label(expense.date, today);
        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.expenses.push(expense.clone()),
            None => groups.push(DateGroup {
                label,
                expenses: vec![expense.clone()],
            }),
        }
    }

    groups
}

/// 検索語がメモまたはカテゴリーIDに含まれるか（大文字小文字を区別しない）
fn matches_search(expense: &Expense, needle: &str) -> bool {
    let in_note = expense
        .note
        .as_deref()
        .map(|note| note.to_lowercase().contains(needle))
        .unwrap_or(false);
    in_note || expense.category.to_lowercase().contains(needle)
}

/// 経費を検索・絞り込み・並べ替えする
///
/// # 引数
/// * `expenses` - 経費一覧
/// * `search_term` - 検索語（空の場合は検索しない）
/// * `category_filter` - カテゴリーによる絞り込み
/// * `sort` - 並び順（安定ソートのため同値は入力順を保つ）
pub fn filter_and_sort(
    expenses: &[Expense],
    search_term: &str,
    category_filter: &CategoryFilter,
    sort: SortOption,
) -> Vec<Expense> {
    let needle = search_term.to_lowercase();

    let mut filtered: Vec<Expense> = expenses
        .iter()
        .filter(|e| needle.is_empty() || matches_search(e, &needle))
        .filter(|e| category_filter.matches(e))
        .cloned()
        .collect();

    match sort {
        SortOption::Latest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::AmountHigh => filtered.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        SortOption::AmountLow => filtered.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
    }

    filtered
}
