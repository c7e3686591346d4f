use super::dates::is_this_month;
use crate::features::expenses::Expense;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// カテゴリー別の集計値
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// 合計金額
    pub amount: f64,
    /// 件数
    pub count: usize,
    /// 今月の合計に対する割合（%）
    pub percentage: f64,
}

/// カテゴリーIDをキーとした今月の内訳
pub type CategoryBreakdown = BTreeMap<String, CategoryTotal>;

/// 今月の経費をカテゴリー別に集計する
///
/// 割合は `100 * カテゴリー合計 / 今月の合計`。今月の合計が0の場合は0。
pub fn compute_category_breakdown(expenses: &[Expense], today: NaiveDate) -> CategoryBreakdown {
    let monthly: Vec<&Expense> = expenses
        .iter()
        .filter(|e| is_this_month(e.date, today))
        .collect();
    let total: f64 = monthly.iter().map(|e| e.amount).sum();

    let mut breakdown = CategoryBreakdown::new();
    for expense in monthly {
        let entry = breakdown.entry(expense.category.clone()).or_default();
        entry.amount += expense.amount;
        entry.count += 1;
    }

    for entry in breakdown.values_mut() {
        entry.percentage = if total > 0.0 {
            entry.amount / total * 100.0
        } else {
            0.0
        };
    }

    breakdown
}

/// 内訳を金額の大きい順に並べる（同額はカテゴリーID順）
pub fn rank_breakdown(breakdown: &CategoryBreakdown) -> Vec<(String, CategoryTotal)> {
    let mut ranked: Vec<(String, CategoryTotal)> = breakdown
        .iter()
        .map(|(id, total)| (id.clone(), *total))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| b.amount.total_cmp(&a.amount));
    ranked
}
