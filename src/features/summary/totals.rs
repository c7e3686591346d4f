use super::dates::{is_this_month, is_this_week, is_today};
use crate::features::expenses::Expense;
use chrono::NaiveDate;
use serde::Serialize;

/// 期間ごとの合計金額
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub today: f64,
    pub this_week: f64,
    pub this_month: f64,
}

/// 今日・今週・今月の合計金額を計算する
///
/// 各期間は独立に判定するため、今日の経費は3つすべてに加算される。
pub fn compute_totals(expenses: &[Expense], today: NaiveDate) -> Totals {
    let sum_where = |predicate: fn(NaiveDate, NaiveDate) -> bool| -> f64 {
        expenses
            .iter()
            .filter(|e| predicate(e.date, today))
            .map(|e| e.amount)
            .sum()
    };

    Totals {
        today: sum_where(is_today),
        this_week: sum_where(is_this_week),
        this_month: sum_where(is_this_month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use quickcheck_macros::quickcheck;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn expense(amount: f64, date: NaiveDate) -> Expense {
        Expense {
            id: "1".to_string(),
            amount,
            category: "food".to_string(),
            note: None,
            date,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let totals = compute_totals(&[], d(2024, 3, 15));
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.today, 0.0);
        assert_eq!(totals.this_week, 0.0);
        assert_eq!(totals.this_month, 0.0);
    }

    #[test]
    fn test_single_expense_today() {
        let today = d(2024, 3, 15);
        let totals = compute_totals(&[expense(12.5, today)], today);

        assert_eq!(totals.today, 12.5);
        assert_eq!(totals.this_week, 12.5);
        assert_eq!(totals.this_month, 12.5);
    }

    #[test]
    fn test_windows_are_independent() {
        let today = d(2024, 3, 15); // 金曜日、週の開始は3/10
        let expenses = vec![
            expense(10.0, d(2024, 3, 15)), // 今日
            expense(20.0, d(2024, 3, 11)), // 今週
            expense(40.0, d(2024, 3, 2)),  // 今月
            expense(80.0, d(2024, 2, 28)), // 先月
            expense(160.0, d(2023, 3, 15)), // 昨年の同月
        ];

        let totals = compute_totals(&expenses, today);
        assert_eq!(totals.today, 10.0);
        assert_eq!(totals.this_week, 30.0);
        assert_eq!(totals.this_month, 70.0);
    }

    #[test]
    fn test_week_spanning_previous_month() {
        // 3/2(土)の週は2/25(日)から始まる
        let today = d(2024, 3, 2);
        let expenses = vec![expense(5.0, d(2024, 2, 26)), expense(7.0, d(2024, 3, 1))];

        let totals = compute_totals(&expenses, today);
        assert_eq!(totals.this_week, 12.0);
        assert_eq!(totals.this_month, 7.0);
    }

    #[quickcheck]
    fn prop_all_today_totals_are_equal(cents: Vec<u16>) -> bool {
        let today = d(2024, 3, 15);
        let expenses: Vec<Expense> = cents
            .iter()
            .map(|c| expense(f64::from(*c) / 100.0 + 0.01, today))
            .collect();
        let sum: f64 = expenses.iter().map(|e| e.amount).sum();

        let totals = compute_totals(&expenses, today);
        totals.today == sum && totals.this_week == sum && totals.this_month == sum
    }
}
