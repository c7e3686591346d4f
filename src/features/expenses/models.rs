use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 経費データモデル
///
/// 作成後は変更されない。保存時のフィールド名は `createdAt` のみキャメルケース。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// 作成時刻（エポックミリ秒）由来のID
    pub id: String,
    /// 金額（正の数、通貨は区別しない）
    pub amount: f64,
    /// カテゴリーID（存在しないIDも許容する）
    pub category: String,
    /// メモ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// 経費の計上日
    pub date: NaiveDate,
    /// レコードの作成時刻
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// 保存データから読み込んだレコードのスキーマ検証
    ///
    /// # 戻り値
    /// 有効な場合はOk(())、不正なレコードの場合はエラー
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::validation("経費IDが空です"));
        }
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(AppError::validation(format!(
                "経費の金額が不正です: id={}, amount={}",
                self.id, self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(AppError::validation(format!(
                "経費のカテゴリーが空です: id={}",
                self.id
            )));
        }
        Ok(())
    }
}

/// 経費作成フォームの入力値（未検証）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseForm {
    /// 入力された金額の文字列
    pub amount: String,
    /// 選択されたカテゴリーID
    pub category: String,
    /// メモ（空の場合は保存しない）
    #[serde(default)]
    pub note: Option<String>,
}

/// 経費一覧の並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// 作成時刻の新しい順
    #[default]
    Latest,
    /// 金額の大きい順
    AmountHigh,
    /// 金額の小さい順
    AmountLow,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Latest => "latest",
            SortOption::AmountHigh => "amount-high",
            SortOption::AmountLow => "amount-low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "latest" => Ok(SortOption::Latest),
            "amount-high" => Ok(SortOption::AmountHigh),
            "amount-low" => Ok(SortOption::AmountLow),
            other => Err(AppError::validation(format!("不明な並び順です: {other}"))),
        }
    }
}

/// カテゴリーによる絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// 絞り込みなし
    #[default]
    All,
    /// 指定したカテゴリーIDと完全一致するものだけ
    Category(String),
}

impl CategoryFilter {
    /// 経費がこの条件に一致するか
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => expense.category == *id,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            id => CategoryFilter::Category(id.to_string()),
        }
    }
}
