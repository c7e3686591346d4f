use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// 「今日」と「現在時刻」を決める時計
///
/// タイムゾーンが指定されていない場合はシステムのローカル時刻を使う。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clock {
    timezone: Option<Tz>,
    fixed_now: Option<DateTime<Utc>>,
}

impl Clock {
    /// タイムゾーンを指定して時計を作成する
    pub fn new(timezone: Option<Tz>) -> Self {
        Self {
            timezone,
            fixed_now: None,
        }
    }

    /// 常に同じ時刻を返す時計（テスト用）
    #[cfg(test)]
    pub(crate) fn fixed(instant: DateTime<Utc>, timezone: Option<Tz>) -> Self {
        Self {
            timezone,
            fixed_now: Some(instant),
        }
    }

    /// 現在時刻（UTC）
    pub fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }

    /// 今日の日付
    pub fn today(&self) -> NaiveDate {
        self.date_of(self.now())
    }

    /// 指定した時刻がこの時計のタイムゾーンで何日にあたるか
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self.timezone {
            Some(tz) => instant.with_timezone(&tz).date_naive(),
            None => instant.with_timezone(&Local).date_naive(),
        }
    }
}

/// 入力された金額文字列を解析する
///
/// # バリデーション規則
/// - 数値として解析できること
/// - 有限の値であること
/// - 0より大きいこと
pub fn parse_amount(text: &str) -> AppResult<f64> {
    let amount: f64 = text
        .trim()
        .parse()
        .map_err(|_| AppError::validation("金額は数値で入力してください"))?;

    if !amount.is_finite() {
        return Err(AppError::validation("無効な金額です"));
    }

    if amount <= 0.0 {
        return Err(AppError::validation("金額は0より大きい値を入力してください"));
    }

    Ok(amount)
}

/// 文字列の正規化（前後の空白を削除）
pub fn normalize_string(text: &str) -> String {
    text.trim().to_string()
}

/// 表示名からIDを作る（小文字化し、連続する空白をハイフン1つに置き換える）
///
/// # 例
/// `"Eating Out"` -> `"eating-out"`
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// 作成時刻から経費IDを生成する（エポックからのミリ秒）
///
/// 同一ミリ秒内の衝突は検出しない。
pub fn generate_expense_id(created_at: DateTime<Utc>) -> String {
    created_at.timestamp_millis().to_string()
}

/// 金額をUSD形式でフォーマット（カンマ区切り、小数点以下2桁）
///
/// # 例
/// `1234.5` -> `"$1,234.50"`、`-3.0` -> `"-$3.00"`
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}
