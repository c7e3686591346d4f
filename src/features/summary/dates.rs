use chrono::{Datelike, Duration, NaiveDate};

/// 「今日」の表示ラベル
pub const TODAY_LABEL: &str = "Today";
/// 「昨日」の表示ラベル
pub const YESTERDAY_LABEL: &str = "Yesterday";

/// 日付を一覧の見出しラベルに変換する
///
/// # 戻り値
/// - 今日: `"Today"`
/// - 昨日: `"Yesterday"`
/// - それ以外: 曜日・月・日の短い形式（例: `"Mon, Jan 1"`）
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        TODAY_LABEL.to_string()
    } else if Some(date) == today.pred_opt() {
        YESTERDAY_LABEL.to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

/// 今日かどうか
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// 今日を含む週の開始日（日曜日）
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_sunday()))
}

/// 今週かどうか（週の開始日である日曜日以降であれば今週とみなす）
pub fn is_this_week(date: NaiveDate, today: NaiveDate) -> bool {
    date >= week_start(today)
}

/// 今月かどうか（年と月が一致する）
pub fn is_this_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_format_date_label() {
        let today = d(2024, 3, 15); // 金曜日

        assert_eq!(format_date_label(d(2024, 3, 15), today), "Today");
        assert_eq!(format_date_label(d(2024, 3, 14), today), "Yesterday");
        assert_eq!(format_date_label(d(2024, 3, 13), today), "Wed, Mar 13");
        assert_eq!(format_date_label(d(2024, 1, 1), today), "Mon, Jan 1");
        // 未来の日付も通常の形式
        assert_eq!(format_date_label(d(2024, 3, 16), today), "Sat, Mar 16");
    }

    #[test]
    fn test_yesterday_across_month_boundary() {
        assert_eq!(format_date_label(d(2024, 2, 29), d(2024, 3, 1)), "Yesterday");
        assert_eq!(format_date_label(d(2023, 12, 31), d(2024, 1, 1)), "Yesterday");
    }

    #[test]
    fn test_week_start_is_sunday() {
        assert_eq!(week_start(d(2024, 3, 15)), d(2024, 3, 10)); // 金曜日
        assert_eq!(week_start(d(2024, 3, 10)), d(2024, 3, 10)); // 日曜日
        assert_eq!(week_start(d(2024, 3, 16)), d(2024, 3, 10)); // 土曜日
        assert_eq!(week_start(d(2024, 3, 2)), d(2024, 2, 25)); // 月をまたぐ
    }

    #[test]
    fn test_is_this_week() {
        let today = d(2024, 3, 13); // 水曜日

        assert!(is_this_week(d(2024, 3, 10), today));
        assert!(is_this_week(d(2024, 3, 13), today));
        assert!(!is_this_week(d(2024, 3, 9), today));
    }

    #[test]
    fn test_is_this_month() {
        let today = d(2024, 3, 13);

        assert!(is_this_month(d(2024, 3, 1), today));
        assert!(is_this_month(d(2024, 3, 31), today));
        assert!(!is_this_month(d(2024, 2, 29), today));
        assert!(!is_this_month(d(2023, 3, 13), today));
    }

    #[test]
    fn test_is_today() {
        assert!(is_today(d(2024, 3, 13), d(2024, 3, 13)));
        assert!(!is_today(d(2024, 3, 12), d(2024, 3, 13)));
    }
}
