//! 时间工具函数 — 业务时区转换
//!
//! 日期→时间戳转换统一在 reports 层完成，
//! repository 层只接收 `i64` Unix millis。

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 解析 IANA 时区名，失败时回退 UTC
pub fn parse_timezone(name: &str) -> Tz {
    name.parse::<Tz>().unwrap_or_else(|e| {
        tracing::warn!("Unknown timezone '{}': {}, falling back to UTC", name, e);
        Tz::UTC
    })
}

/// 业务时区的今天
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// 日期开始 (00:00:00) → Unix millis (业务时区)
///
/// DST gap fallback: 如果本地零点不存在 (夏令时跳跃)，fallback 到 UTC。
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// 日期结束 → 次日 00:00:00 的 Unix millis (业务时区)
///
/// 返回次日零点时间戳，调用方使用 `< end` (不含) 语义。
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day, tz)
}

/// Unix millis → 业务时区日期
pub fn millis_to_date(millis: i64, tz: Tz) -> NaiveDate {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&tz).date_naive())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
        );
        assert!(parse_date("09/03/2024").is_err());
    }

    #[test]
    fn test_day_bounds_utc() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(day_start_millis(d, Tz::UTC), 1_704_067_200_000);
        assert_eq!(day_end_millis(d, Tz::UTC) - day_start_millis(d, Tz::UTC), 86_400_000);
    }

    #[test]
    fn test_day_bounds_follow_timezone() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let madrid = parse_timezone("Europe/Madrid");
        // UTC+1 in winter
        assert_eq!(day_start_millis(d, madrid), 1_704_067_200_000 - 3_600_000);
    }

    #[test]
    fn test_millis_to_date() {
        let tz = parse_timezone("America/New_York");
        // 2024-01-02T03:00Z is still Jan 1st in New York
        let millis = 1_704_164_400_000;
        assert_eq!(millis_to_date(millis, tz), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(millis_to_date(millis, Tz::UTC), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_unknown_timezone_falls_back() {
        assert_eq!(parse_timezone("Mars/Olympus"), Tz::UTC);
    }
}
