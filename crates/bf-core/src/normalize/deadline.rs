use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Deadline;

// 상시/수시/연중 접수, 예산 소진 시까지 등 마감 없음 표기
static ROLLING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(상시|수시|연중|예산\s*소진)").unwrap());

// 레지스트리에서 실제로 관측된 표기들
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%Y%m%d"];

/// 마감 문자열을 Deadline으로 해석한다.
///
/// - "시작 ~ 종료" 범위 표기는 종료일을 취한다
/// - 상시류 마커와 해석 불가 문자열은 전부 Rolling으로 떨어뜨린다
///   (깨진 레코드도 결과에는 나와야 하므로 fail-open)
pub fn parse_deadline(text: &str) -> Deadline {
    let trimmed = text.trim();
    if trimmed.is_empty() || ROLLING_RE.is_match(trimmed) {
        return Deadline::Rolling;
    }

    let candidate = match trimmed.rsplit_once(['~', '〜', '∼']) {
        Some((_, tail)) => tail.trim(),
        None => trimmed,
    };

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
            return Deadline::Fixed(date);
        }
    }

    Deadline::Rolling
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(y: i32, m: u32, d: u32) -> Deadline {
        Deadline::Fixed(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn parses_all_observed_formats() {
        assert_eq!(parse_deadline("20250601"), fixed(2025, 6, 1));
        assert_eq!(parse_deadline("2025-06-01"), fixed(2025, 6, 1));
        assert_eq!(parse_deadline("2025.06.01"), fixed(2025, 6, 1));
        assert_eq!(parse_deadline("2025/6/1"), fixed(2025, 6, 1));
    }

    #[test]
    fn range_notation_takes_end_date() {
        assert_eq!(
            parse_deadline("2025-05-01 ~ 2025-06-01"),
            fixed(2025, 6, 1)
        );
        assert_eq!(parse_deadline("20250501~20250601"), fixed(2025, 6, 1));
    }

    #[test]
    fn rolling_markers_yield_rolling() {
        assert_eq!(parse_deadline("상시"), Deadline::Rolling);
        assert_eq!(parse_deadline("연중 수시 접수"), Deadline::Rolling);
        assert_eq!(parse_deadline("예산 소진 시까지"), Deadline::Rolling);
    }

    #[test]
    fn unparseable_falls_open_to_rolling() {
        assert_eq!(parse_deadline("TBD"), Deadline::Rolling);
        assert_eq!(parse_deadline(""), Deadline::Rolling);
        // 달력에 없는 날짜
        assert_eq!(parse_deadline("20251345"), Deadline::Rolling);
    }
}
