use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "20~39세" / "만 19세~34세" / "19-34세"
    static ref RANGE_RE: Regex =
        Regex::new(r"만?\s*(\d{1,3})\s*세?\s*[~〜∼－-]\s*(\d{1,3})\s*세").unwrap();
    // "만 39세 이하" / "39세 미만"
    static ref MAX_ONLY_RE: Regex = Regex::new(r"만?\s*(\d{1,3})\s*세\s*(이하|미만)").unwrap();
    // "만 60세 이상"
    static ref MIN_ONLY_RE: Regex = Regex::new(r"만?\s*(\d{1,3})\s*세\s*이상").unwrap();
}

/// 연령대 키워드 → 통용 연령 범위 (숫자 표기가 없을 때의 차선책)
fn bracket_range(text: &str) -> Option<(Option<u32>, Option<u32>)> {
    if text.contains("청년") {
        return Some((Some(19), Some(34)));
    }
    if text.contains("중장년") {
        return Some((Some(40), Some(64)));
    }
    if text.contains("시니어") {
        return Some((Some(60), None));
    }
    None
}

/// 자유 텍스트에서 연령 범위를 추출한다.
///
/// - "20~39세" 같은 명시 범위가 최우선
/// - "N세 이하/미만", "N세 이상"은 한쪽만 닫는다
/// - 숫자가 없으면 청년/중장년/시니어 키워드로 추정
/// - 아무것도 못 읽으면 None (호출부에서 무제한 처리)
pub fn parse_age_range(text: &str) -> Option<(Option<u32>, Option<u32>)> {
    if let Some(caps) = RANGE_RE.captures(text) {
        let min: u32 = caps.get(1)?.as_str().parse().ok()?;
        let max: u32 = caps.get(2)?.as_str().parse().ok()?;
        if min <= max {
            return Some((Some(min), Some(max)));
        }
    }

    if let Some(caps) = MAX_ONLY_RE.captures(text) {
        let bound: u32 = caps.get(1)?.as_str().parse().ok()?;
        let max = if caps.get(2).map(|m| m.as_str()) == Some("미만") {
            bound.saturating_sub(1)
        } else {
            bound
        };
        return Some((None, Some(max)));
    }

    if let Some(caps) = MIN_ONLY_RE.captures(text) {
        let min: u32 = caps.get(1)?.as_str().parse().ok()?;
        return Some((Some(min), None));
    }

    bracket_range(text)
}
