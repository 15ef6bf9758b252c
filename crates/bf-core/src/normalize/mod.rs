pub mod age;
pub mod deadline;
pub mod industry;
pub mod region;

use crate::{RawRecord, SupportProgram};

// 레지스트리가 혼용하는 필드명 후보(신형 API → 구형 RSS 순).
// 정규화기만 이 목록을 안다.
const ID_KEYS: &[&str] = &["pblancId", "pblancSn", "id"];
const TITLE_KEYS: &[&str] = &["pblancNm", "title"];
const AGE_KEYS: &[&str] = &["age"];
const REGION_KEYS: &[&str] = &["region", "rgnNm"];
const INDUSTRY_KEYS: &[&str] = &["industry", "indutyNm"];
const DEADLINE_KEYS: &[&str] = &[
    "deadline",
    "pbancRcptEndDt",
    "reqstBeginEndDe",
    "endDate",
    "end_date",
];
const TARGET_KEYS: &[&str] = &["trgetNm", "target"];
const SUMMARY_KEYS: &[&str] = &["bsnsSumryCn", "description"];

/// 원본 1건을 SupportProgram으로 정규화한다. 절대 실패하지 않는다:
/// 필드별로 해석 불가 시 가장 관대한 값(무제한/전국/상시)으로 내려가
/// 깨진 레코드도 결과에 살아남게 한다.
pub fn normalize_record(raw: &RawRecord) -> SupportProgram {
    let title = raw.text(TITLE_KEYS).unwrap_or_default();
    let id = raw.text(ID_KEYS).unwrap_or_else(|| title.clone());

    // 전용 필드가 없으면 지원대상/사업요약 텍스트에서 긁어낸다
    let eligibility_text = {
        let mut parts = Vec::new();
        if let Some(target) = raw.text(TARGET_KEYS) {
            parts.push(target);
        }
        if let Some(summary) = raw.text(SUMMARY_KEYS) {
            parts.push(summary);
        }
        parts.join(" ")
    };

    let (eligible_age_min, eligible_age_max) = raw
        .text(AGE_KEYS)
        .and_then(|text| age::parse_age_range(&text))
        .or_else(|| age::parse_age_range(&eligibility_text))
        .unwrap_or((None, None));

    let eligible_regions = match raw.text(REGION_KEYS) {
        Some(text) => region::parse_region_list(&text),
        None => region::scan_regions(&eligibility_text),
    };

    let eligible_industries = match raw.text(INDUSTRY_KEYS) {
        Some(text) => industry::parse_industry_list(&text),
        None => industry::scan_industries(&eligibility_text),
    };

    let deadline = raw
        .text(DEADLINE_KEYS)
        .map(|text| deadline::parse_deadline(&text))
        .unwrap_or(crate::Deadline::Rolling);

    SupportProgram {
        id,
        title,
        eligible_age_min,
        eligible_age_max,
        eligible_regions,
        eligible_industries,
        deadline,
        source_raw: raw.clone(),
    }
}

/// 쉼표/가운뎃점/슬래시 나열 분리
pub(crate) fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split([',', '·', '/', '|'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
