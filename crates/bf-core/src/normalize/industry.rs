use std::collections::BTreeSet;

use lazy_static::lazy_static;

use crate::Scope;

lazy_static! {
    /// 표준 업종 코드와 본문에서 찾을 키워드. 순서 고정(판정 재현성).
    pub static ref INDUSTRY_KEYWORDS: Vec<(&'static str, &'static [&'static str])> = vec![
        ("도소매업", &["도소매", "소매", "판매", "유통", "상점"] as &[_]),
        ("음식점업", &["음식점", "식당", "요식업", "외식", "카페", "베이커리"]),
        ("숙박업", &["숙박", "호텔", "펜션", "모텔", "민박"]),
        ("제조업", &["제조", "생산", "공장"]),
        ("서비스업", &["미용", "세탁", "수리"]),
        ("건설업", &["건설", "건축", "인테리어"]),
        ("운수업", &["운수", "운송", "물류", "택배", "택시"]),
        ("교육서비스업", &["교육", "학원", "학습"]),
        ("보건업", &["보건", "의료", "병원", "약국", "의원"]),
        ("예술스포츠여가업", &["예술", "스포츠", "여가", "레저"]),
        ("정보통신업", &["정보통신", "IT", "소프트웨어", "인터넷"]),
        ("농림어업", &["농업", "어업", "축산", "임업", "농림"]),
    ];
}

const ANY_INDUSTRY_TOKENS: &[&str] = &["전체", "전업종", "업종무관", "무관"];

/// 입력 토큰을 표준 업종 코드로 교정. 코드 자체거나 키워드를 품고 있으면 인정.
pub fn correct_industry(token: &str) -> Option<&'static str> {
    let t = token.trim();
    if t.is_empty() {
        return None;
    }
    for &(code, keywords) in INDUSTRY_KEYWORDS.iter() {
        if t == code || keywords.iter().any(|kw| t.contains(kw)) {
            return Some(code);
        }
    }
    None
}

fn is_any_industry_token(token: &str) -> bool {
    ANY_INDUSTRY_TOKENS.contains(&token.trim())
}

/// 전용 업종 필드의 나열 텍스트를 Scope로 변환한다.
/// ALL 토큰은 함께 나열된 개별 업종보다 우선하고,
/// 아는 업종이 하나도 없으면 제한 없음으로 본다(fail-open).
pub fn parse_industry_list(text: &str) -> Scope {
    let mut codes = BTreeSet::new();
    for token in super::split_list(text) {
        if is_any_industry_token(token) {
            return Scope::All;
        }
        if let Some(code) = correct_industry(token) {
            codes.insert(code.to_string());
        }
    }
    if codes.is_empty() {
        Scope::All
    } else {
        Scope::Listed(codes)
    }
}

/// 지원대상/요약 자유 텍스트에서 업종 제한을 긁어낸다.
pub fn scan_industries(text: &str) -> Scope {
    if text.contains("전업종") || text.contains("업종무관") {
        return Scope::All;
    }
    let mut codes = BTreeSet::new();
    for &(code, keywords) in INDUSTRY_KEYWORDS.iter() {
        if text.contains(code) || keywords.iter().any(|kw| text.contains(kw)) {
            codes.insert(code.to_string());
        }
    }
    if codes.is_empty() {
        Scope::All
    } else {
        Scope::Listed(codes)
    }
}
