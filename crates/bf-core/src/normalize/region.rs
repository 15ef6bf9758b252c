use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;

use crate::Scope;

lazy_static! {
    /// 시/도 표기(축약형 포함) → 공식 명칭
    pub static ref SIDO_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("서울", "서울특별시"); m.insert("서울시", "서울특별시"); m.insert("서울특별시", "서울특별시");
        m.insert("부산", "부산광역시"); m.insert("부산시", "부산광역시"); m.insert("부산광역시", "부산광역시");
        m.insert("대구", "대구광역시"); m.insert("대구광역시", "대구광역시");
        m.insert("인천", "인천광역시"); m.insert("인천광역시", "인천광역시");
        m.insert("광주", "광주광역시"); m.insert("광주광역시", "광주광역시");
        m.insert("대전", "대전광역시"); m.insert("대전광역시", "대전광역시");
        m.insert("울산", "울산광역시"); m.insert("울산광역시", "울산광역시");
        m.insert("세종", "세종특별자치시"); m.insert("세종시", "세종특별자치시"); m.insert("세종특별자치시", "세종특별자치시");
        m.insert("경기", "경기도"); m.insert("경기도", "경기도");
        m.insert("강원", "강원특별자치도"); m.insert("강원도", "강원특별자치도"); m.insert("강원특별자치도", "강원특별자치도");
        m.insert("충북", "충청북도"); m.insert("충청북도", "충청북도");
        m.insert("충남", "충청남도"); m.insert("충청남도", "충청남도");
        m.insert("전북", "전북특별자치도"); m.insert("전라북도", "전북특별자치도"); m.insert("전북특별자치도", "전북특별자치도");
        m.insert("전남", "전라남도"); m.insert("전라남도", "전라남도");
        m.insert("경북", "경상북도"); m.insert("경상북도", "경상북도");
        m.insert("경남", "경상남도"); m.insert("경상남도", "경상남도");
        m.insert("제주", "제주특별자치도"); m.insert("제주도", "제주특별자치도"); m.insert("제주특별자치도", "제주특별자치도");
        m
    };

    /// 앞부분 일치 판정용, 긴 표기 우선
    static ref SIDO_KEYS_BY_LEN: Vec<&'static str> = {
        let mut keys: Vec<_> = SIDO_MAP.keys().copied().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        keys
    };
}

const NATIONWIDE_TOKENS: &[&str] = &["전국", "전지역", "제한없음"];

/// 입력 토큰을 공식 시/도 명칭으로 교정. 모르는 표기는 None.
/// "서울특별시 강남구"처럼 시/군/구가 붙어 있으면 시/도 부분으로 본다.
pub fn correct_region(token: &str) -> Option<&'static str> {
    let t = token.trim();
    if t.is_empty() {
        return None;
    }
    if let Some(official) = SIDO_MAP.get(t).copied() {
        return Some(official);
    }
    SIDO_KEYS_BY_LEN
        .iter()
        .find(|key| t.starts_with(**key))
        .and_then(|key| SIDO_MAP.get(key).copied())
}

fn is_nationwide_token(token: &str) -> bool {
    let t = token.trim();
    t == "전체" || NATIONWIDE_TOKENS.contains(&t)
}

/// 전용 지역 필드의 나열 텍스트를 Scope로 변환한다.
/// ALL 토큰은 함께 나열된 개별 지역보다 우선한다.
/// 아는 지역이 하나도 없으면 제한 없음으로 본다(fail-open).
pub fn parse_region_list(text: &str) -> Scope {
    let mut codes = BTreeSet::new();
    for token in super::split_list(text) {
        if is_nationwide_token(token) {
            return Scope::All;
        }
        if let Some(official) = correct_region(token) {
            codes.insert(official.to_string());
        }
    }
    if codes.is_empty() {
        Scope::All
    } else {
        Scope::Listed(codes)
    }
}

/// 지원대상/요약 자유 텍스트에서 지역 제한을 긁어낸다.
/// 여기서는 "전체"가 너무 흔한 단어라 전국 판정에 쓰지 않는다.
pub fn scan_regions(text: &str) -> Scope {
    if text.contains("전국") {
        return Scope::All;
    }
    let mut codes = BTreeSet::new();
    for (&alias, &official) in SIDO_MAP.iter() {
        if text.contains(alias) {
            codes.insert(official.to_string());
        }
    }
    if codes.is_empty() {
        Scope::All
    } else {
        Scope::Listed(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_short_and_official_forms() {
        assert_eq!(correct_region("서울"), Some("서울특별시"));
        assert_eq!(correct_region("전라북도"), Some("전북특별자치도"));
        assert_eq!(correct_region("경상남도"), Some("경상남도"));
        assert_eq!(correct_region("화성"), None);
    }

    #[test]
    fn corrects_tokens_with_sigungu_tail() {
        assert_eq!(correct_region("서울특별시 강남구"), Some("서울특별시"));
        assert_eq!(correct_region("전북특별자치도 군산시"), Some("전북특별자치도"));
    }

    #[test]
    fn all_token_overrides_listed_regions() {
        assert_eq!(parse_region_list("서울, 전국, 부산"), Scope::All);
        assert_eq!(parse_region_list("전체"), Scope::All);
    }

    #[test]
    fn splits_delimited_lists() {
        assert_eq!(
            parse_region_list("서울·경기/인천"),
            Scope::listed(["서울특별시", "경기도", "인천광역시"])
        );
    }

    #[test]
    fn unknown_only_list_falls_open() {
        assert_eq!(parse_region_list("알수없는곳"), Scope::All);
    }

    #[test]
    fn scans_free_text_for_region_mentions() {
        assert_eq!(
            scan_regions("부산 및 울산 소재 소상공인"),
            Scope::listed(["부산광역시", "울산광역시"])
        );
        assert_eq!(scan_regions("전국 소상공인 누구나"), Scope::All);
        assert_eq!(scan_regions("매출 감소 소상공인"), Scope::All);
    }
}
