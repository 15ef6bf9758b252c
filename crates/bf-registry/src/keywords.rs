use bf_core::SearchCriteria;

/// 검색 조건에서 레지스트리 검색 키워드를 만든다(최대 4개).
/// 레지스트리 키워드 검색은 재현율을 높이는 힌트일 뿐이고,
/// 정밀 필터링은 엔진이 전부 다시 한다.
pub fn build_search_keywords(criteria: &SearchCriteria) -> Vec<String> {
    let mut keywords = Vec::new();

    // 연령대 → 공고에서 통용되는 표현
    let age = criteria.applicant_age;
    if (19..=34).contains(&age) {
        keywords.push("청년".to_string());
    } else if age >= 60 {
        keywords.push("시니어".to_string());
    } else if age >= 40 {
        keywords.push("중장년".to_string());
    }

    let industry = criteria.industry.trim();
    if !industry.is_empty() && industry != "전체" {
        keywords.push(industry.to_string());
    }

    let region = criteria.region.trim();
    if !region.is_empty() && region != "전국" {
        keywords.push(format!("소상공인 {region}"));
    }

    if keywords.is_empty() {
        keywords.push("소상공인".to_string());
    }

    keywords.truncate(4);
    keywords
}
