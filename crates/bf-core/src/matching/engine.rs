use std::collections::HashSet;

use tracing::debug;

use super::checks::evaluate;
use crate::normalize::normalize_record;
use crate::{CriteriaError, MatchResult, RawRecord, SearchCriteria};

/// 정규화 → 하드 필터 → 중복 제거 → 결정적 정렬 파이프라인.
/// 상태를 갖지 않으므로 조건 세트별로 병렬 호출해도 안전하다.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine;

impl MatchingEngine {
    pub fn new() -> Self {
        Self
    }

    /// 이미 가져온 원본 레코드 일괄에 조건을 적용한다.
    ///
    /// - 조건 검증 실패만 오류로 돌려준다(깨진 조건으로 과다 매칭 방지)
    /// - 빈 입력은 빈 결과(정상)
    /// - 같은 id는 처음 만난 것만 남긴다(페이지 중복/반복 조회 대비)
    /// - 정렬: 남은 일수 오름차순, 상시는 맨 뒤, 동률은 제목순
    pub fn run(
        &self,
        records: &[RawRecord],
        criteria: &SearchCriteria,
    ) -> Result<Vec<MatchResult>, CriteriaError> {
        criteria.validate()?;
        // 실행 중 날짜가 바뀌지 않도록 기준일은 한 번만 확정
        let reference_date = criteria.resolved_reference_date();

        let mut seen = HashSet::new();
        let mut results = Vec::new();
        for raw in records {
            let program = normalize_record(raw);
            let Some(result) = evaluate(&program, criteria, reference_date) else {
                continue;
            };
            if !seen.insert(result.program.id.clone()) {
                continue;
            }
            results.push(result);
        }

        results.sort_by(|a, b| {
            urgency_key(a)
                .cmp(&urgency_key(b))
                .then_with(|| a.program.title.cmp(&b.program.title))
        });

        debug!(
            input = records.len(),
            matched = results.len(),
            %reference_date,
            "matching_done"
        );
        Ok(results)
    }
}

/// 상시(None)는 긴급도 신호가 없으므로 맨 뒤로 보낸다
fn urgency_key(result: &MatchResult) -> i64 {
    result.days_remaining.unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        RawRecord::from_object(value).unwrap()
    }

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            applicant_age: 30,
            region: "서울".into(),
            industry: "제조업".into(),
            reference_date: Some(NaiveDate::from_ymd_opt(2025, 5, 25).unwrap()),
        }
    }

    fn p1_record() -> RawRecord {
        record(json!({
            "id": "P1",
            "title": "경영안정자금",
            "age": "20~39세",
            "region": "서울",
            "industry": "전체",
            "deadline": "20250601",
        }))
    }

    #[test]
    fn scenario_p1_included_with_seven_days() {
        let results = MatchingEngine::new().run(&[p1_record()], &criteria()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].program.id, "P1");
        assert_eq!(results[0].days_remaining, Some(7));
        assert!(!results[0].is_rolling);
    }

    #[test]
    fn scenario_p1_excluded_at_age_45() {
        let mut c = criteria();
        c.applicant_age = 45;
        let results = MatchingEngine::new().run(&[p1_record()], &c).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn missing_age_field_matches_any_age() {
        let raw = record(json!({
            "id": "P2",
            "title": "나이 무관 공고",
            "region": "서울",
            "industry": "전체",
            "deadline": "2025-07-01",
        }));
        for age in [19, 45, 99] {
            let mut c = criteria();
            c.applicant_age = age;
            let results = MatchingEngine::new().run(&[raw.clone()], &c).unwrap();
            assert_eq!(results.len(), 1, "age {age} should match");
        }
    }

    #[test]
    fn expired_programs_are_dropped_entirely() {
        let raw = record(json!({
            "id": "P3",
            "title": "이미 마감된 공고",
            "region": "서울",
            "industry": "전체",
            "deadline": "2025-05-24",
        }));
        let results = MatchingEngine::new().run(&[raw], &criteria()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let first = record(json!({
            "id": "P1",
            "title": "첫 번째 항목",
            "region": "서울",
            "industry": "전체",
            "deadline": "2025-06-01",
        }));
        let second = record(json!({
            "id": "P1",
            "title": "두 번째 항목 (중복)",
            "region": "서울",
            "industry": "전체",
            "deadline": "2025-06-10",
        }));
        let results = MatchingEngine::new().run(&[first, second], &criteria()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].program.title, "첫 번째 항목");
    }

    #[test]
    fn ordering_is_urgency_then_title_with_rolling_last() {
        let batch = vec![
            record(json!({
                "id": "R1", "title": "상시 접수 공고",
                "region": "서울", "industry": "전체", "deadline": "상시",
            })),
            record(json!({
                "id": "B", "title": "나중 마감",
                "region": "서울", "industry": "전체", "deadline": "2025-06-10",
            })),
            record(json!({
                "id": "A2", "title": "동일 마감 ㄴ",
                "region": "서울", "industry": "전체", "deadline": "2025-06-01",
            })),
            record(json!({
                "id": "A1", "title": "동일 마감 ㄱ",
                "region": "서울", "industry": "전체", "deadline": "2025-06-01",
            })),
        ];
        let results = MatchingEngine::new().run(&batch, &criteria()).unwrap();
        let ids: Vec<_> = results.iter().map(|r| r.program.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2", "B", "R1"]);
        assert!(results[3].is_rolling);
    }

    #[test]
    fn reruns_produce_identical_ordering() {
        let batch = vec![
            record(json!({
                "id": "X", "title": "가 공고",
                "region": "서울", "industry": "전체", "deadline": "상시",
            })),
            record(json!({
                "id": "Y", "title": "나 공고",
                "region": "서울", "industry": "전체", "deadline": "2025-06-05",
            })),
            record(json!({
                "id": "Z", "title": "다 공고",
                "region": "서울", "industry": "전체", "deadline": "2025-06-05",
            })),
        ];
        let engine = MatchingEngine::new();
        let first = engine.run(&batch, &criteria()).unwrap();
        let second = engine.run(&batch, &criteria()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rolling_marker_survives_any_reference_date() {
        let raw = record(json!({
            "id": "R9",
            "title": "상시 모집",
            "region": "서울",
            "industry": "전체",
            "deadline": "상시",
        }));
        for date in ["2020-01-01", "2030-12-31"] {
            let mut c = criteria();
            c.reference_date = Some(date.parse().unwrap());
            let results = MatchingEngine::new().run(&[raw.clone()], &c).unwrap();
            assert_eq!(results.len(), 1);
            assert!(results[0].is_rolling);
        }
    }

    #[test]
    fn unparseable_deadline_fails_open() {
        let raw = record(json!({
            "id": "T1",
            "title": "마감 TBD 공고",
            "region": "서울",
            "industry": "전체",
            "deadline": "TBD",
        }));
        let results = MatchingEngine::new().run(&[raw], &criteria()).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_rolling);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let results = MatchingEngine::new().run(&[], &criteria()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn invalid_criteria_fails_before_matching() {
        let mut c = criteria();
        c.region = String::new();
        let err = MatchingEngine::new().run(&[p1_record()], &c).unwrap_err();
        assert_eq!(err, CriteriaError::MissingRegion);
    }
}
