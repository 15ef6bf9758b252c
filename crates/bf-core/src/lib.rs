pub mod error;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod raw;

pub use error::CriteriaError;
pub use matching::engine::MatchingEngine;
pub use raw::RawRecord;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 지역/업종의 적용 범위
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// 전국/전체 — 어떤 코드든 허용
    All,
    /// 명시된 코드 집합만 허용
    Listed(BTreeSet<String>),
}

impl Scope {
    pub fn permits(&self, code: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Listed(codes) => codes.contains(code),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }

    pub fn listed(codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Scope::Listed(codes.into_iter().map(Into::into).collect())
    }
}

/// 신청 마감
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deadline {
    /// 확정 마감일
    Fixed(NaiveDate),
    /// 상시 접수(마감 없음)
    Rolling,
}

impl Deadline {
    pub fn is_rolling(&self) -> bool {
        matches!(self, Deadline::Rolling)
    }

    /// 기준일부터 남은 일수. 당일 마감은 Some(0), 지난 건 음수, 상시는 None.
    pub fn days_remaining(&self, reference: NaiveDate) -> Option<i64> {
        match self {
            Deadline::Fixed(date) => Some(date.signed_duration_since(reference).num_days()),
            Deadline::Rolling => None,
        }
    }
}

/// 정규화 완료된 지원사업. 매칭은 이 형태만 본다(원본 맵은 접근 금지).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportProgram {
    /// 중복 제거 키. 레지스트리가 id를 안 주면 제목으로 대체
    pub id: String,
    pub title: String,
    /// None = 하한 없음
    pub eligible_age_min: Option<u32>,
    /// None = 상한 없음
    pub eligible_age_max: Option<u32>,
    pub eligible_regions: Scope,
    pub eligible_industries: Scope,
    pub deadline: Deadline,
    /// 원본 레코드(표시/디버그 전용)
    pub source_raw: RawRecord,
}

/// 검색 조건. 매칭 전에 validate()를 통과해야 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// 신청자 나이(만)
    pub applicant_age: u32,
    /// 시/도 (예: "서울", "전북특별자치도")
    pub region: String,
    /// 업종 (예: "제조업")
    pub industry: String,
    /// 마감 판정 기준일. None이면 오늘.
    pub reference_date: Option<NaiveDate>,
}

impl SearchCriteria {
    /// 조건이 깨진 채 매칭하면 조용히 과다 매칭되므로 먼저 실패시킨다
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.applicant_age == 0 || self.applicant_age > 120 {
            return Err(CriteriaError::InvalidAge(self.applicant_age));
        }
        if self.region.trim().is_empty() {
            return Err(CriteriaError::MissingRegion);
        }
        if self.industry.trim().is_empty() {
            return Err(CriteriaError::MissingIndustry);
        }
        Ok(())
    }

    pub fn resolved_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

/// 매칭 결과 1건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub program: SupportProgram,
    /// 상시 접수면 None. 결과에 남은 건 전부 0 이상.
    pub days_remaining: Option<i64>,
    pub is_rolling: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn days_remaining_counts_whole_days() {
        let deadline = Deadline::Fixed(d(2025, 6, 1));
        assert_eq!(deadline.days_remaining(d(2025, 5, 25)), Some(7));
        assert_eq!(deadline.days_remaining(d(2025, 6, 1)), Some(0));
        assert_eq!(deadline.days_remaining(d(2025, 6, 3)), Some(-2));
        assert_eq!(Deadline::Rolling.days_remaining(d(2025, 5, 25)), None);
    }

    #[test]
    fn scope_all_permits_everything() {
        assert!(Scope::All.permits("서울특별시"));
        let listed = Scope::listed(["서울특별시", "경기도"]);
        assert!(listed.permits("경기도"));
        assert!(!listed.permits("부산광역시"));
    }

    #[test]
    fn criteria_validation_fails_fast() {
        let base = SearchCriteria {
            applicant_age: 30,
            region: "서울".into(),
            industry: "제조업".into(),
            reference_date: None,
        };
        assert!(base.validate().is_ok());

        let mut bad = base.clone();
        bad.applicant_age = 0;
        assert_eq!(bad.validate(), Err(CriteriaError::InvalidAge(0)));

        let mut bad = base.clone();
        bad.region = "  ".into();
        assert_eq!(bad.validate(), Err(CriteriaError::MissingRegion));

        let mut bad = base;
        bad.industry = String::new();
        assert_eq!(bad.validate(), Err(CriteriaError::MissingIndustry));
    }
}
