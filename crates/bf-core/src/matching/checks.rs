use chrono::NaiveDate;

use crate::normalize::{industry::correct_industry, region::correct_region};
use crate::{MatchResult, SearchCriteria, SupportProgram};

/// 단일 조건의 판정 결과
#[derive(Debug, Clone, PartialEq)]
pub enum MatchDecision {
    /// 조건 충족, 다음 체크로
    Pass,
    /// 탈락(사유 포함). 탈락은 오류가 아니라 정상 결과.
    Exclude { reason: String },
}

impl MatchDecision {
    pub fn is_exclude(&self) -> bool {
        matches!(self, MatchDecision::Exclude { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            MatchDecision::Exclude { reason } => Some(reason),
            MatchDecision::Pass => None,
        }
    }
}

/// 전체 하드 필터의 집계 결과
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// 하나라도 Exclude면 true
    pub excluded: bool,
    /// (체크명, 판정) 전체 목록
    pub decisions: Vec<(&'static str, MatchDecision)>,
}

impl CheckOutcome {
    pub fn new(decisions: Vec<(&'static str, MatchDecision)>) -> Self {
        let excluded = decisions.iter().any(|(_, d)| d.is_exclude());
        Self { excluded, decisions }
    }

    /// 탈락 사유를 "; "로 연결(통과면 None)
    pub fn exclusion_reasons(&self) -> Option<String> {
        let reasons: Vec<_> = self
            .decisions
            .iter()
            .filter_map(|(name, d)| d.reason().map(|r| format!("{name}: {r}")))
            .collect();
        if reasons.is_empty() {
            None
        } else {
            Some(reasons.join("; "))
        }
    }
}

/// 4개 하드 필터를 전부 실행해 집계한다
pub fn run_all_checks(
    program: &SupportProgram,
    criteria: &SearchCriteria,
    reference_date: NaiveDate,
) -> CheckOutcome {
    let decisions = vec![
        ("age", check_age(program, criteria.applicant_age)),
        ("region", check_region(program, &criteria.region)),
        ("industry", check_industry(program, &criteria.industry)),
        ("deadline", check_deadline(program, reference_date)),
    ];
    CheckOutcome::new(decisions)
}

/// 연령 범위 판정(경계 포함). 한쪽이 무제한이면 그쪽은 무조건 통과.
fn check_age(program: &SupportProgram, applicant_age: u32) -> MatchDecision {
    if let Some(min) = program.eligible_age_min {
        if applicant_age < min {
            return MatchDecision::Exclude {
                reason: format!("age_below_min: {applicant_age} < {min}"),
            };
        }
    }
    if let Some(max) = program.eligible_age_max {
        if applicant_age > max {
            return MatchDecision::Exclude {
                reason: format!("age_above_max: {applicant_age} > {max}"),
            };
        }
    }
    MatchDecision::Pass
}

/// 조건 쪽 지역 표기도 레코드와 같은 정규화를 거친다
/// (서울/서울특별시가 같은 결과를 내도록)
fn check_region(program: &SupportProgram, region: &str) -> MatchDecision {
    let wanted = correct_region(region)
        .map(str::to_string)
        .unwrap_or_else(|| region.trim().to_string());
    if program.eligible_regions.permits(&wanted) {
        MatchDecision::Pass
    } else {
        MatchDecision::Exclude {
            reason: format!("region_not_eligible: {wanted}"),
        }
    }
}

fn check_industry(program: &SupportProgram, industry: &str) -> MatchDecision {
    let wanted = correct_industry(industry)
        .map(str::to_string)
        .unwrap_or_else(|| industry.trim().to_string());
    if program.eligible_industries.permits(&wanted) {
        MatchDecision::Pass
    } else {
        MatchDecision::Exclude {
            reason: format!("industry_not_eligible: {wanted}"),
        }
    }
}

/// 마감 판정: 상시는 통과, 확정 마감은 기준일 당일까지 포함해서 통과.
/// 지난 마감은 하드 탈락(표시용 플래그가 아니라 제외).
fn check_deadline(program: &SupportProgram, reference_date: NaiveDate) -> MatchDecision {
    match program.deadline.days_remaining(reference_date) {
        Some(days) if days < 0 => MatchDecision::Exclude {
            reason: format!("deadline_passed: {}일 경과", -days),
        },
        _ => MatchDecision::Pass,
    }
}

/// 조건 전부 충족 시에만 MatchResult를 만든다. 불일치는 None.
pub fn evaluate(
    program: &SupportProgram,
    criteria: &SearchCriteria,
    reference_date: NaiveDate,
) -> Option<MatchResult> {
    let outcome = run_all_checks(program, criteria, reference_date);
    if outcome.excluded {
        return None;
    }
    Some(MatchResult {
        days_remaining: program.deadline.days_remaining(reference_date),
        is_rolling: program.deadline.is_rolling(),
        program: program.clone(),
    })
}
