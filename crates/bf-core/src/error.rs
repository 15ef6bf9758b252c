use thiserror::Error;

/// 검색 조건 검증 오류. 표시 계층이 재입력을 유도할 수 있도록
/// 항목별로 구분해서 돌려준다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("applicant_age가 유효 범위(1~120)를 벗어남: {0}")]
    InvalidAge(u32),
    #[error("region은 비어 있을 수 없음")]
    MissingRegion,
    #[error("industry는 비어 있을 수 없음")]
    MissingIndustry,
}
