use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("API 키가 설정되지 않음 (BIZINFO_API_KEY)")]
    MissingApiKey,
    #[error("HTTP 요청 실패: {0}")]
    Http(#[from] reqwest::Error),
    #[error("응답 본문 해석 실패: {0}")]
    Payload(String),
}
