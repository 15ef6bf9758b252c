use std::collections::HashSet;
use std::time::Duration;

use bf_core::RawRecord;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::parse::parse_body;

const DEFAULT_BASE_URL: &str = "https://www.bizinfo.go.kr/uss/rss/bizinfoApi.do";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// 키워드 반복 조회 사이 간격(레지스트리 부하 방지)
const FETCH_PACING: Duration = Duration::from_millis(500);

/// 조회 파라미터. 레지스트리 쪽 필터는 신뢰하지 않으므로
/// (정밀 필터는 엔진이 다시 적용) 키워드/분야/페이지 수준만 노출한다.
#[derive(Debug, Clone)]
pub struct FetchParams {
    pub keyword: Option<String>,
    /// 분야 코드 (bizPbancCtgy)
    pub category: Option<String>,
    pub page: u32,
    pub rows: u32,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            keyword: None,
            category: None,
            page: 1,
            rows: 20,
        }
    }
}

impl FetchParams {
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }
}

/// 기업마당 오픈 API 클라이언트
pub struct BizinfoClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl BizinfoClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, RegistryError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(RegistryError::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// 테스트/프록시용 base URL 교체
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 지원사업 목록 1페이지 조회
    pub async fn fetch(&self, params: &FetchParams) -> Result<Vec<RawRecord>, RegistryError> {
        let mut query: Vec<(&str, String)> = vec![
            ("crtfcKey", self.api_key.clone()),
            ("dataType", "json".into()),
            ("pageNo", params.page.to_string()),
            ("numOfRows", params.rows.to_string()),
        ];
        if let Some(keyword) = &params.keyword {
            query.push(("keyword", keyword.clone()));
        }
        if let Some(category) = &params.category {
            query.push(("bizPbancCtgy", category.clone()));
        }

        let response = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let records = parse_body(&body)?;

        debug!(
            count = records.len(),
            keyword = params.keyword.as_deref().unwrap_or(""),
            "registry_fetch"
        );
        Ok(records)
    }

    /// 키워드별로 반복 조회해 제목 기준으로 중복을 걸러 합친다.
    /// 개별 키워드 실패는 경고만 남기고 계속한다(부분 결과가 무결과보다 낫다).
    pub async fn fetch_all(
        &self,
        keywords: &[String],
        category: Option<&str>,
        rows: u32,
    ) -> Vec<RawRecord> {
        let mut batches = Vec::new();

        for (i, keyword) in keywords.iter().enumerate() {
            if i > 0 {
                sleep(FETCH_PACING).await;
            }
            let params = FetchParams {
                keyword: Some(keyword.clone()),
                category: category.map(str::to_string),
                rows,
                ..FetchParams::default()
            };
            match self.fetch(&params).await {
                Ok(records) => batches.push(records),
                Err(err) => warn!(%keyword, error = %err, "registry_fetch_failed"),
            }
        }
        merge_by_title(batches)
    }
}

/// 키워드별 일괄들을 제목 기준으로 합친다. 같은 제목은 처음 것만 남기고,
/// 제목 없는 레코드는 판단 근거가 없으므로 거르지 않고 통과시킨다.
fn merge_by_title(batches: Vec<Vec<RawRecord>>) -> Vec<RawRecord> {
    let mut merged = Vec::new();
    let mut seen_titles = HashSet::new();

    for batch in batches {
        for record in batch {
            let title = record.text(&["pblancNm", "title"]).unwrap_or_default();
            if title.is_empty() || seen_titles.insert(title) {
                merged.push(record);
            }
        }
    }
    merged
}
