use bf_core::{logging, CriteriaError, Deadline, MatchResult, MatchingEngine, SearchCriteria};
use bf_registry::{build_search_keywords, BizinfoClient, RegistryError};
use chrono::NaiveDate;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "bizfinder",
    about = "내 조건에 맞는 소상공인 지원사업을 찾아 D-day와 함께 보여준다"
)]
struct Cli {
    /// 신청자 나이(만)
    #[arg(long)]
    age: u32,

    /// 지역(시/도, 예: 서울, 전북특별자치도)
    #[arg(long)]
    region: String,

    /// 업종(예: 제조업, 음식점업)
    #[arg(long)]
    industry: String,

    /// 마감 판정 기준일(YYYY-MM-DD, 생략 시 오늘)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// 검색 키워드 직접 지정(생략 시 조건에서 자동 생성)
    #[arg(long)]
    keyword: Option<String>,

    /// 분야 필터(bizPbancCtgy, 예: 금융, 창업)
    #[arg(long)]
    category: Option<String>,

    /// 키워드당 조회 건수
    #[arg(long, default_value_t = 50)]
    rows: u32,

    /// 기업마당 API 인증키
    #[arg(long, env = "BIZINFO_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("레지스트리 클라이언트 오류: {0}")]
    Registry(#[from] RegistryError),
    #[error("검색 조건 오류: {0}")]
    Criteria(#[from] CriteriaError),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenv().ok();
    logging::init_tracing_subscriber("bizfinder");
    logging::install_tracing_panic_hook("bizfinder");

    let cli = Cli::parse();

    let criteria = SearchCriteria {
        applicant_age: cli.age,
        region: cli.region.clone(),
        industry: cli.industry.clone(),
        reference_date: cli.reference_date,
    };
    // 키워드 조회 전에 조건부터 검증(깨진 조건으로 호출 낭비 방지)
    criteria.validate()?;

    let client = BizinfoClient::new(cli.api_key)?;
    let keywords = match &cli.keyword {
        Some(keyword) => vec![keyword.clone()],
        None => build_search_keywords(&criteria),
    };
    info!(?keywords, "registry fetch start");

    let records = client
        .fetch_all(&keywords, cli.category.as_deref(), cli.rows)
        .await;
    if records.is_empty() {
        // 조회 실패는 엔진 입장에서 빈 일괄과 같다
        warn!("레지스트리 응답이 비어 있음 (API 키/네트워크 확인)");
    }

    let results = MatchingEngine::new().run(&records, &criteria)?;

    if results.is_empty() {
        println!("조건에 맞는 지원사업이 없습니다.");
        return Ok(());
    }

    println!("총 {}건", results.len());
    for result in &results {
        println!("{}", render_line(result));
    }
    Ok(())
}

/// "D-7 | 2025-06-01 | 제목" 형태 한 줄
fn render_line(result: &MatchResult) -> String {
    let deadline = match result.program.deadline {
        Deadline::Fixed(date) => date.format("%Y-%m-%d").to_string(),
        Deadline::Rolling => "상시".to_string(),
    };
    format!(
        "{:>6} | {:<10} | {}",
        dday_label(result.days_remaining),
        deadline,
        result.program.title
    )
}

/// D-day 라벨. 당일 마감은 D-Day, 상시는 "상시".
fn dday_label(days_remaining: Option<i64>) -> String {
    match days_remaining {
        None => "상시".to_string(),
        Some(0) => "D-Day".to_string(),
        Some(days) => format!("D-{days}"),
    }
}
