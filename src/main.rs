//! 상품 카탈로그 서비스 진입점
//!
//! 환경 설정을 읽고, 저장소/캐시/서비스를 한 번 생성해 `web::Data`로 공유한 뒤
//! HTTP 서버를 실행합니다.

use std::io;
use std::sync::Arc;
use actix_web::{web, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use product_service_backend::caching::redis::RedisClient;
use product_service_backend::caching::RedisProductCache;
use product_service_backend::config::{CacheConfig, JwtConfig, RateLimitConfig, ServerConfig};
use product_service_backend::db::Database;
use product_service_backend::repositories::{MongoCategoryRepository, MongoProductRepository};
use product_service_backend::routes::{build_app, AppState};
use product_service_backend::services::{CategoryService, ProductService, TokenService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 상품 카탈로그 서비스 시작중...");

    let services = initialize_services().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// 저장소, 캐시, 서비스를 생성하고 연결합니다
///
/// # Errors
///
/// * MongoDB 또는 Redis 연결 실패
/// * 인덱스 생성 실패
/// * 운영 환경에서 `JWT_SECRET` 누락
async fn initialize_services() -> io::Result<AppState> {
    let (database, redis_client) = initialize_data_stores().await?;

    let product_repo = Arc::new(MongoProductRepository::new(database.clone()));
    let category_repo = Arc::new(MongoCategoryRepository::new(database));

    product_repo.create_indexes().await.map_err(io::Error::other)?;
    category_repo.create_indexes().await.map_err(io::Error::other)?;
    info!("✅ 인덱스 생성 완료");

    let cache = Arc::new(RedisProductCache::new(redis_client, CacheConfig::product_namespace()));

    let products = web::Data::new(ProductService::new(
        product_repo,
        category_repo.clone(),
        cache,
    ));
    let categories = web::Data::new(CategoryService::new(category_repo));

    let secret = JwtConfig::secret().map_err(io::Error::other)?;
    let tokens = Arc::new(TokenService::new(&secret));

    Ok(AppState { products, categories, tokens })
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 워커마다 [`build_app`]으로 같은 미들웨어 스택을 조립합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = rate_limit_config
        .governor()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || build_app(state.clone(), governor_conf.clone()))
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=product_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ MongoDB 연결 성공");

    let redis_client = RedisClient::new(&CacheConfig::redis_url()).await.map_err(|e| {
        error!("Redis 연결 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ Redis 연결 성공");

    Ok((Arc::new(database), Arc::new(redis_client)))
}
