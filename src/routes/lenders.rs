use actix_web::{web, HttpResponse, Responder};

use crate::core::Matcher;
use crate::error::ApiError;
use crate::models::{ApplicantProfile, HealthResponse, MatchLendersRequest, MatchLendersResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure all lender routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match-lenders", web::post().to(match_lenders));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let lenders = state.matcher.catalog().len();
    let status = if lenders > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        lenders,
    })
}

/// Match lenders endpoint
///
/// POST /match-lenders
///
/// Request body (numbers may also be sent as strings):
/// ```json
/// {
///   "netAssets": 300000,
///   "prevNetAssets": 200000,
///   "tradingTime": 24,
///   "loanAmount": 100000,
///   "companyName": "Acme Ltd",
///   "companyAge": 4
/// }
/// ```
async fn match_lenders(
    state: web::Data<AppState>,
    req: web::Json<MatchLendersRequest>,
) -> Result<HttpResponse, ApiError> {
    let profile = ApplicantProfile::try_from(req.into_inner()).map_err(|e| {
        tracing::info!("Rejected match request: {}", e);
        ApiError::from(e)
    })?;

    let outcome = state.matcher.match_lenders(&profile);

    tracing::info!(
        "Returning {} lenders for {} (score {}, {})",
        outcome.lenders.len(),
        profile.company_name,
        outcome.score,
        outcome.tier
    );

    Ok(HttpResponse::Ok().json(MatchLendersResponse {
        eligible_lenders: outcome.lenders,
    }))
}
