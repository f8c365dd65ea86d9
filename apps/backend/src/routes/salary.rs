use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::dates::format_adjustment_date;
use crate::error::AppError;
use crate::extractors::AuthToken;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResponse {
    pub compensation: f64,
    pub adjustment_date: String,
    /// Token to present next time; replaced when the presented one had expired
    pub token: String,
    pub rotated: bool,
}

async fn salary(
    auth: AuthToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let resolution = app_state
        .tokens()?
        .resolve(&auth.token, OffsetDateTime::now_utc())
        .await?;

    Ok(HttpResponse::Ok().json(SalaryResponse {
        compensation: resolution.compensation,
        adjustment_date: format_adjustment_date(resolution.adjustment_date),
        token: resolution.token,
        rotated: resolution.rotated,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/salary").route(web::get().to(salary)));
}
