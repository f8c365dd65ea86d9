use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::registration::Registration;
use crate::error::AppError;
use crate::extractors::{BasicCredentials, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(alias = "username")]
    pub identity: String,
    #[serde(alias = "password")]
    pub secret: String,
    #[serde(alias = "salary")]
    pub compensation: f64,
    #[serde(alias = "raising", alias = "adjustment_date")]
    pub adjustment_date: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Exchange Basic credentials for a bearer token.
async fn issue_token(
    credentials: BasicCredentials,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let issued = app_state
        .tokens()?
        .login(
            &credentials.identity,
            &credentials.secret,
            OffsetDateTime::now_utc(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(issued))
}

async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let registration = Registration::parse(
        req.identity,
        req.secret,
        req.compensation,
        &req.adjustment_date,
    )?;

    app_state.tokens()?.register(registration).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Employee registered successfully".to_string(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/token").route(web::post().to(issue_token)))
        .service(web::resource("/register").route(web::post().to(register)));
}
