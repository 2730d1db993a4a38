use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::database::ActivityStore;
use crate::error::AppError;
use crate::models::Activity;
use crate::services::activities_service;

#[derive(Debug, Deserialize, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageBody>, AppError> {
    let email = email_param(query);
    let activity_name = activity_param(path, email.as_deref())?;
    let message = activities_service::signup(&store, &activity_name, email.as_deref())?;
    Ok(Json(MessageBody { message }))
}

pub async fn unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageBody>, AppError> {
    let email = email_param(query);
    let activity_name = activity_param(path, email.as_deref())?;
    let message = activities_service::unregister(&store, &activity_name, email.as_deref())?;
    Ok(Json(MessageBody { message }))
}

// An unparsable query (duplicate or undecodable `email`) counts as a missing email.
fn email_param(query: Result<Query<EmailQuery>, QueryRejection>) -> Option<String> {
    match query {
        Ok(Query(q)) => q.email,
        Err(e) => {
            warn!("Unparsable query string: {}", e);
            None
        }
    }
}

// The email is still checked first so rejections keep the same order as for
// well-formed paths.
fn activity_param(
    path: Result<Path<String>, PathRejection>,
    email: Option<&str>,
) -> Result<String, AppError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(e) => {
            warn!("Unparsable activity path: {}", e);
            activities_service::require_email(email)?;
            Err(e.into())
        }
    }
}
