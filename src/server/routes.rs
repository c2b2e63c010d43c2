//! Route handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::server::error::{ApiError, ApiResult};
use crate::server::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyResponse {
    pub result: u8,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub version: String,
}

/// `name` and `yob` as they arrived. The first occurrence of a repeated key wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VerifyParams {
    pub name: Option<String>,
    pub yob: Option<String>,
}

impl VerifyParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" if params.name.is_none() => params.name = Some(value),
                "yob" if params.yob.is_none() => params.yob = Some(value),
                _ => {}
            }
        }
        params
    }

    /// Both values, or `None` when either is absent or empty.
    pub fn required(&self) -> Option<(&str, &str)> {
        match (self.name.as_deref(), self.yob.as_deref()) {
            (Some(name), Some(yob)) if !name.is_empty() && !yob.is_empty() => Some((name, yob)),
            _ => None,
        }
    }
}

/// GET /verify?name=..&yob=..
pub async fn verify(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<VerifyResponse>> {
    let params = match query {
        Ok(Query(pairs)) => VerifyParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("Undecodable query string: {}", rejection);
            VerifyParams::default()
        }
    };

    let Some((name, yob)) = params.required() else {
        return Err(ApiError::missing_parameters());
    };

    let found = state.lookup.find(name, yob)?;
    tracing::debug!(found, "Verification lookup finished");

    Ok(Json(VerifyResponse {
        result: u8::from(found),
    }))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        records: state.lookup.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
