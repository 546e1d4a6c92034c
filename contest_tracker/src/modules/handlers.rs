use crate::modules::models::response::{ContestResponse, ErrorResponse, SyncResultResponse};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use contest_tracker_libs::{
    query::{QueryError, QueryService},
    store::ContestStore,
    sync::{ContestSyncer, SyncError},
    types::Platform,
};
use std::{str::FromStr, sync::Arc};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

pub async fn list_contests(
    Extension(queries): Extension<Arc<QueryService>>,
) -> ApiResult<Vec<ContestResponse>> {
    list(queries, false).await
}

pub async fn list_bookmarked_contests(
    Extension(queries): Extension<Arc<QueryService>>,
) -> ApiResult<Vec<ContestResponse>> {
    list(queries, true).await
}

async fn list(queries: Arc<QueryService>, bookmarked_only: bool) -> ApiResult<Vec<ContestResponse>> {
    match queries.list_contests(bookmarked_only).await {
        Ok(contests) => {
            let now = Utc::now();
            Ok(Json(
                contests
                    .into_iter()
                    .map(|contest| ContestResponse::from_record(contest, now))
                    .collect(),
            ))
        }
        Err(e) => {
            tracing::error!("failed to list contests: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e)),
            ))
        }
    }
}

pub async fn toggle_bookmark(
    Path(id): Path<i64>,
    Extension(queries): Extension<Arc<QueryService>>,
) -> ApiResult<ContestResponse> {
    match queries.toggle_bookmark(id).await {
        Ok(contest) => Ok(Json(ContestResponse::from_record(contest, Utc::now()))),
        Err(e @ QueryError::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new(e))))
        }
        Err(e) => {
            tracing::error!("failed to toggle bookmark on contest {}: {:?}", id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e)),
            ))
        }
    }
}

pub async fn sync_platform(
    Path(platform): Path<String>,
    Extension(syncer): Extension<Arc<ContestSyncer>>,
) -> ApiResult<SyncResultResponse> {
    let platform = match Platform::from_str(&platform) {
        Ok(platform) => platform,
        Err(e) => return Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new(e)))),
    };

    match syncer.sync_platform(platform).await {
        Ok(count) => Ok(Json(SyncResultResponse { count })),
        Err(e) => {
            tracing::error!("failed to sync {}: {:?}", platform, e);
            let status = match e {
                SyncError::Fetch(_) => StatusCode::BAD_GATEWAY,
                SyncError::UnknownPlatform(_) => StatusCode::NOT_FOUND,
                SyncError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((status, Json(ErrorResponse::new(e))))
        }
    }
}

pub async fn liveness(Extension(store): Extension<Arc<dyn ContestStore>>) -> StatusCode {
    match store.ping().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn readiness(Extension(store): Extension<Arc<dyn ContestStore>>) -> StatusCode {
    // An empty contest table is a valid state, so readiness only requires a
    // reachable store.
    match store.ping().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
