use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreatePlayerRequest, PlayerFilter, PlayerResponse, PlayerSummary,
    SuccessPlayerCreatedResponse, SuccessPlayerListResponse, SuccessPlayerResponse,
    UpdatePlayerRequest,
};
use super::service::PlayerService;
use crate::state::AppState;
use crate::utils::auth::AdminUser;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};
use crate::utils::response::DeletedResponse;
use crate::utils::{BaseResponse, ErrorResponse};

/// 선수 목록 조회 API
#[utoipa::path(
    get,
    path = "/players",
    params(PlayerFilter),
    responses(
        (status = 200, description = "선수 목록", body = SuccessPlayerListResponse),
        (status = 400, description = "잘못된 필터 값", body = ErrorResponse)
    ),
    tag = "Players"
)]
pub async fn list_players(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<PlayerFilter>,
) -> Result<Json<BaseResponse<Vec<PlayerResponse>>>, AppError> {
    let players = PlayerService::find_all(&state.db, filter).await?;

    Ok(Json(BaseResponse::success(players)))
}

#[utoipa::path(
    get,
    path = "/players/{id}",
    params(("id" = i32, Path, description = "선수 ID")),
    responses(
        (status = 200, description = "선수 조회 성공", body = SuccessPlayerResponse),
        (status = 404, description = "존재하지 않는 선수", body = ErrorResponse)
    ),
    tag = "Players"
)]
pub async fn get_player(
    State(state): State<AppState>,
    ApiPath(player_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<PlayerResponse>>, AppError> {
    let player = PlayerService::find_one(&state.db, player_id).await?;

    Ok(Json(BaseResponse::success(player)))
}

/// 선수 생성 API (관리자 전용)
///
/// 존재하지 않는 팀 ID는 외래 키 제약 조건에 의해 400으로 거부됩니다.
#[utoipa::path(
    post,
    path = "/players",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "선수 생성 성공", body = SuccessPlayerCreatedResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Players"
)]
pub async fn create_player(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiJson(req): ApiJson<CreatePlayerRequest>,
) -> Result<(StatusCode, Json<BaseResponse<PlayerSummary>>), AppError> {
    let player = PlayerService::create(&state.db, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::created(player, admin.username)),
    ))
}

#[utoipa::path(
    put,
    path = "/players/{id}",
    params(("id" = i32, Path, description = "선수 ID")),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "선수 수정 성공", body = SuccessPlayerResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 선수", body = ErrorResponse)
    ),
    tag = "Players"
)]
pub async fn update_player(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(player_id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdatePlayerRequest>,
) -> Result<Json<BaseResponse<PlayerResponse>>, AppError> {
    let player = PlayerService::update(&state.db, player_id, req).await?;

    Ok(Json(BaseResponse::updated(player, admin.username)))
}

#[utoipa::path(
    delete,
    path = "/players/{id}",
    params(("id" = i32, Path, description = "선수 ID")),
    responses(
        (status = 200, description = "선수 삭제 성공", body = DeletedResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Players"
)]
pub async fn delete_player(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(player_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    PlayerService::delete(&state.db, player_id).await?;

    Ok(Json(BaseResponse::deleted(
        "player deleted successfully",
        admin.username,
    )))
}
