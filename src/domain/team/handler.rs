use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreateTeamRequest, SuccessTeamCreatedResponse, SuccessTeamListResponse, SuccessTeamResponse,
    TeamFilter, TeamResponse, TeamSummary, UpdateTeamRequest,
};
use super::service::TeamService;
use crate::domain::player::dto::{PlayerSummary, SuccessPlayerSummaryListResponse};
use crate::state::AppState;
use crate::utils::auth::AdminUser;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};
use crate::utils::response::DeletedResponse;
use crate::utils::{BaseResponse, ErrorResponse};

/// 팀 목록 조회 API
///
/// 이름/국가 부분 문자열로 필터링할 수 있으며 각 팀의 선수 목록을 포함합니다.
#[utoipa::path(
    get,
    path = "/teams",
    params(TeamFilter),
    responses(
        (status = 200, description = "팀 목록", body = SuccessTeamListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn list_teams(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<TeamFilter>,
) -> Result<Json<BaseResponse<Vec<TeamResponse>>>, AppError> {
    let teams = TeamService::find_all(&state.db, filter).await?;

    Ok(Json(BaseResponse::success(teams)))
}

/// 팀 단건 조회 API
#[utoipa::path(
    get,
    path = "/teams/{id}",
    params(("id" = i32, Path, description = "팀 ID")),
    responses(
        (status = 200, description = "팀 조회 성공", body = SuccessTeamResponse),
        (status = 400, description = "잘못된 ID", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn get_team(
    State(state): State<AppState>,
    ApiPath(team_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    let team = TeamService::find_one(&state.db, team_id).await?;

    Ok(Json(BaseResponse::success(team)))
}

/// 팀 생성 API (관리자 전용)
#[utoipa::path(
    post,
    path = "/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "팀 생성 성공", body = SuccessTeamCreatedResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn create_team(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiJson(req): ApiJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<BaseResponse<TeamSummary>>), AppError> {
    let team = TeamService::create(&state.db, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::created(team, admin.username)),
    ))
}

/// 팀 수정 API (관리자 전용, PUT/PATCH 동일)
#[utoipa::path(
    put,
    path = "/teams/{id}",
    params(("id" = i32, Path, description = "팀 ID")),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "팀 수정 성공", body = SuccessTeamResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn update_team(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(team_id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateTeamRequest>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    let team = TeamService::update(&state.db, team_id, req).await?;

    Ok(Json(BaseResponse::updated(team, admin.username)))
}

/// 팀 삭제 API (관리자 전용)
///
/// 일치하는 팀이 없어도 200을 반환합니다.
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    params(("id" = i32, Path, description = "팀 ID")),
    responses(
        (status = 200, description = "팀 삭제 성공", body = DeletedResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(team_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    TeamService::delete(&state.db, team_id).await?;

    Ok(Json(BaseResponse::deleted(
        "team deleted successfully",
        admin.username,
    )))
}

/// 팀 소속 선수 목록 API
///
/// 선수가 없는 팀과 존재하지 않는 팀 모두 빈 목록을 반환합니다.
#[utoipa::path(
    get,
    path = "/teams/{id}/players",
    params(("id" = i32, Path, description = "팀 ID")),
    responses(
        (status = 200, description = "선수 목록", body = SuccessPlayerSummaryListResponse),
        (status = 400, description = "잘못된 ID", body = ErrorResponse)
    ),
    tag = "Teams"
)]
pub async fn list_team_players(
    State(state): State<AppState>,
    ApiPath(team_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<Vec<PlayerSummary>>>, AppError> {
    let players = TeamService::find_players(&state.db, team_id).await?;

    Ok(Json(BaseResponse::success(players)))
}
