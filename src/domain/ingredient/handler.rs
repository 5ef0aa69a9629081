use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreateIngredientRequest, IngredientFilter, IngredientResponse, IngredientSummary,
    SuccessIngredientCreatedResponse, SuccessIngredientListResponse, SuccessIngredientResponse,
    UpdateIngredientRequest,
};
use super::service::IngredientService;
use crate::state::AppState;
use crate::utils::auth::AdminUser;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};
use crate::utils::response::DeletedResponse;
use crate::utils::{BaseResponse, ErrorResponse};

/// 재료 목록 조회 API
#[utoipa::path(
    get,
    path = "/ingredientes",
    params(IngredientFilter),
    responses(
        (status = 200, description = "재료 목록", body = SuccessIngredientListResponse),
        (status = 400, description = "잘못된 필터 값", body = ErrorResponse)
    ),
    tag = "Ingredientes"
)]
pub async fn list_ingredients(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<IngredientFilter>,
) -> Result<Json<BaseResponse<Vec<IngredientResponse>>>, AppError> {
    let ingredients = IngredientService::find_all(&state.db, filter).await?;

    Ok(Json(BaseResponse::success(ingredients)))
}

#[utoipa::path(
    get,
    path = "/ingredientes/{id}",
    params(("id" = i32, Path, description = "재료 ID")),
    responses(
        (status = 200, description = "재료 조회 성공", body = SuccessIngredientResponse),
        (status = 404, description = "존재하지 않는 재료", body = ErrorResponse)
    ),
    tag = "Ingredientes"
)]
pub async fn get_ingredient(
    State(state): State<AppState>,
    ApiPath(ingredient_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<IngredientResponse>>, AppError> {
    let ingredient = IngredientService::find_one(&state.db, ingredient_id).await?;

    Ok(Json(BaseResponse::success(ingredient)))
}

#[utoipa::path(
    post,
    path = "/ingredientes",
    request_body = CreateIngredientRequest,
    responses(
        (status = 201, description = "재료 생성 성공", body = SuccessIngredientCreatedResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Ingredientes"
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiJson(req): ApiJson<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<BaseResponse<IngredientSummary>>), AppError> {
    let ingredient = IngredientService::create(&state.db, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::created(ingredient, admin.username)),
    ))
}

#[utoipa::path(
    put,
    path = "/ingredientes/{id}",
    params(("id" = i32, Path, description = "재료 ID")),
    request_body = UpdateIngredientRequest,
    responses(
        (status = 200, description = "재료 수정 성공", body = SuccessIngredientResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 재료", body = ErrorResponse)
    ),
    tag = "Ingredientes"
)]
pub async fn update_ingredient(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(ingredient_id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateIngredientRequest>,
) -> Result<Json<BaseResponse<IngredientResponse>>, AppError> {
    let ingredient = IngredientService::update(&state.db, ingredient_id, req).await?;

    Ok(Json(BaseResponse::updated(ingredient, admin.username)))
}

#[utoipa::path(
    delete,
    path = "/ingredientes/{id}",
    params(("id" = i32, Path, description = "재료 ID")),
    responses(
        (status = 200, description = "재료 삭제 성공", body = DeletedResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Ingredientes"
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(ingredient_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    IngredientService::delete(&state.db, ingredient_id).await?;

    Ok(Json(BaseResponse::deleted(
        "ingredient deleted successfully",
        admin.username,
    )))
}
