use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    CreateRecipeRequest, RecipeFilter, RecipeResponse, RecipeSummary,
    SuccessRecipeCreatedResponse, SuccessRecipeListResponse, SuccessRecipeResponse,
    UpdateRecipeRequest,
};
use super::service::RecipeService;
use crate::domain::ingredient::dto::{IngredientSummary, SuccessIngredientSummaryListResponse};
use crate::state::AppState;
use crate::utils::auth::AdminUser;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiJson, ApiPath, ApiQuery};
use crate::utils::response::DeletedResponse;
use crate::utils::{BaseResponse, ErrorResponse};

/// 레시피 목록 조회 API
#[utoipa::path(
    get,
    path = "/recetas",
    params(RecipeFilter),
    responses(
        (status = 200, description = "레시피 목록", body = SuccessRecipeListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Recetas"
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<RecipeFilter>,
) -> Result<Json<BaseResponse<Vec<RecipeResponse>>>, AppError> {
    let recipes = RecipeService::find_all(&state.db, filter).await?;

    Ok(Json(BaseResponse::success(recipes)))
}

#[utoipa::path(
    get,
    path = "/recetas/{id}",
    params(("id" = i32, Path, description = "레시피 ID")),
    responses(
        (status = 200, description = "레시피 조회 성공", body = SuccessRecipeResponse),
        (status = 404, description = "존재하지 않는 레시피", body = ErrorResponse)
    ),
    tag = "Recetas"
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<RecipeResponse>>, AppError> {
    let recipe = RecipeService::find_one(&state.db, recipe_id).await?;

    Ok(Json(BaseResponse::success(recipe)))
}

#[utoipa::path(
    post,
    path = "/recetas",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "레시피 생성 성공", body = SuccessRecipeCreatedResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Recetas"
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiJson(req): ApiJson<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<BaseResponse<RecipeSummary>>), AppError> {
    let recipe = RecipeService::create(&state.db, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::created(recipe, admin.username)),
    ))
}

#[utoipa::path(
    put,
    path = "/recetas/{id}",
    params(("id" = i32, Path, description = "레시피 ID")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "레시피 수정 성공", body = SuccessRecipeResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 레시피", body = ErrorResponse)
    ),
    tag = "Recetas"
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(recipe_id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateRecipeRequest>,
) -> Result<Json<BaseResponse<RecipeResponse>>, AppError> {
    let recipe = RecipeService::update(&state.db, recipe_id, req).await?;

    Ok(Json(BaseResponse::updated(recipe, admin.username)))
}

#[utoipa::path(
    delete,
    path = "/recetas/{id}",
    params(("id" = i32, Path, description = "레시피 ID")),
    responses(
        (status = 200, description = "레시피 삭제 성공", body = DeletedResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Recetas"
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    RecipeService::delete(&state.db, recipe_id).await?;

    Ok(Json(BaseResponse::deleted(
        "recipe deleted successfully",
        admin.username,
    )))
}

/// 레시피 재료 목록 API
#[utoipa::path(
    get,
    path = "/recetas/{id}/ingredientes",
    params(("id" = i32, Path, description = "레시피 ID")),
    responses(
        (status = 200, description = "재료 목록", body = SuccessIngredientSummaryListResponse),
        (status = 400, description = "잘못된 ID", body = ErrorResponse)
    ),
    tag = "Recetas"
)]
pub async fn list_recipe_ingredients(
    State(state): State<AppState>,
    ApiPath(recipe_id): ApiPath<i32>,
) -> Result<Json<BaseResponse<Vec<IngredientSummary>>>, AppError> {
    let ingredients = RecipeService::find_ingredients(&state.db, recipe_id).await?;

    Ok(Json(BaseResponse::success(ingredients)))
}
