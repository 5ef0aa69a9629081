use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::entity::recipe;
use crate::domain::ingredient::dto::IngredientSummary;
use crate::domain::ingredient::entity::ingredient;

/// 레시피 생성 요청 DTO
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    #[schema(example = "Tortilla de patatas")]
    pub name: Option<String>,
    #[schema(example = "Tortilla tradicional con cebolla")]
    pub description: Option<String>,
}

/// 레시피 수정 요청 DTO
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// 레시피 목록 필터 (이름 AND 설명, 부분 문자열)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RecipeFilter {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Tortilla de patatas")]
    pub name: String,
    pub description: String,
}

impl From<recipe::Model> for RecipeSummary {
    fn from(model: recipe::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// 재료 목록을 포함한 레시피 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<IngredientSummary>,
}

impl RecipeResponse {
    pub fn from_parts(recipe: recipe::Model, mut ingredients: Vec<ingredient::Model>) -> Self {
        ingredients.sort_by_key(|i| i.id);
        Self {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            ingredients: ingredients.into_iter().map(IngredientSummary::from).collect(),
        }
    }
}

// --- Swagger용 래핑 DTO ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRecipeResponse {
    pub status_code: u16,
    pub data: RecipeResponse,
    pub updated_by: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRecipeListResponse {
    pub status_code: u16,
    pub data: Vec<RecipeResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRecipeCreatedResponse {
    #[schema(example = 201)]
    pub status_code: u16,
    pub data: RecipeSummary,
    #[schema(example = "admin")]
    pub created_by: String,
}
