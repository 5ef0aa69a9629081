use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::entity::ingredient;
use crate::domain::recipe::dto::RecipeSummary;
use crate::domain::recipe::entity::recipe;
use crate::utils::parent::deserialize_parent_id;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientRequest {
    #[schema(example = "Patata")]
    pub name: Option<String>,
    /// 자유 형식 수량
    #[schema(example = "500 g")]
    pub quantity: Option<String>,
    /// `receta: { "id": 1 }` 형태도 허용
    #[serde(default, alias = "receta", deserialize_with = "deserialize_parent_id")]
    #[schema(example = 1)]
    pub recipe_id: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
    pub quantity: Option<String>,
    #[serde(default, alias = "receta", deserialize_with = "deserialize_parent_id")]
    pub recipe_id: Option<i32>,
}

/// 재료 목록 필터 (이름 부분 문자열 AND 레시피 ID 일치)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct IngredientFilter {
    pub name: Option<String>,
    pub recipe_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSummary {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = "Patata")]
    pub name: String,
    #[schema(example = "500 g")]
    pub quantity: String,
    pub recipe_id: Option<i32>,
}

impl From<ingredient::Model> for IngredientSummary {
    fn from(model: ingredient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            recipe_id: model.recipe_id,
        }
    }
}

/// 소속 레시피를 포함한 재료 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientResponse {
    pub id: i32,
    pub name: String,
    pub quantity: String,
    pub recipe_id: Option<i32>,
    pub recipe: Option<RecipeSummary>,
}

impl IngredientResponse {
    pub fn from_parts(ingredient: ingredient::Model, recipe: Option<recipe::Model>) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
            quantity: ingredient.quantity,
            recipe_id: ingredient.recipe_id,
            recipe: recipe.map(RecipeSummary::from),
        }
    }
}

// --- Swagger용 래핑 DTO ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessIngredientResponse {
    pub status_code: u16,
    pub data: IngredientResponse,
    pub updated_by: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessIngredientListResponse {
    pub status_code: u16,
    pub data: Vec<IngredientResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessIngredientSummaryListResponse {
    pub status_code: u16,
    pub data: Vec<IngredientSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessIngredientCreatedResponse {
    #[schema(example = 201)]
    pub status_code: u16,
    pub data: IngredientSummary,
    #[schema(example = "admin")]
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredient_response_should_embed_parent_recipe() {
        let ingredient = ingredient::Model {
            id: 2,
            name: "Huevo".into(),
            quantity: "6".into(),
            recipe_id: Some(1),
        };
        let recipe = recipe::Model {
            id: 1,
            name: "Tortilla de patatas".into(),
            description: "Clásica".into(),
        };

        let json =
            serde_json::to_value(IngredientResponse::from_parts(ingredient, Some(recipe))).unwrap();

        assert_eq!(json["recipe"]["name"], "Tortilla de patatas");
        assert_eq!(json["recipeId"], 1);
    }
}
