use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use tracing::{debug, info};

use super::dto::{
    CreateRecipeRequest, RecipeFilter, RecipeResponse, RecipeSummary, UpdateRecipeRequest,
};
use super::entity::recipe;
use crate::domain::ingredient::dto::IngredientSummary;
use crate::domain::ingredient::entity::ingredient;
use crate::utils::db::{non_empty, set_if_present};
use crate::utils::error::AppError;

pub struct RecipeService;

impl RecipeService {
    /// 레시피 목록 조회 (재료 포함)
    pub async fn find_all(
        db: &DatabaseConnection,
        filter: RecipeFilter,
    ) -> Result<Vec<RecipeResponse>, AppError> {
        let mut query = recipe::Entity::find();

        if let Some(name) = non_empty(filter.name) {
            query = query.filter(recipe::Column::Name.contains(name));
        }
        if let Some(description) = non_empty(filter.description) {
            query = query.filter(recipe::Column::Description.contains(description));
        }

        let rows = query
            .order_by_asc(recipe::Column::Id)
            .find_with_related(ingredient::Entity)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(rows
            .into_iter()
            .map(|(recipe, ingredients)| RecipeResponse::from_parts(recipe, ingredients))
            .collect())
    }

    /// 레시피 단건 조회 (재료 포함)
    pub async fn find_one(
        db: &DatabaseConnection,
        recipe_id: i32,
    ) -> Result<RecipeResponse, AppError> {
        let recipe = recipe::Entity::find_by_id(recipe_id)
            .one(db)
            .await
            .map_err(AppError::store_read)?
            .ok_or_else(|| AppError::not_found(format!("recipe {} not found", recipe_id)))?;

        let ingredients = recipe
            .find_related(ingredient::Entity)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(RecipeResponse::from_parts(recipe, ingredients))
    }

    pub async fn create(
        db: &DatabaseConnection,
        req: CreateRecipeRequest,
    ) -> Result<RecipeSummary, AppError> {
        let model = recipe::ActiveModel {
            name: set_if_present(req.name),
            description: set_if_present(req.description),
            ..Default::default()
        };

        let created = model.insert(db).await.map_err(AppError::store_write)?;
        info!(recipe_id = created.id, "Recipe created");

        Ok(created.into())
    }

    pub async fn update(
        db: &DatabaseConnection,
        recipe_id: i32,
        req: UpdateRecipeRequest,
    ) -> Result<RecipeResponse, AppError> {
        let changes = recipe::ActiveModel {
            name: set_if_present(req.name),
            description: set_if_present(req.description),
            ..Default::default()
        };

        if changes.is_changed() {
            let result = recipe::Entity::update_many()
                .set(changes)
                .filter(recipe::Column::Id.eq(recipe_id))
                .exec(db)
                .await
                .map_err(AppError::store_write)?;
            debug!(recipe_id, rows_affected = result.rows_affected, "Recipe update executed");
        }

        Self::find_one(db, recipe_id).await
    }

    /// 레시피 삭제. 재료는 남고 recipe_id만 NULL이 됩니다.
    pub async fn delete(db: &DatabaseConnection, recipe_id: i32) -> Result<(), AppError> {
        let result = recipe::Entity::delete_by_id(recipe_id)
            .exec(db)
            .await
            .map_err(AppError::store_write)?;

        debug!(recipe_id, rows_affected = result.rows_affected, "Recipe delete executed");
        Ok(())
    }

    /// 레시피의 재료 목록 (레시피가 없어도 빈 목록)
    pub async fn find_ingredients(
        db: &DatabaseConnection,
        recipe_id: i32,
    ) -> Result<Vec<IngredientSummary>, AppError> {
        let ingredients = ingredient::Entity::find()
            .filter(ingredient::Column::RecipeId.eq(recipe_id))
            .order_by_asc(ingredient::Column::Id)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(ingredients.into_iter().map(IngredientSummary::from).collect())
    }
}
