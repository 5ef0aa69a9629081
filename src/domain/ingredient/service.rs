use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, info};

use super::dto::{
    CreateIngredientRequest, IngredientFilter, IngredientResponse, IngredientSummary,
    UpdateIngredientRequest,
};
use super::entity::ingredient;
use crate::domain::recipe::entity::recipe;
use crate::utils::db::{non_empty, set_if_present};
use crate::utils::error::AppError;

pub struct IngredientService;

impl IngredientService {
    /// 재료 목록 조회 (소속 레시피 포함)
    pub async fn find_all(
        db: &DatabaseConnection,
        filter: IngredientFilter,
    ) -> Result<Vec<IngredientResponse>, AppError> {
        let mut query = ingredient::Entity::find();

        if let Some(name) = non_empty(filter.name) {
            query = query.filter(ingredient::Column::Name.contains(name));
        }
        if let Some(recipe_id) = filter.recipe_id {
            query = query.filter(ingredient::Column::RecipeId.eq(recipe_id));
        }

        let rows = query
            .order_by_asc(ingredient::Column::Id)
            .find_also_related(recipe::Entity)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(rows
            .into_iter()
            .map(|(ingredient, recipe)| IngredientResponse::from_parts(ingredient, recipe))
            .collect())
    }

    pub async fn find_one(
        db: &DatabaseConnection,
        ingredient_id: i32,
    ) -> Result<IngredientResponse, AppError> {
        ingredient::Entity::find_by_id(ingredient_id)
            .find_also_related(recipe::Entity)
            .one(db)
            .await
            .map_err(AppError::store_read)?
            .map(|(ingredient, recipe)| IngredientResponse::from_parts(ingredient, recipe))
            .ok_or_else(|| AppError::not_found(format!("ingredient {} not found", ingredient_id)))
    }

    pub async fn create(
        db: &DatabaseConnection,
        req: CreateIngredientRequest,
    ) -> Result<IngredientSummary, AppError> {
        let model = ingredient::ActiveModel {
            name: set_if_present(req.name),
            quantity: set_if_present(req.quantity),
            recipe_id: set_if_present(req.recipe_id.map(Some)),
            ..Default::default()
        };

        let created = model.insert(db).await.map_err(AppError::store_write)?;
        info!(ingredient_id = created.id, recipe_id = ?created.recipe_id, "Ingredient created");

        Ok(created.into())
    }

    pub async fn update(
        db: &DatabaseConnection,
        ingredient_id: i32,
        req: UpdateIngredientRequest,
    ) -> Result<IngredientResponse, AppError> {
        let changes = ingredient::ActiveModel {
            name: set_if_present(req.name),
            quantity: set_if_present(req.quantity),
            recipe_id: set_if_present(req.recipe_id.map(Some)),
            ..Default::default()
        };

        if changes.is_changed() {
            let result = ingredient::Entity::update_many()
                .set(changes)
                .filter(ingredient::Column::Id.eq(ingredient_id))
                .exec(db)
                .await
                .map_err(AppError::store_write)?;
            debug!(
                ingredient_id,
                rows_affected = result.rows_affected,
                "Ingredient update executed"
            );
        }

        Self::find_one(db, ingredient_id).await
    }

    pub async fn delete(db: &DatabaseConnection, ingredient_id: i32) -> Result<(), AppError> {
        let result = ingredient::Entity::delete_by_id(ingredient_id)
            .exec(db)
            .await
            .map_err(AppError::store_write)?;

        debug!(
            ingredient_id,
            rows_affected = result.rows_affected,
            "Ingredient delete executed"
        );
        Ok(())
    }
}
