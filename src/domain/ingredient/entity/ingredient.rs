use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingrediente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// 자유 형식 수량 (예: "200 g", "2 cucharadas")
    pub quantity: String,
    /// 소속 레시피. 레시피가 삭제되면 NULL (ON DELETE SET NULL)
    pub recipe_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::recipe::entity::recipe::Entity",
        from = "Column::RecipeId",
        to = "crate::domain::recipe::entity::recipe::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Recipe,
}

impl Related<crate::domain::recipe::entity::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
