use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, info};

use super::dto::{
    CreatePlayerRequest, PlayerFilter, PlayerResponse, PlayerSummary, UpdatePlayerRequest,
};
use super::entity::player;
use crate::domain::team::entity::team;
use crate::utils::db::{non_empty, set_if_present};
use crate::utils::error::AppError;

pub struct PlayerService;

impl PlayerService {
    /// 선수 목록 조회 (소속 팀 포함)
    pub async fn find_all(
        db: &DatabaseConnection,
        filter: PlayerFilter,
    ) -> Result<Vec<PlayerResponse>, AppError> {
        let mut query = player::Entity::find();

        if let Some(name) = non_empty(filter.name) {
            query = query.filter(player::Column::Name.contains(name));
        }
        if let Some(position) = non_empty(filter.position) {
            query = query.filter(player::Column::Position.contains(position));
        }
        if let Some(team_id) = filter.team_id {
            query = query.filter(player::Column::TeamId.eq(team_id));
        }

        let rows = query
            .order_by_asc(player::Column::Id)
            .find_also_related(team::Entity)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(rows
            .into_iter()
            .map(|(player, team)| PlayerResponse::from_parts(player, team))
            .collect())
    }

    /// 선수 단건 조회 (소속 팀 포함)
    pub async fn find_one(
        db: &DatabaseConnection,
        player_id: i32,
    ) -> Result<PlayerResponse, AppError> {
        let row = player::Entity::find_by_id(player_id)
            .find_also_related(team::Entity)
            .one(db)
            .await
            .map_err(AppError::store_read)?;

        row.map(|(player, team)| PlayerResponse::from_parts(player, team))
            .ok_or_else(|| AppError::not_found(format!("player {} not found", player_id)))
    }

    /// 선수 생성
    pub async fn create(
        db: &DatabaseConnection,
        req: CreatePlayerRequest,
    ) -> Result<PlayerSummary, AppError> {
        let model = player::ActiveModel {
            name: set_if_present(req.name),
            position: set_if_present(req.position),
            team_id: set_if_present(req.team_id.map(Some)),
            ..Default::default()
        };

        let created = model.insert(db).await.map_err(AppError::store_write)?;
        info!(player_id = created.id, team_id = ?created.team_id, "Player created");

        Ok(created.into())
    }

    /// 선수 수정 (포함된 필드만 UPDATE 후 재조회)
    pub async fn update(
        db: &DatabaseConnection,
        player_id: i32,
        req: UpdatePlayerRequest,
    ) -> Result<PlayerResponse, AppError> {
        let changes = player::ActiveModel {
            name: set_if_present(req.name),
            position: set_if_present(req.position),
            team_id: set_if_present(req.team_id.map(Some)),
            ..Default::default()
        };

        if changes.is_changed() {
            let result = player::Entity::update_many()
                .set(changes)
                .filter(player::Column::Id.eq(player_id))
                .exec(db)
                .await
                .map_err(AppError::store_write)?;
            debug!(player_id, rows_affected = result.rows_affected, "Player update executed");
        }

        Self::find_one(db, player_id).await
    }

    /// 선수 삭제 (일치하는 행이 없어도 성공)
    pub async fn delete(db: &DatabaseConnection, player_id: i32) -> Result<(), AppError> {
        let result = player::Entity::delete_by_id(player_id)
            .exec(db)
            .await
            .map_err(AppError::store_write)?;

        debug!(player_id, rows_affected = result.rows_affected, "Player delete executed");
        Ok(())
    }
}
