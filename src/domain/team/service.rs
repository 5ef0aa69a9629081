use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder,
};
use tracing::{debug, info};

use super::dto::{CreateTeamRequest, TeamFilter, TeamResponse, TeamSummary, UpdateTeamRequest};
use super::entity::team;
use crate::domain::player::dto::PlayerSummary;
use crate::domain::player::entity::player;
use crate::utils::db::{non_empty, set_if_present};
use crate::utils::error::AppError;

pub struct TeamService;

impl TeamService {
    /// 팀 목록 조회 (소속 선수 포함)
    pub async fn find_all(
        db: &DatabaseConnection,
        filter: TeamFilter,
    ) -> Result<Vec<TeamResponse>, AppError> {
        let mut query = team::Entity::find();

        if let Some(name) = non_empty(filter.name) {
            query = query.filter(team::Column::Name.contains(name));
        }
        if let Some(country) = non_empty(filter.country) {
            query = query.filter(team::Column::Country.contains(country));
        }

        let rows = query
            .order_by_asc(team::Column::Id)
            .find_with_related(player::Entity)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(rows
            .into_iter()
            .map(|(team, players)| TeamResponse::from_parts(team, players))
            .collect())
    }

    /// 팀 단건 조회 (소속 선수 포함)
    pub async fn find_one(db: &DatabaseConnection, team_id: i32) -> Result<TeamResponse, AppError> {
        Self::load_with_players(db, team_id)
            .await?
            .ok_or_else(|| team_not_found(team_id))
    }

    /// 팀 생성
    pub async fn create(
        db: &DatabaseConnection,
        req: CreateTeamRequest,
    ) -> Result<TeamSummary, AppError> {
        let model = team::ActiveModel {
            name: set_if_present(req.name),
            country: set_if_present(req.country),
            ..Default::default()
        };

        let created = model.insert(db).await.map_err(AppError::store_write)?;
        info!(team_id = created.id, "Team created");

        Ok(created.into())
    }

    /// 팀 수정
    ///
    /// UPDATE는 존재 여부와 무관하게 실행되고(영향받은 행 0개도 에러 아님),
    /// 이후 재조회에서 팀이 없으면 NotFound를 반환합니다.
    pub async fn update(
        db: &DatabaseConnection,
        team_id: i32,
        req: UpdateTeamRequest,
    ) -> Result<TeamResponse, AppError> {
        let changes = team::ActiveModel {
            name: set_if_present(req.name),
            country: set_if_present(req.country),
            ..Default::default()
        };

        if changes.is_changed() {
            let result = team::Entity::update_many()
                .set(changes)
                .filter(team::Column::Id.eq(team_id))
                .exec(db)
                .await
                .map_err(AppError::store_write)?;
            debug!(team_id, rows_affected = result.rows_affected, "Team update executed");
        }

        Self::find_one(db, team_id).await
    }

    /// 팀 삭제
    ///
    /// 일치하는 행이 없어도 성공으로 처리합니다. 소속 선수의 team_id는 NULL이 됩니다.
    pub async fn delete(db: &DatabaseConnection, team_id: i32) -> Result<(), AppError> {
        let result = team::Entity::delete_by_id(team_id)
            .exec(db)
            .await
            .map_err(AppError::store_write)?;

        if result.rows_affected == 0 {
            debug!(team_id, "Delete matched no team");
        } else {
            info!(team_id, "Team deleted");
        }

        Ok(())
    }

    /// 팀 소속 선수 목록
    ///
    /// 선수가 없는 팀과 존재하지 않는 팀 모두 빈 목록을 반환합니다.
    pub async fn find_players(
        db: &DatabaseConnection,
        team_id: i32,
    ) -> Result<Vec<PlayerSummary>, AppError> {
        let players = player::Entity::find()
            .filter(player::Column::TeamId.eq(team_id))
            .order_by_asc(player::Column::Id)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(players.into_iter().map(PlayerSummary::from).collect())
    }

    async fn load_with_players(
        db: &DatabaseConnection,
        team_id: i32,
    ) -> Result<Option<TeamResponse>, AppError> {
        let Some(team) = team::Entity::find_by_id(team_id)
            .one(db)
            .await
            .map_err(AppError::store_read)?
        else {
            return Ok(None);
        };

        let players = team
            .find_related(player::Entity)
            .all(db)
            .await
            .map_err(AppError::store_read)?;

        Ok(Some(TeamResponse::from_parts(team, players)))
    }
}

fn team_not_found(team_id: i32) -> AppError {
    AppError::not_found(format!("team {} not found", team_id))
}
