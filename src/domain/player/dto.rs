use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::entity::player;
use crate::domain::team::dto::TeamSummary;
use crate::domain::team::entity::team;
use crate::utils::parent::deserialize_parent_id;

/// 선수 생성 요청 DTO
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[schema(example = "Pedri")]
    pub name: Option<String>,
    #[schema(example = "Centrocampista")]
    pub position: Option<String>,
    /// 소속 팀 ID (존재하는 팀이어야 함). `team: { "id": 1 }` 형태도 허용
    #[serde(default, alias = "team", deserialize_with = "deserialize_parent_id")]
    #[schema(example = 1)]
    pub team_id: Option<i32>,
}

/// 선수 수정 요청 DTO (포함된 필드만 반영)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    pub position: Option<String>,
    #[serde(default, alias = "team", deserialize_with = "deserialize_parent_id")]
    pub team_id: Option<i32>,
}

/// 선수 목록 필터
///
/// 이름/포지션은 부분 문자열, 팀 ID는 정확히 일치. 모든 조건은 AND로 결합됩니다.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub position: Option<String>,
    pub team_id: Option<i32>,
}

/// 팀 정보 없이 선수 컬럼만 담은 응답
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Pedri")]
    pub name: String,
    #[schema(example = "Centrocampista")]
    pub position: String,
    #[schema(example = 1)]
    pub team_id: Option<i32>,
}

impl From<player::Model> for PlayerSummary {
    fn from(model: player::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            position: model.position,
            team_id: model.team_id,
        }
    }
}

/// 소속 팀을 포함한 선수 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub team_id: Option<i32>,
    /// 소속 팀이 없으면 null
    pub team: Option<TeamSummary>,
}

impl PlayerResponse {
    pub fn from_parts(player: player::Model, team: Option<team::Model>) -> Self {
        Self {
            id: player.id,
            name: player.name,
            position: player.position,
            team_id: player.team_id,
            team: team.map(TeamSummary::from),
        }
    }
}

// --- Swagger용 래핑 DTO ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPlayerResponse {
    pub status_code: u16,
    pub data: PlayerResponse,
    pub updated_by: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPlayerListResponse {
    pub status_code: u16,
    pub data: Vec<PlayerResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPlayerSummaryListResponse {
    pub status_code: u16,
    pub data: Vec<PlayerSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessPlayerCreatedResponse {
    #[schema(example = 201)]
    pub status_code: u16,
    pub data: PlayerSummary,
    #[schema(example = "admin")]
    pub created_by: String,
}
