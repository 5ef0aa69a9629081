use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::entity::team;
use crate::domain::player::dto::PlayerSummary;
use crate::domain::player::entity::player;

/// 팀 생성 요청 DTO
///
/// 필드 검증은 하지 않으며, 누락된 필수 컬럼은 DB 제약 조건에서 거부됩니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    /// 팀 이름
    #[schema(example = "FC Barcelona")]
    pub name: Option<String>,
    /// 팀 국가
    #[schema(example = "España")]
    pub country: Option<String>,
}

/// 팀 수정 요청 DTO (포함된 필드만 반영)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    #[schema(example = "Real Madrid")]
    pub name: Option<String>,
    #[schema(example = "España")]
    pub country: Option<String>,
}

/// 팀 목록 필터 (부분 문자열, 모든 조건 AND)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TeamFilter {
    /// 이름에 포함된 문자열
    pub name: Option<String>,
    /// 국가에 포함된 문자열
    pub country: Option<String>,
}

/// 선수 목록 없이 팀 컬럼만 담은 응답
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "FC Barcelona")]
    pub name: String,
    #[schema(example = "España")]
    pub country: String,
}

impl From<team::Model> for TeamSummary {
    fn from(model: team::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country: model.country,
        }
    }
}

/// 소속 선수를 포함한 팀 응답
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "FC Barcelona")]
    pub name: String,
    #[schema(example = "España")]
    pub country: String,
    pub players: Vec<PlayerSummary>,
}

impl TeamResponse {
    pub fn from_parts(team: team::Model, mut players: Vec<player::Model>) -> Self {
        players.sort_by_key(|p| p.id);
        Self {
            id: team.id,
            name: team.name,
            country: team.country,
            players: players.into_iter().map(PlayerSummary::from).collect(),
        }
    }
}

// --- Swagger용 래핑 DTO ---

/// 팀 단건 조회/수정 성공 응답 (Swagger용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamResponse {
    pub status_code: u16,
    pub data: TeamResponse,
    pub updated_by: Option<String>,
}

/// 팀 목록 조회 성공 응답 (Swagger용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamListResponse {
    pub status_code: u16,
    pub data: Vec<TeamResponse>,
}

/// 팀 생성 성공 응답 (Swagger용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamCreatedResponse {
    #[schema(example = 201)]
    pub status_code: u16,
    pub data: TeamSummary,
    #[schema(example = "admin")]
    pub created_by: String,
}
