pub mod config;
pub mod domain;
pub mod global;
pub mod session;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::SessionStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{auth, greeting, health, ingredient, player, recipe, team};
pub use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handler::login,
        auth::handler::logout,
        auth::handler::status,
        team::handler::list_teams,
        team::handler::get_team,
        team::handler::create_team,
        team::handler::update_team,
        team::handler::delete_team,
        team::handler::list_team_players,
        player::handler::list_players,
        player::handler::get_player,
        player::handler::create_player,
        player::handler::update_player,
        player::handler::delete_player,
        recipe::handler::list_recipes,
        recipe::handler::get_recipe,
        recipe::handler::create_recipe,
        recipe::handler::update_recipe,
        recipe::handler::delete_recipe,
        recipe::handler::list_recipe_ingredients,
        ingredient::handler::list_ingredients,
        ingredient::handler::get_ingredient,
        ingredient::handler::create_ingredient,
        ingredient::handler::update_ingredient,
        ingredient::handler::delete_ingredient,
        greeting::handler::hello,
        greeting::handler::welcome,
        greeting::handler::greeting,
        health::handler::health_check,
    ),
    components(
        schemas(
            auth::dto::LoginRequest,
            auth::dto::LoginResponse,
            auth::dto::LogoutResponse,
            auth::dto::SessionStatusResponse,
            auth::dto::SuccessLoginResponse,
            auth::dto::SuccessLogoutResponse,
            auth::dto::SuccessSessionStatusResponse,
            team::dto::CreateTeamRequest,
            team::dto::UpdateTeamRequest,
            team::dto::TeamSummary,
            team::dto::TeamResponse,
            team::dto::SuccessTeamResponse,
            team::dto::SuccessTeamListResponse,
            team::dto::SuccessTeamCreatedResponse,
            player::dto::CreatePlayerRequest,
            player::dto::UpdatePlayerRequest,
            player::dto::PlayerSummary,
            player::dto::PlayerResponse,
            player::dto::SuccessPlayerResponse,
            player::dto::SuccessPlayerListResponse,
            player::dto::SuccessPlayerSummaryListResponse,
            player::dto::SuccessPlayerCreatedResponse,
            recipe::dto::CreateRecipeRequest,
            recipe::dto::UpdateRecipeRequest,
            recipe::dto::RecipeSummary,
            recipe::dto::RecipeResponse,
            recipe::dto::SuccessRecipeResponse,
            recipe::dto::SuccessRecipeListResponse,
            recipe::dto::SuccessRecipeCreatedResponse,
            ingredient::dto::CreateIngredientRequest,
            ingredient::dto::UpdateIngredientRequest,
            ingredient::dto::IngredientSummary,
            ingredient::dto::IngredientResponse,
            ingredient::dto::SuccessIngredientResponse,
            ingredient::dto::SuccessIngredientListResponse,
            ingredient::dto::SuccessIngredientSummaryListResponse,
            ingredient::dto::SuccessIngredientCreatedResponse,
            health::dto::HealthStatus,
            health::dto::HealthState,
            health::dto::HealthChecks,
            health::dto::CheckResult,
            utils::response::ErrorResponse,
            utils::response::DeletedResponse,
        )
    ),
    tags(
        (name = "Auth", description = "관리자 세션 로그인/로그아웃"),
        (name = "Teams", description = "팀 관리 API"),
        (name = "Players", description = "선수 관리 API"),
        (name = "Recetas", description = "레시피 관리 API"),
        (name = "Ingredientes", description = "재료 관리 API"),
        (name = "Greeting", description = "다국어 인사 메시지"),
        (name = "Health", description = "헬스체크")
    ),
    info(title = "Aula API", description = "Team/Player, Receta/Ingrediente CRUD API")
)]
pub struct ApiDoc;

/// 라우터 구성
///
/// 변경 요청(POST/PUT/PATCH/DELETE)의 관리자 검사는 각 핸들러의 `AdminUser` 추출기가 담당합니다.
/// 세션 레코드는 `store`에 보관됩니다.
pub fn app<S>(state: AppState, store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = session::session_layer(store, &state.config);

    let auth_routes = Router::new()
        .route("/auth/login", post(auth::handler::login))
        .route("/auth/logout", post(auth::handler::logout))
        .route("/auth/status", get(auth::handler::status));

    let team_routes = Router::new()
        .route(
            "/teams",
            get(team::handler::list_teams).post(team::handler::create_team),
        )
        .route(
            "/teams/:id",
            get(team::handler::get_team)
                .put(team::handler::update_team)
                .patch(team::handler::update_team)
                .delete(team::handler::delete_team),
        )
        .route("/teams/:id/players", get(team::handler::list_team_players));

    let player_routes = Router::new()
        .route(
            "/players",
            get(player::handler::list_players).post(player::handler::create_player),
        )
        .route(
            "/players/:id",
            get(player::handler::get_player)
                .put(player::handler::update_player)
                .patch(player::handler::update_player)
                .delete(player::handler::delete_player),
        );

    let recipe_routes = Router::new()
        .route(
            "/recetas",
            get(recipe::handler::list_recipes).post(recipe::handler::create_recipe),
        )
        .route(
            "/recetas/:id",
            get(recipe::handler::get_recipe)
                .put(recipe::handler::update_recipe)
                .patch(recipe::handler::update_recipe)
                .delete(recipe::handler::delete_recipe),
        )
        .route(
            "/recetas/:id/ingredientes",
            get(recipe::handler::list_recipe_ingredients),
        );

    let ingredient_routes = Router::new()
        .route(
            "/ingredientes",
            get(ingredient::handler::list_ingredients).post(ingredient::handler::create_ingredient),
        )
        .route(
            "/ingredientes/:id",
            get(ingredient::handler::get_ingredient)
                .put(ingredient::handler::update_ingredient)
                .patch(ingredient::handler::update_ingredient)
                .delete(ingredient::handler::delete_ingredient),
        );

    Router::new()
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(greeting::handler::hello))
        .route("/welcome", get(greeting::handler::welcome))
        .route("/greeting", get(greeting::handler::greeting))
        .route("/health", get(health::health_check))
        .merge(auth_routes)
        .merge(team_routes)
        .merge(player_routes)
        .merge(recipe_routes)
        .merge(ingredient_routes)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(global::middleware::request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(session_layer),
        )
        .with_state(state)
}
