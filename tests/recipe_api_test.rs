//! 레시피/재료 API 통합 테스트
//!
//! - /recetas CRUD, /recetas/{id}/ingredientes
//! - /ingredientes CRUD, 필터

mod common;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{login_as_admin, send, test_app};
use serde_json::{json, Value};

async fn create_recipe(app: &Router, cookie: &str, name: &str, description: &str) -> i64 {
    let response = send(
        app,
        Method::POST,
        "/recetas",
        Some(cookie),
        Some(json!({ "name": name, "description": description })),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body["data"]["id"].as_i64().unwrap()
}

async fn create_ingredient(app: &Router, cookie: &str, body: Value) -> i64 {
    let response = send(app, Method::POST, "/ingredientes", Some(cookie), Some(body)).await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body["data"]["id"].as_i64().unwrap()
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn recipe_should_be_returned_with_its_ingredients() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let recipe_id = create_recipe(&app, &cookie, "Tortilla de patatas", "Clásica").await;
    create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Patata", "quantity": "500 g", "recipeId": recipe_id }),
    )
    .await;
    create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Huevo", "quantity": "6", "recipeId": recipe_id }),
    )
    .await;

    // Act
    let fetched = send(&app, Method::GET, &format!("/recetas/{}", recipe_id), None, None).await;

    // Assert
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["name"], "Tortilla de patatas");
    let ingredients = fetched.body["data"]["ingredients"].as_array().unwrap();
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[0]["name"], "Patata");
    assert_eq!(ingredients[0]["quantity"], "500 g");
}

#[tokio::test]
async fn recipe_ingredients_should_be_empty_for_unknown_recipe() {
    let app = test_app().await;

    let response = send(&app, Method::GET, "/recetas/31337/ingredientes", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn recipe_ingredients_should_list_only_its_children() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let gazpacho = create_recipe(&app, &cookie, "Gazpacho", "Sopa fría").await;
    let paella = create_recipe(&app, &cookie, "Paella", "Arroz con marisco").await;
    create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Tomate", "quantity": "1 kg", "recipeId": gazpacho }),
    )
    .await;
    create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Arroz", "quantity": "400 g", "recipeId": paella }),
    )
    .await;

    // Act
    let response = send(
        &app,
        Method::GET,
        &format!("/recetas/{}/ingredientes", gazpacho),
        None,
        None,
    )
    .await;

    // Assert
    assert_eq!(names(&response.body), vec!["Tomate"]);
    assert_eq!(response.body["data"][0]["recipeId"], gazpacho);
}

#[tokio::test]
async fn recipe_filters_should_require_both_name_and_description() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    create_recipe(&app, &cookie, "Sopa de ajo", "Caliente").await;
    create_recipe(&app, &cookie, "Sopa de tomate", "Fría").await;
    create_recipe(&app, &cookie, "Ensalada", "Fría y ligera").await;

    // Act
    let response = send(
        &app,
        Method::GET,
        "/recetas?name=sopa&description=fr",
        None,
        None,
    )
    .await;

    // Assert
    assert_eq!(names(&response.body), vec!["Sopa de tomate"]);
}

#[tokio::test]
async fn empty_patch_should_return_current_recipe() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let recipe_id = create_recipe(&app, &cookie, "Fabada", "Asturiana").await;

    // Act
    let response = send(
        &app,
        Method::PATCH,
        &format!("/recetas/{}", recipe_id),
        Some(&cookie),
        Some(json!({})),
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Fabada");
    assert_eq!(response.body["data"]["description"], "Asturiana");
}

#[tokio::test]
async fn update_of_missing_recipe_should_return_not_found() {
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;

    let response = send(
        &app,
        Method::PUT,
        "/recetas/500",
        Some(&cookie),
        Some(json!({ "description": "Nada" })),
    )
    .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_recipe_should_keep_ingredients_without_parent() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let recipe_id = create_recipe(&app, &cookie, "Pisto", "Verduras").await;
    let ingredient_id = create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Calabacín", "quantity": "2", "recipeId": recipe_id }),
    )
    .await;

    // Act
    let deleted = send(
        &app,
        Method::DELETE,
        &format!("/recetas/{}", recipe_id),
        Some(&cookie),
        None,
    )
    .await;

    // Assert
    assert_eq!(deleted.status, StatusCode::OK);
    let recipe = send(&app, Method::GET, &format!("/recetas/{}", recipe_id), None, None).await;
    assert_eq!(recipe.status, StatusCode::NOT_FOUND);

    let ingredient = send(
        &app,
        Method::GET,
        &format!("/ingredientes/{}", ingredient_id),
        None,
        None,
    )
    .await;
    assert_eq!(ingredient.status, StatusCode::OK);
    assert!(ingredient.body["data"]["recipeId"].is_null());
    assert!(ingredient.body["data"]["recipe"].is_null());
}

#[tokio::test]
async fn ingredient_should_be_returned_with_its_recipe() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let recipe_id = create_recipe(&app, &cookie, "Churros", "Con chocolate").await;
    let ingredient_id = create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Harina", "quantity": "250 g", "recipeId": recipe_id }),
    )
    .await;

    // Act
    let fetched = send(
        &app,
        Method::GET,
        &format!("/ingredientes/{}", ingredient_id),
        None,
        None,
    )
    .await;

    // Assert
    assert_eq!(fetched.body["data"]["recipe"]["name"], "Churros");
}

#[tokio::test]
async fn ingredient_filters_should_match_name_and_recipe() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let first = create_recipe(&app, &cookie, "Salmorejo", "Cordobés").await;
    let second = create_recipe(&app, &cookie, "Pan con tomate", "Catalán").await;
    create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Tomate pera", "quantity": "1 kg", "recipeId": first }),
    )
    .await;
    create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Tomate rama", "quantity": "2", "recipeId": second }),
    )
    .await;
    create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Pan", "quantity": "200 g", "recipeId": first }),
    )
    .await;

    // Act
    let response = send(
        &app,
        Method::GET,
        &format!("/ingredientes?name=TOMATE&recipeId={}", first),
        None,
        None,
    )
    .await;

    // Assert
    assert_eq!(names(&response.body), vec!["Tomate pera"]);
}

#[tokio::test]
async fn ingredient_update_should_move_it_to_another_recipe() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let from = create_recipe(&app, &cookie, "Croquetas", "De jamón").await;
    let to = create_recipe(&app, &cookie, "Lentejas", "Con chorizo").await;
    let ingredient_id = create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Chorizo", "quantity": "1", "recipeId": from }),
    )
    .await;

    // Act
    let updated = send(
        &app,
        Method::PUT,
        &format!("/ingredientes/{}", ingredient_id),
        Some(&cookie),
        Some(json!({ "recipeId": to })),
    )
    .await;

    // Assert
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["recipeId"], to);
    assert_eq!(updated.body["data"]["recipe"]["name"], "Lentejas");

    let old_children = send(
        &app,
        Method::GET,
        &format!("/recetas/{}/ingredientes", from),
        None,
        None,
    )
    .await;
    assert_eq!(old_children.body["data"], json!([]));
}

#[tokio::test]
async fn ingredient_delete_without_session_should_be_rejected() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let ingredient_id = create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Sal", "quantity": "una pizca" }),
    )
    .await;

    // Act
    let response = send(
        &app,
        Method::DELETE,
        &format!("/ingredientes/{}", ingredient_id),
        None,
        None,
    )
    .await;

    // Assert
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let still_there = send(
        &app,
        Method::GET,
        &format!("/ingredientes/{}", ingredient_id),
        None,
        None,
    )
    .await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn ingredient_created_with_nested_recipe_should_be_listed_under_it() {
    // Arrange
    let app = test_app().await;
    let cookie = login_as_admin(&app).await;
    let recipe_id = create_recipe(&app, &cookie, "Gazpacho", "Fría").await;

    // Act
    let ingredient_id = create_ingredient(
        &app,
        &cookie,
        json!({ "name": "Tomate", "quantity": "1 kg", "receta": { "id": recipe_id } }),
    )
    .await;

    // Assert
    let fetched = send(
        &app,
        Method::GET,
        &format!("/ingredientes/{}", ingredient_id),
        None,
        None,
    )
    .await;
    assert_eq!(fetched.body["data"]["recipeId"], recipe_id);

    let listed = send(
        &app,
        Method::GET,
        &format!("/recetas/{}/ingredientes", recipe_id),
        None,
        None,
    )
    .await;
    assert_eq!(names(&listed.body), vec!["Tomate"]);
}
