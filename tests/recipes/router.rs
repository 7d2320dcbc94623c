//! In-process tests against the recipe router.

use axum::http::StatusCode;
use recipe_service::RecipeStore;
use serde_json::json;

use crate::support::{call, delete, get, seeded_app, with_json};

#[tokio::test]
async fn list_returns_recipes_with_exact_keys() {
    let (_store, app) = seeded_app();

    let reply = call(&app, get("/recipes")).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.is_json());

    let body = reply.json();
    let items = body.as_array().unwrap();
    assert!(!items.is_empty());
    for item in items {
        let obj = item.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["id", "ingredients", "name"]);
    }
}

#[tokio::test]
async fn post_creates_recipe() {
    let (store, app) = seeded_app();
    let before = store.len().unwrap();

    let new_recipe = json!({
        "name": "test recipes",
        "ingredients": ["test", "recipes", 2]
    });
    let reply = call(&app, with_json("POST", "/recipes", &new_recipe)).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    assert!(reply.is_json());

    let body = reply.json();
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(
        body,
        json!({ "id": id, "name": "test recipes", "ingredients": ["test", "recipes", 2] })
    );

    let all = store.list().unwrap();
    assert_eq!(all.len(), before + 1);
    assert_eq!(all.iter().filter(|r| r.id == id).count(), 1);
    assert_eq!(all.last().unwrap().id, id);
}

#[tokio::test]
async fn post_without_ingredients_is_rejected() {
    let (store, app) = seeded_app();
    let before = store.list().unwrap();

    let bad = json!({ "name": "test bad recipes" });
    let reply = call(&app, with_json("POST", "/recipes", &bad)).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(!reply.is_json());
    assert!(String::from_utf8_lossy(&reply.body).contains("ingredients"));

    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn post_without_name_is_rejected() {
    let (store, app) = seeded_app();

    let bad = json!({ "ingredients": ["water"] });
    let reply = call(&app, with_json("POST", "/recipes", &bad)).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(!reply.is_json());
    assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn put_replaces_first_recipe() {
    let (store, app) = seeded_app();
    let before = store.list().unwrap();
    let id = before[0].id.clone();

    let updated = json!({
        "id": id,
        "name": "new test recipes",
        "ingredients": ["new", "test", "recipes"]
    });
    let reply = call(&app, with_json("PUT", &format!("/recipes/{id}"), &updated)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.is_json());
    assert_eq!(reply.json(), updated);

    let listed = call(&app, get("/recipes")).await.json();
    assert_eq!(listed[0], updated);
    assert_eq!(listed[1], serde_json::to_value(&before[1]).unwrap());
}

#[tokio::test]
async fn put_without_body_id_uses_path_id() {
    let (store, app) = seeded_app();
    let id = store.list().unwrap()[1].id.clone();

    let reply = call(
        &app,
        with_json(
            "PUT",
            &format!("/recipes/{id}"),
            &json!({ "name": "chocolate milkshake", "ingredients": ["cocoa", 2] }),
        ),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["id"], json!(id));
    assert_eq!(store.get(&id).unwrap().name, "chocolate milkshake");
}

#[tokio::test]
async fn put_unknown_id_is_404() {
    let (store, app) = seeded_app();
    let before = store.list().unwrap();

    let reply = call(
        &app,
        with_json(
            "PUT",
            "/recipes/does-not-exist",
            &json!({ "name": "ghost", "ingredients": ["air"] }),
        ),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert!(!reply.is_json());
    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn put_with_missing_fields_is_400() {
    let (store, app) = seeded_app();
    let before = store.list().unwrap();
    let id = before[0].id.clone();

    let reply = call(
        &app,
        with_json("PUT", &format!("/recipes/{id}"), &json!({ "name": "no ingredients" })),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn delete_removes_exactly_one() {
    let (store, app) = seeded_app();
    let before = store.list().unwrap();
    let id = before[0].id.clone();

    let reply = call(&app, delete(&format!("/recipes/{id}"))).await;
    assert_eq!(reply.status, StatusCode::NO_CONTENT);
    assert!(reply.body.is_empty());

    let after = store.list().unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|r| r.id != id));
    assert_eq!(after[0], before[1]);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let (store, app) = seeded_app();

    let reply = call(&app, delete("/recipes/does-not-exist")).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(store.len().unwrap(), 2);
}

#[tokio::test]
async fn deleted_id_is_gone_for_get_and_put() {
    let (store, app) = seeded_app();
    let id = store.list().unwrap()[0].id.clone();

    call(&app, delete(&format!("/recipes/{id}"))).await;

    let reply = call(&app, get(&format!("/recipes/{id}"))).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);

    let reply = call(&app, delete(&format!("/recipes/{id}"))).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
}
