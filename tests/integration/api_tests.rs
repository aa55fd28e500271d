//! API integration tests
//!
//! These run against a live server backed by PostgreSQL:
//! `cargo test --test api_tests -- --ignored`

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Student body with an email nobody else has used
fn new_student(name: &str, gender: &str) -> Value {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let local = name.to_lowercase().replace(' ', "");
    json!({
        "name": name,
        "email": format!("{}.{}@example.org", local, nanos),
        "gender": gender,
    })
}

async fn list_students(client: &Client) -> Vec<Value> {
    let response = client
        .get(format!("{}/students", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

async fn add_student(client: &Client, student: &Value) -> reqwest::Response {
    client
        .post(format!("{}/students", BASE_URL))
        .json(student)
        .send()
        .await
        .expect("Failed to send request")
}

/// Register `student` and return the id the server assigned
async fn register(client: &Client, student: &Value) -> i64 {
    let response = add_student(client, student).await;
    assert_eq!(response.status(), StatusCode::OK);

    list_students(client)
        .await
        .into_iter()
        .find(|s| s["email"] == student["email"])
        .and_then(|s| s["id"].as_i64())
        .expect("registered student not listed")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_about_project() {
    let client = Client::new();

    let response = client
        .get(format!("{}/about-project", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await.expect("Failed to read body"),
        "About Project Page from new controller"
    );
}

#[tokio::test]
#[ignore]
async fn test_register_new_student() {
    let client = Client::new();
    let student = new_student("Johnny Walker", "MALE");

    let response = add_student(&client, &student).await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = list_students(&client)
        .await
        .into_iter()
        .find(|s| s["email"] == student["email"])
        .expect("student not listed");
    assert_eq!(listed["name"], student["name"]);
    assert_eq!(listed["gender"], student["gender"]);
    assert!(listed["id"].is_i64());
}

#[tokio::test]
#[ignore]
async fn test_register_ten_students() {
    let client = Client::new();

    for i in 0..10 {
        let gender = if i % 2 == 0 { "MALE" } else { "FEMALE" };
        let student = new_student(&format!("Student {}", i), gender);
        register(&client, &student).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_taken_email_is_rejected() {
    let client = Client::new();
    let student = new_student("Ann Lee", "FEMALE");
    register(&client, &student).await;

    let response = add_student(&client, &student).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains(&format!(
        "Email {} is taken",
        student["email"].as_str().unwrap_or_default()
    )));
    let same_email = list_students(&client)
        .await
        .into_iter()
        .filter(|s| s["email"] == student["email"])
        .count();
    assert_eq!(same_email, 1);
}

#[tokio::test]
#[ignore]
async fn test_invalid_body_is_rejected() {
    let client = Client::new();

    let response = add_student(&client, &json!({"name": "", "email": "nope"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Name must not be blank"));
    assert!(body.contains("Gender must be provided"));
}

#[tokio::test]
#[ignore]
async fn test_update_existing_student() {
    let client = Client::new();
    let id = register(&client, &new_student("Maria Lopez", "FEMALE")).await;
    let new_data = new_student("George Best", "MALE");

    let response = client
        .put(format!("{}/students/{}", BASE_URL, id))
        .json(&new_data)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Value = client
        .get(format!("{}/students/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], new_data["name"]);
    assert_eq!(updated["email"], new_data["email"]);
    assert_eq!(updated["gender"], new_data["gender"]);
}

#[tokio::test]
#[ignore]
async fn test_add_then_delete_student_twice() {
    let client = Client::new();
    let id = register(&client, &new_student("Short Lived", "MALE")).await;

    let response = client
        .delete(format!("{}/students/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(list_students(&client).await.iter().all(|s| s["id"] != id));

    let response = client
        .delete(format!("{}/students/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.text().await.expect("Failed to read body"),
        format!("Student with id {} does not exists", id)
    );
}

#[tokio::test]
#[ignore]
async fn test_update_onto_taken_email_is_rejected() {
    let client = Client::new();
    let first = new_student("Email Owner", "FEMALE");
    register(&client, &first).await;
    let second = new_student("Email Taker", "MALE");
    let second_id = register(&client, &second).await;

    let response = client
        .put(format!("{}/students/{}", BASE_URL, second_id))
        .json(&json!({
            "name": "Email Taker",
            "email": first["email"],
            "gender": "MALE",
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.expect("Failed to read body"),
        format!("Email {} is taken", first["email"].as_str().unwrap_or_default())
    );

    let stored: Value = client
        .get(format!("{}/students/{}", BASE_URL, second_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(stored["id"], second_id);
    assert_eq!(stored["name"], second["name"]);
    assert_eq!(stored["email"], second["email"]);
    assert_eq!(stored["gender"], second["gender"]);
}
