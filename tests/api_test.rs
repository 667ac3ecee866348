//! Integration tests for API endpoints.
//!
//! These tests run the real router against a seeded in-memory store, so
//! every status code and body shape is exercised end to end without any
//! external infrastructure.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use campus_api::api::{create_router, AppState};

/// Spin up a test server around a freshly seeded store
fn server() -> TestServer {
    TestServer::new(create_router(AppState::seeded())).expect("router should start")
}

// =============================================================================
// Students
// =============================================================================

#[tokio::test]
async fn get_students_returns_seeded_students() {
    let server = server();

    let response = server.get("/students").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["students"].as_array().unwrap().len(), 3);
    assert_eq!(body["students"][0]["name"], "Alice");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn get_students_applies_filters_and_pagination() {
    let server = server();

    let response = server.get("/students?name=Ali").await;
    let body: Value = response.json();
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["students"][0]["name"], "Alice");
    assert_eq!(body["total"], 1);

    let response = server.get("/students?page=2&limit=2").await;
    let body: Value = response.json();
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn get_student_returns_student_with_courses() {
    let server = server();

    let response = server.get("/students/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["student"]["name"], "Alice");
    assert!(body["courses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_unknown_student_returns_404() {
    let server = server();

    let response = server.get("/students/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn post_student_creates_a_new_student() {
    let server = server();

    let response = server
        .post("/students")
        .json(&json!({"name": "David", "email": "david@example.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["name"], "David");
    assert_eq!(body["id"], 4);
}

#[tokio::test]
async fn post_student_rejects_duplicate_email() {
    let server = server();

    let response = server
        .post("/students")
        .json(&json!({"name": "Eve", "email": "alice@example.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Email must be unique");
}

#[tokio::test]
async fn post_student_rejects_missing_fields() {
    let server = server();

    let response = server
        .post("/students")
        .json(&json!({"email": "noname@example.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "name and email required");
}

#[tokio::test]
async fn put_student_updates_name_and_email() {
    let server = server();

    let response = server
        .put("/students/1")
        .json(&json!({"name": "Alice Updated", "email": "alice.updated@example.com"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["name"], "Alice Updated");
    assert_eq!(body["email"], "alice.updated@example.com");
}

#[tokio::test]
async fn put_unknown_student_returns_404() {
    let server = server();

    let response = server
        .put("/students/999")
        .json(&json!({"name": "Ghost"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_student_returns_204() {
    let server = server();

    let response = server.delete("/students/1").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get("/students/1").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_student_returns_404() {
    let server = server();

    let response = server.delete("/students/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn delete_enrolled_student_returns_400() {
    let server = server();

    let course = server
        .post("/courses")
        .json(&json!({"title": "Blocked", "teacher": "Prof Y"}))
        .await
        .json::<Value>();
    let student = server
        .post("/students")
        .json(&json!({"name": "Pinned", "email": "pinned@example.com"}))
        .await
        .json::<Value>();

    let enroll = server
        .post(&format!(
            "/courses/{}/students/{}",
            course["id"], student["id"]
        ))
        .await;
    assert_eq!(enroll.status_code(), StatusCode::CREATED);

    let response = server.delete(&format!("/students/{}", student["id"])).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].is_string());
}

// =============================================================================
// Courses
// =============================================================================

#[tokio::test]
async fn get_courses_returns_seeded_courses() {
    let server = server();

    let response = server.get("/courses").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["courses"].as_array().unwrap().len(), 1);
    assert_eq!(body["courses"][0]["title"], "Math");
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn get_course_returns_course_with_students() {
    let server = server();

    let response = server.get("/courses/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["course"]["id"], 1);
    assert!(body["students"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_unknown_course_returns_404() {
    let server = server();

    let response = server.get("/courses/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Course not found");
}

#[tokio::test]
async fn post_course_creates_a_new_course() {
    let server = server();

    let response = server
        .post("/courses")
        .json(&json!({"title": "Philosophy", "teacher": "Socrates"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["title"], "Philosophy");
    assert_eq!(body["teacher"], "Socrates");
    assert_eq!(body["id"], 2);
}

#[tokio::test]
async fn post_course_rejects_missing_fields() {
    let server = server();

    let response = server
        .post("/courses")
        .json(&json!({"teacher": "Anonymous"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "title and teacher required");
}

#[tokio::test]
async fn post_course_rejects_duplicate_title() {
    let server = server();

    let response = server
        .post("/courses")
        .json(&json!({"title": "Math", "teacher": "Someone"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Course title must be unique");
}

#[tokio::test]
async fn put_course_updates_title_and_teacher() {
    let server = server();

    let created = server
        .post("/courses")
        .json(&json!({"title": "Old Title", "teacher": "Prof A"}))
        .await
        .json::<Value>();

    let response = server
        .put(&format!("/courses/{}", created["id"]))
        .json(&json!({"title": "New Title", "teacher": "Prof B"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["title"], "New Title");
    assert_eq!(body["teacher"], "Prof B");
}

#[tokio::test]
async fn put_unknown_course_returns_404() {
    let server = server();

    let response = server
        .put("/courses/999")
        .json(&json!({"title": "Ghost", "teacher": "Prof X"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Course not found");
}

#[tokio::test]
async fn put_course_rejects_title_of_another_course() {
    let server = server();

    server
        .post("/courses")
        .json(&json!({"title": "Unique Title", "teacher": "Prof A"}))
        .await;
    let other = server
        .post("/courses")
        .json(&json!({"title": "Other Title", "teacher": "Prof B"}))
        .await
        .json::<Value>();

    let response = server
        .put(&format!("/courses/{}", other["id"]))
        .json(&json!({"title": "Unique Title"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Course title must be unique");
}

#[tokio::test]
async fn delete_course_returns_204() {
    let server = server();

    let created = server
        .post("/courses")
        .json(&json!({"title": "Temporary", "teacher": "Prof X"}))
        .await
        .json::<Value>();

    let response = server.delete(&format!("/courses/{}", created["id"])).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get(&format!("/courses/{}", created["id"])).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_course_returns_404() {
    let server = server();

    let response = server.delete("/courses/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Course not found");
}

#[tokio::test]
async fn delete_course_with_enrolled_students_returns_400() {
    let server = server();

    let enroll = server.post("/courses/1/students/1").await;
    assert_eq!(enroll.status_code(), StatusCode::CREATED);

    let response = server.delete("/courses/1").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].is_string());
}

// =============================================================================
// Enrollment
// =============================================================================

#[tokio::test]
async fn enrollment_shows_up_on_both_sides() {
    let server = server();

    let response = server.post("/courses/1/students/1").await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["student_id"], 1);
    assert_eq!(body["course_id"], 1);

    let student: Value = server.get("/students/1").await.json();
    assert_eq!(student["courses"][0]["title"], "Math");

    let course: Value = server.get("/courses/1").await.json();
    assert_eq!(course["students"][0]["name"], "Alice");
}

#[tokio::test]
async fn fourth_enrollment_returns_course_full() {
    let server = server();

    let extra = server
        .post("/students")
        .json(&json!({"name": "Extra", "email": "extra@example.com"}))
        .await
        .json::<Value>();

    for id in 1..=3 {
        let response = server.post(&format!("/courses/1/students/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = server
        .post(&format!("/courses/1/students/{}", extra["id"]))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Course is full");
}

#[tokio::test]
async fn enrollment_of_unknown_student_returns_404() {
    let server = server();

    let response = server.post("/courses/1/students/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Student not found");
}

// =============================================================================
// Service endpoints
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let server = server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}
