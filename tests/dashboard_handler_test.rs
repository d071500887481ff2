mod common;

use axum::http::StatusCode;
use common::{assert_redirect, setup_app, Browser};

async fn signed_in(app: &axum::Router, username: &str, role: &str) -> Browser {
    let mut browser = Browser::new(app);
    let resp = browser.register(username, "secret1", role).await;
    assert_redirect(&resp, "/login");
    let resp = browser.login(username, "secret1").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    browser
}

#[tokio::test]
async fn test_student_is_kept_off_faculty_page() {
    let app = setup_app();
    let mut student = signed_in(&app, "alice", "student").await;

    let resp = student.get("/faculty").await;
    assert_redirect(&resp, "/");
    let resp = student.post_form("/faculty", &[("achievement", "Fake award")]).await;
    assert_redirect(&resp, "/");

    let resp = student.get("/").await;
    assert!(resp.body.contains("You do not have permission to access this page."));
}

#[tokio::test]
async fn test_faculty_is_kept_off_student_page() {
    let app = setup_app();
    let mut faculty = signed_in(&app, "bob", "faculty").await;

    let resp = faculty.get("/student").await;
    assert_redirect(&resp, "/");
    let resp = faculty.post_form("/student", &[("activity", "x"), ("days_spent", "1")]).await;
    assert_redirect(&resp, "/");

    // Nothing was recorded by the rejected submission.
    let resp = faculty.get("/view_data").await;
    assert!(resp.body.contains("No activities yet."));
}

#[tokio::test]
async fn test_anonymous_submissions_go_to_login() {
    let app = setup_app();
    let mut anon = Browser::new(&app);

    let resp = anon.post_form("/student", &[("activity", "Chess club"), ("days_spent", "2")]).await;
    assert_redirect(&resp, "/login");
    let resp = anon.post_form("/faculty", &[("achievement", "Best paper")]).await;
    assert_redirect(&resp, "/login");
    let resp = anon.get("/view_data").await;
    assert_redirect(&resp, "/login");

    let resp = anon.get("/login").await;
    assert!(resp.body.contains("Please log in to access this page."));
}

#[tokio::test]
async fn test_one_activity_shows_up_once() {
    let app = setup_app();
    let mut student = signed_in(&app, "alice", "student").await;

    let resp = student
        .post_form("/student", &[("activity", "Robotics contest"), ("days_spent", "three")])
        .await;
    assert_redirect(&resp, "/student");
    let resp = student.get("/student").await;
    assert!(resp.body.contains("Activity recorded!"));

    let resp = student.get("/view_data").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body.matches("<tr class=\"activity\">").count(), 1);
    assert!(resp
        .body
        .contains("<tr class=\"activity\"><td>alice</td><td>Robotics contest</td><td>three</td></tr>"));
    assert!(resp.body.contains("No achievements yet."));
}

#[tokio::test]
async fn test_view_data_lists_both_tables() {
    let app = setup_app();
    let mut student = signed_in(&app, "alice", "student").await;
    let mut faculty = signed_in(&app, "bob", "faculty").await;

    student
        .post_form("/student", &[("activity", "Debate team"), ("days_spent", "5")])
        .await;
    let resp = faculty.post_form("/faculty", &[("achievement", "Teaching award")]).await;
    assert_redirect(&resp, "/faculty");

    // Any signed-in user sees everything.
    let resp = student.get("/view_data").await;
    assert_eq!(resp.body.matches("<tr class=\"activity\">").count(), 1);
    assert_eq!(resp.body.matches("<tr class=\"achievement\">").count(), 1);
    assert!(resp.body.contains("<tr class=\"achievement\"><td>bob</td><td>Teaching award</td></tr>"));
}

#[tokio::test]
async fn test_blank_activity_is_rejected_inline() {
    let app = setup_app();
    let mut student = signed_in(&app, "alice", "student").await;

    let resp = student.post_form("/student", &[("activity", "Choir"), ("days_spent", " ")]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("This field is required."));
    assert!(resp.body.contains("Choir"));

    let resp = student.get("/view_data").await;
    assert_eq!(resp.body.matches("<tr class=\"activity\">").count(), 0);
}

#[tokio::test]
async fn test_recorded_content_is_escaped() {
    let app = setup_app();
    let mut faculty = signed_in(&app, "bob", "faculty").await;

    faculty
        .post_form("/faculty", &[("achievement", "<script>alert(1)</script>")])
        .await;
    let resp = faculty.get("/view_data").await;
    assert!(!resp.body.contains("<script>"));
    assert!(resp.body.contains("&lt;script&gt;"));
}
