mod common;

use axum::http::StatusCode;
use common::{
    empty_request, json_request, live_app, multipart_request, send, unique, ADMIN_PASSWORD,
    JWT_SECRET, MAX_UPLOAD_BYTES, PNG,
};
use corpsite_backend::utils::token::decode_token;
use serde_json::{json, Value as JsonValue};

async fn create_department(app: &axum::Router, token: &str) -> i64 {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/department-types",
            Some(token),
            &json!({ "name": unique("Department") }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["Data"]["id"].as_i64().expect("department id")
}

async fn create_named(app: &axum::Router, token: &str, uri: &str, body: JsonValue) -> i64 {
    let (status, created) = send(app, json_request("POST", uri, Some(token), &body)).await;
    assert_eq!(status, StatusCode::CREATED, "{} {}", uri, created);
    created["Data"]["id"].as_i64().expect("id")
}

fn disk_path(dir: &tempfile::TempDir, stored: &JsonValue) -> std::path::PathBuf {
    let stored = stored.as_str().expect("stored path");
    dir.path().join(stored.trim_start_matches("uploads/"))
}

fn cover_ids(images: &JsonValue) -> Vec<i64> {
    images
        .as_array()
        .expect("images")
        .iter()
        .filter(|img| img["is_cover"] == true)
        .map(|img| img["id"].as_i64().expect("image id"))
        .collect()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn partner_upload_rejects_bad_files_without_persisting() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let name = unique("Partner");

    let mut oversized = PNG.to_vec();
    oversized.resize(MAX_UPLOAD_BYTES + 1, 0);
    let (status, body) = send(
        &live.app,
        multipart_request(
            "POST",
            "/api/partners",
            &live.token,
            &[("name", name.as_str())],
            &[("image", "logo.png", oversized.as_slice())],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);

    let (status, _) = send(
        &live.app,
        multipart_request(
            "POST",
            "/api/partners",
            &live.token,
            &[("name", name.as_str())],
            &[("image", "notes.txt", &b"plain text"[..])],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM partners WHERE name = $1")
        .bind(&name)
        .fetch_one(&live.state.pool)
        .await
        .expect("count");
    assert_eq!(rows, 0);
    assert!(!dir.path().join("partners").exists()
        || std::fs::read_dir(dir.path().join("partners")).expect("dir").count() == 0);

    let (status, body) = send(
        &live.app,
        multipart_request(
            "POST",
            "/api/partners",
            &live.token,
            &[("name", name.as_str())],
            &[("image", "logo.png", PNG)],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let url = body["Data"]["image_url"].as_str().expect("image url");
    assert!(url.starts_with("http://") && url.contains("/uploads/partners/"));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn referenced_department_cannot_be_deleted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let department_id = create_department(&live.app, &live.token).await;

    let (status, body) = send(
        &live.app,
        json_request(
            "POST",
            "/api/job-titles",
            Some(&live.token),
            &json!({ "name": unique("Engineer"), "department_type_id": department_id }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let uri = format!("/api/department-types/{}", department_id);
    let (status, body) = send(&live.app, empty_request("DELETE", &uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Conflict with related data");

    let (status, _) = send(&live.app, empty_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn protected_department_cannot_be_deleted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;

    let id: i32 = sqlx::query_scalar("SELECT id FROM department_types WHERE name = 'Engineering'")
        .fetch_one(&live.state.pool)
        .await
        .expect("seeded department");
    let uri = format!("/api/department-types/{}", id);
    let (status, body) = send(&live.app, empty_request("DELETE", &uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Bad request");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn solution_gallery_keeps_a_single_cover() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let department_id = create_department(&live.app, &live.token).await.to_string();

    let (status, body) = send(
        &live.app,
        multipart_request(
            "POST",
            "/api/solutions",
            &live.token,
            &[
                ("title", "Payments platform"),
                ("description", "Card processing"),
                ("department_type_id", department_id.as_str()),
            ],
            &[
                ("images", "a.png", PNG),
                ("images", "b.png", PNG),
                ("images", "c.png", PNG),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let solution = &body["Data"];
    let solution_id = solution["id"].as_i64().expect("solution id");
    let images = solution["images"].as_array().expect("images").clone();
    assert_eq!(images.len(), 3);
    let covers = cover_ids(&solution["images"]);
    assert_eq!(covers.len(), 1);
    assert_eq!(images[0]["id"].as_i64(), Some(covers[0]));
    assert_eq!(solution["cover_image"], images[0]["url"]);

    let cover_path = images[0]["image"].as_str().expect("path").to_string();
    let on_disk = dir
        .path()
        .join(cover_path.trim_start_matches("uploads/"));
    assert!(on_disk.exists());

    let (status, body) = send(
        &live.app,
        empty_request(
            "DELETE",
            &format!("/api/solutions/images/{}", covers[0]),
            Some(&live.token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["Data"]["images"].as_array().map(Vec::len), Some(2));
    assert_eq!(cover_ids(&body["Data"]["images"]), vec![images[1]["id"].as_i64().expect("id")]);
    assert!(!on_disk.exists());

    let third = images[2]["id"].as_i64().expect("id");
    let (status, body) = send(
        &live.app,
        empty_request(
            "PUT",
            &format!("/api/solutions/images/{}/cover", third),
            Some(&live.token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(cover_ids(&body["Data"]["images"]), vec![third]);

    let (status, _) = send(
        &live.app,
        empty_request(
            "DELETE",
            &format!("/api/solutions/{}", solution_id),
            Some(&live.token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let leftover = std::fs::read_dir(dir.path().join("solutions"))
        .map(|d| d.count())
        .unwrap_or(0);
    assert_eq!(leftover, 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn empty_search_matches_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;

    for _ in 0..2 {
        let (status, _) = send(
            &live.app,
            json_request(
                "POST",
                "/api/event-categories",
                Some(&live.token),
                &json!({ "name": unique("Category") }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = send(&live.app, empty_request("GET", "/api/event-categories", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, searched) = send(
        &live.app,
        empty_request("GET", "/api/event-categories/search", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(searched["Data"], listed);

    let ids: Vec<i64> = listed
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["id"].as_i64())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn soft_deleted_inbox_message_is_hidden_but_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;

    let topic_id: i32 = sqlx::query_scalar("SELECT id FROM topics WHERE name = 'General Inquiry'")
        .fetch_one(&live.state.pool)
        .await
        .expect("seeded topic");
    let (status, body) = send(
        &live.app,
        json_request(
            "POST",
            "/api/inbox",
            None,
            &json!({
                "topic_id": topic_id,
                "name": "Visitor",
                "email": "visitor@example.com",
                "message": "Do you hire interns?"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let id = body["Data"]["id"].as_i64().expect("message id");

    let uri = format!("/api/inbox/{}", id);
    let (status, _) = send(&live.app, empty_request("DELETE", &uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send(&live.app, empty_request("GET", "/api/inbox", Some(&live.token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(listed
        .as_array()
        .expect("array")
        .iter()
        .all(|m| m["id"].as_i64() != Some(id)));

    let (status, _) = send(&live.app, empty_request("GET", &uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let deleted: bool = sqlx::query_scalar("SELECT deleteflag FROM inbox WHERE id = $1")
        .bind(id as i32)
        .fetch_one(&live.state.pool)
        .await
        .expect("row kept");
    assert!(deleted);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn job_tags_are_replaced_atomically() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let department_id = create_department(&live.app, &live.token).await;

    let (_, title) = send(
        &live.app,
        json_request(
            "POST",
            "/api/job-titles",
            Some(&live.token),
            &json!({ "name": unique("Backend"), "department_type_id": department_id }),
        ),
    )
    .await;
    let (_, tag) = send(
        &live.app,
        json_request(
            "POST",
            "/api/tech-stack-tags",
            Some(&live.token),
            &json!({ "name": unique("Rust"), "department_type_id": department_id }),
        ),
    )
    .await;
    let job_title_id = title["Data"]["id"].as_i64().expect("title id");
    let tag_id = tag["Data"]["id"].as_i64().expect("tag id");

    let mut payload = json!({
        "job_title_id": job_title_id,
        "date_open": "2026-03-01",
        "date_end": "2026-03-31",
        "tag_ids": [tag_id, tag_id]
    });
    let (status, body) = send(&live.app, json_request("POST", "/api/jobs", Some(&live.token), &payload)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let job_id = body["Data"]["id"].as_i64().expect("job id");
    assert_eq!(body["Data"]["tags"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["Data"]["status"], "Active");

    // An unknown tag aborts the whole update, leaving the previous tags.
    payload["tag_ids"] = json!([tag_id, i32::MAX]);
    payload["description"] = json!("changed");
    let uri = format!("/api/jobs/{}", job_id);
    let (status, _) = send(&live.app, json_request("PUT", &uri, Some(&live.token), &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, job) = send(&live.app, empty_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(job["description"].is_null());
    assert_eq!(job["tags"][0]["id"].as_i64(), Some(tag_id));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn missing_department_delete_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let department_id = create_department(&live.app, &live.token).await;

    let uri = format!("/api/department-types/{}", department_id);
    let (status, _) = send(&live.app, empty_request("DELETE", &uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&live.app, empty_request("DELETE", &uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Not found");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn inactive_comments_are_hidden_from_visitors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let department_id = create_department(&live.app, &live.token).await;
    let job_title_id = create_named(
        &live.app,
        &live.token,
        "/api/job-titles",
        json!({ "name": unique("Designer"), "department_type_id": department_id }),
    )
    .await;

    let hidden = create_named(
        &live.app,
        &live.token,
        "/api/comments",
        json!({
            "name": "Former intern",
            "job_title_id": job_title_id,
            "content": "Not approved yet",
            "status": "inActive"
        }),
    )
    .await;
    let shown = create_named(
        &live.app,
        &live.token,
        "/api/comments",
        json!({
            "name": "Team lead",
            "job_title_id": job_title_id,
            "content": "Great place to work"
        }),
    )
    .await;

    let ids = |list: &JsonValue| -> Vec<i64> {
        list.as_array()
            .expect("array")
            .iter()
            .filter_map(|c| c["id"].as_i64())
            .collect()
    };

    let (status, listed) = send(&live.app, empty_request("GET", "/api/comments", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&listed).contains(&shown));
    assert!(!ids(&listed).contains(&hidden));

    let search = format!("/api/comments/search?status=inActive&job_title_id={}", job_title_id);
    let (status, searched) = send(&live.app, empty_request("GET", &search, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&searched["Data"]), vec![shown]);

    let hidden_uri = format!("/api/comments/{}", hidden);
    let (status, body) = send(&live.app, empty_request("GET", &hidden_uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["Message"], "Not found");

    let (status, listed) = send(&live.app, empty_request("GET", "/api/comments", Some(&live.token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(ids(&listed).contains(&hidden));
    let (status, comment) = send(&live.app, empty_request("GET", &hidden_uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comment["status"], "inActive");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn login_issues_token_and_rejects_bad_or_deleted_users() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;

    let (status, body) = send(
        &live.app,
        json_request(
            "POST",
            "/api/users/login",
            None,
            &json!({ "username": live.username.to_uppercase(), "password": ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let token = body["Data"]["token"].as_str().expect("token");
    let claims = decode_token(token, JWT_SECRET).expect("valid token");
    assert_eq!(claims.sub, live.user_id.to_string());
    assert_eq!(claims.name, live.username);
    assert_eq!(claims.full_name, "Test Admin");

    let (status, me) = send(&live.app, empty_request("GET", "/api/users/me", Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], live.username.as_str());

    let (status, body) = send(
        &live.app,
        json_request(
            "POST",
            "/api/users/login",
            None,
            &json!({ "username": live.username, "password": "wrong-password" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["Message"], "Unauthorized");
    assert_eq!(body["Error"], "Invalid username or password");

    let other = format!("editor_{}", uuid::Uuid::new_v4().simple());
    let other_id = create_named(
        &live.app,
        &live.token,
        "/api/users",
        json!({ "username": other, "full_name": "Editor", "password": "editor-pass-123" }),
    )
    .await;
    let (status, _) = send(
        &live.app,
        empty_request("DELETE", &format!("/api/users/{}", other_id), Some(&live.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &live.app,
        json_request(
            "POST",
            "/api/users/login",
            None,
            &json!({ "username": other, "password": "editor-pass-123" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["Error"], "Invalid username or password");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn partner_image_replacement_removes_old_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let name = unique("Partner");

    let (status, body) = send(
        &live.app,
        multipart_request(
            "POST",
            "/api/partners",
            &live.token,
            &[("name", name.as_str())],
            &[("image", "logo.png", PNG)],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let id = body["Data"]["id"].as_i64().expect("partner id");
    let first = disk_path(&dir, &body["Data"]["image"]);
    assert!(first.exists());

    // Updating without a file keeps the current image.
    let uri = format!("/api/partners/{}", id);
    let (status, body) = send(
        &live.app,
        multipart_request("PUT", &uri, &live.token, &[("name", name.as_str())], &[]),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(disk_path(&dir, &body["Data"]["image"]), first);
    assert!(first.exists());

    let (status, body) = send(
        &live.app,
        multipart_request(
            "PUT",
            &uri,
            &live.token,
            &[("name", name.as_str()), ("status", "inActive")],
            &[("image", "logo2.png", PNG)],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let second = disk_path(&dir, &body["Data"]["image"]);
    assert_ne!(second, first);
    assert!(second.exists());
    assert!(!first.exists());

    let (status, _) = send(&live.app, empty_request("DELETE", &uri, Some(&live.token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!second.exists());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn event_gallery_appends_and_moves_cover() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let category_id = create_named(
        &live.app,
        &live.token,
        "/api/event-categories",
        json!({ "name": unique("Meetup") }),
    )
    .await
    .to_string();

    let (status, body) = send(
        &live.app,
        multipart_request(
            "POST",
            "/api/events",
            &live.token,
            &[
                ("title", "Rust meetup"),
                ("location", "Main office"),
                ("event_date", "2026-05-20"),
                ("event_category_id", category_id.as_str()),
            ],
            &[],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let event_id = body["Data"]["id"].as_i64().expect("event id");
    assert_eq!(body["Data"]["images"].as_array().map(Vec::len), Some(0));
    assert!(body["Data"]["cover_image"].is_null());

    let images_uri = format!("/api/events/{}/images", event_id);
    let (status, body) = send(
        &live.app,
        multipart_request(
            "POST",
            &images_uri,
            &live.token,
            &[],
            &[("images", "a.png", PNG), ("images", "b.png", PNG)],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let images = body["Data"]["images"].as_array().expect("images").clone();
    assert_eq!(images.len(), 2);
    assert_eq!(cover_ids(&body["Data"]["images"]), vec![images[0]["id"].as_i64().expect("id")]);

    let (status, body) = send(
        &live.app,
        multipart_request("POST", &images_uri, &live.token, &[], &[("images", "c.png", PNG)]),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let images = body["Data"]["images"].as_array().expect("images").clone();
    assert_eq!(images.len(), 3);
    assert_eq!(cover_ids(&body["Data"]["images"]).len(), 1);
    assert_eq!(images[2]["is_cover"], false);

    let newest = images[2]["id"].as_i64().expect("id");
    let (status, body) = send(
        &live.app,
        empty_request("PUT", &format!("/api/events/images/{}/cover", newest), Some(&live.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(cover_ids(&body["Data"]["images"]), vec![newest]);

    let newest_file = disk_path(&dir, &images[2]["image"]);
    let (status, body) = send(
        &live.app,
        empty_request("DELETE", &format!("/api/events/images/{}", newest), Some(&live.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(cover_ids(&body["Data"]["images"]), vec![images[0]["id"].as_i64().expect("id")]);
    assert!(!newest_file.exists());

    let (status, body) = send(
        &live.app,
        multipart_request("POST", &images_uri, &live.token, &[], &[]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Bad request");

    let (status, _) = send(
        &live.app,
        empty_request("DELETE", &format!("/api/events/{}", event_id), Some(&live.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let leftover = std::fs::read_dir(dir.path().join("events"))
        .map(|d| d.count())
        .unwrap_or(0);
    assert_eq!(leftover, 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn intern_tags_are_replaced_on_update() {
    let dir = tempfile::tempdir().expect("tempdir");
    let live = live_app(dir.path()).await;
    let department_id = create_department(&live.app, &live.token).await;
    let job_title_id = create_named(
        &live.app,
        &live.token,
        "/api/job-titles",
        json!({ "name": unique("Intern"), "department_type_id": department_id }),
    )
    .await;
    let rust = create_named(
        &live.app,
        &live.token,
        "/api/tech-stack-tags",
        json!({ "name": unique("Rust"), "department_type_id": department_id }),
    )
    .await;
    let sql = create_named(
        &live.app,
        &live.token,
        "/api/tech-stack-tags",
        json!({ "name": unique("SQL"), "department_type_id": department_id }),
    )
    .await;

    let mut payload = json!({
        "job_title_id": job_title_id,
        "duration": "3 months",
        "date_open": "2026-06-01",
        "date_end": "2026-08-31",
        "tag_ids": [rust]
    });
    let intern_id = create_named(&live.app, &live.token, "/api/interns", payload.clone()).await;

    payload["tag_ids"] = json!([sql, sql]);
    let uri = format!("/api/interns/{}", intern_id);
    let (status, body) = send(&live.app, json_request("PUT", &uri, Some(&live.token), &payload)).await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let (status, intern) = send(&live.app, empty_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    let tags: Vec<i64> = intern["tags"]
        .as_array()
        .expect("tags")
        .iter()
        .filter_map(|t| t["id"].as_i64())
        .collect();
    assert_eq!(tags, vec![sql]);

    payload["tag_ids"] = json!([]);
    let (status, body) = send(&live.app, json_request("PUT", &uri, Some(&live.token), &payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Data"]["tags"].as_array().map(Vec::len), Some(0));
}
