use actix_web::{App, test, web};
use diesel::RunQueryDsl;
use member_search::repository::DieselRepository;
use member_search::services::seed::init_sample_data;
use serde_json::Value;

mod common;

macro_rules! app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .configure(member_search::configure),
        )
        .await
    };
}

fn seeded_repo(test_db: &common::TestDb) -> DieselRepository {
    let repo = DieselRepository::new(test_db.pool());
    init_sample_data(&repo).unwrap();
    repo
}

#[actix_web::test]
async fn test_hello_endpoints() {
    let test_db = common::TestDb::new("test_hello_endpoints.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    for uri in ["/", "/hello"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "hello");
    }
}

#[actix_web::test]
async fn test_v1_returns_flat_array() {
    let test_db = common::TestDb::new("test_v1_members.db");
    let repo = seeded_repo(&test_db);
    let app = app!(repo);

    let req = test::TestRequest::get()
        .uri("/v1/members?teamName=teamA&ageGoe=10&ageLoe=20&username=")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let rows = body.as_array().unwrap();
    // Even ages 10..=20 belong to teamA.
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r["teamName"] == "teamA"));
    assert_eq!(rows[0]["age"], 10);
    assert_eq!(rows[0]["username"], "member10");
    assert!(rows[0]["memberId"].is_number());
}

#[actix_web::test]
async fn test_v2_and_v3_return_pages() {
    let test_db = common::TestDb::new("test_v2_v3_members.db");
    let repo = seeded_repo(&test_db);
    let app = app!(repo);

    for version in ["v2", "v3"] {
        let req = test::TestRequest::get()
            .uri(&format!("/{version}/members?page=1&size=30"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalElements"], 100);
        assert_eq!(body["totalPages"], 4);
        assert_eq!(body["number"], 1);
        assert_eq!(body["size"], 30);
        assert_eq!(body["numberOfElements"], 30);
        assert_eq!(body["first"], false);
        assert_eq!(body["last"], false);
        assert_eq!(body["content"][0]["age"], 30);
    }
}

#[actix_web::test]
async fn test_repeated_sort_parameters() {
    let test_db = common::TestDb::new("test_repeated_sort.db");
    let repo = seeded_repo(&test_db);
    let app = app!(repo);

    let req = test::TestRequest::get()
        .uri("/v3/members?size=3&sort=teamName,desc&sort=age,desc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let ages: Vec<i64> = body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["age"].as_i64().unwrap())
        .collect();
    assert_eq!(ages, vec![99, 97, 95]);
}

#[actix_web::test]
async fn test_invalid_parameters_are_bad_requests() {
    let test_db = common::TestDb::new("test_invalid_parameters.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    for uri in [
        "/v2/members?page=-1",
        "/v3/members?size=0",
        "/v2/members?sort=salary",
        "/v1/members?ageGoe=abc",
        "/v3/members?page=abc",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "expected 400 for {uri}");
    }
}

#[actix_web::test]
async fn test_empty_database_returns_empty_page() {
    let test_db = common::TestDb::new("test_empty_page.db");
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let req = test::TestRequest::get().uri("/v3/members").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalElements"], 0);
    assert_eq!(body["empty"], true);
    assert_eq!(body["last"], true);
}

#[actix_web::test]
async fn test_blank_sort_falls_back_to_default_order() {
    let test_db = common::TestDb::new("test_blank_sort.db");
    let repo = seeded_repo(&test_db);
    let app = app!(repo);

    let req = test::TestRequest::get()
        .uri("/v2/members?page=&size=&sort=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["size"], 20);
    assert_eq!(body["content"][0]["age"], 0);
}

#[actix_web::test]
async fn test_unreadable_stored_row_is_server_error() {
    let test_db = common::TestDb::new("test_unreadable_row.db");
    let repo = seeded_repo(&test_db);
    {
        let mut conn = test_db.pool().get().unwrap();
        diesel::sql_query("INSERT INTO members (id, username, age) VALUES (0, 'ghost', 1)")
            .execute(&mut conn)
            .unwrap();
    }
    let app = app!(repo);

    for uri in ["/v1/members", "/v2/members", "/v3/members"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500, "expected 500 for {uri}");

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }
}
