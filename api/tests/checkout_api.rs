use adapter::database::{connect_in_memory, migrate, seed, ConnectionPool};
use chrono::{Days, Local, NaiveDate};
use kernel::{
    model::id::{MaterialId, PatronId},
    repository::checkout::CheckoutRepository,
};
use registry::AppRegistry;
use reqwest::{Method, StatusCode};
use shared::error::AppError;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
    pool: ConnectionPool,
}

impl TestApp {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = self.client.request(method, format!("{}{path}", self.base_url));
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await.unwrap();
        let status = response.status();
        // エラー時の本文はプレーンテキストなので JSON として読めなければ Null にする
        let text = response.text().await.unwrap();
        (status, serde_json::from_str(&text).unwrap_or(Value::Null))
    }
}

async fn spawn_app() -> TestApp {
    let pool = connect_in_memory().await.unwrap();
    migrate(&pool).await.unwrap();
    seed(&pool).await.unwrap();

    let app = api::route::v1::routes().with_state(AppRegistry::new(pool.clone()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}/api/v1"),
        client: reqwest::Client::new(),
        pool,
    }
}

fn ids(items: &Value) -> Vec<i64> {
    items["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

fn days_ago(n: u64) -> NaiveDate {
    Local::now().date_naive() - Days::new(n)
}

async fn insert_checkout(pool: &ConnectionPool, material_id: i64, patron_id: i64, on: NaiveDate) {
    sqlx::query(
        "INSERT INTO checkouts (material_id, patron_id, checkout_date, paid) VALUES (?, ?, ?, FALSE)",
    )
    .bind(material_id)
    .bind(patron_id)
    .bind(on)
    .execute(pool.inner_ref())
    .await
    .unwrap();
}

#[tokio::test]
async fn checkout_then_return_round_trip() {
    let app = spawn_app().await;
    let today = Local::now().date_naive().to_string();

    let (status, created) = app
        .send(
            Method::POST,
            "/checkouts",
            Some(json!({ "materialId": 2, "patronId": 1, "checkoutDate": "2000-01-01" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["checkoutDate"], json!(today));
    assert_eq!(created["returnDate"], Value::Null);
    assert_eq!(created["lateFee"], Value::Null);
    assert_eq!(created["material"]["materialType"]["checkoutDays"], json!(14));
    let checkout_id = created["id"].as_i64().unwrap();

    let (_, available) = app.send(Method::GET, "/materials/available", None).await;
    assert_eq!(ids(&available), vec![3, 4, 7]);

    let (status, returned) = app
        .send(
            Method::PUT,
            &format!("/checkouts/{checkout_id}/returned"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(returned["returnDate"], json!(today));
    assert_eq!(returned["lateFee"], Value::Null);

    let (_, available) = app.send(Method::GET, "/materials/available", None).await;
    assert_eq!(ids(&available), vec![2, 3, 4, 7]);

    let (_, overdue) = app.send(Method::GET, "/checkouts/overdue", None).await;
    assert!(ids(&overdue).is_empty());

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/checkouts/{checkout_id}/returned"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn concurrent_checkouts_of_one_material_let_only_one_through() {
    let pool = connect_in_memory().await.unwrap();
    migrate(&pool).await.unwrap();
    seed(&pool).await.unwrap();
    let registry = AppRegistry::new(pool);
    let (first, second) = (registry.checkout_service(), registry.checkout_service());
    let today = Local::now().date_naive();
    let material_id = MaterialId::new(2);

    for _ in 0..20 {
        let (a, b) = tokio::join!(
            first.create_checkout(material_id, PatronId::new(1), today),
            second.create_checkout(material_id, PatronId::new(2), today),
        );
        let (checkout, rejected) = match (a, b) {
            (Ok(checkout), Err(e)) | (Err(e), Ok(checkout)) => (checkout, e),
            (a, b) => panic!("exactly one checkout must succeed: {a:?} / {b:?}"),
        };
        assert!(matches!(rejected, AppError::UnprocessableEntity(_)));

        let outstanding = registry
            .checkout_repository()
            .find_unreturned_all()
            .await
            .unwrap();
        assert_eq!(outstanding.len(), 1);

        first.return_checkout(checkout.id, today).await.unwrap();
    }
}

#[tokio::test]
async fn checkout_of_unknown_material_is_rejected_without_persisting() {
    let app = spawn_app().await;

    let (status, _) = app
        .send(
            Method::POST,
            "/checkouts",
            Some(json!({ "materialId": 999, "patronId": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            Method::POST,
            "/checkouts",
            Some(json!({ "materialId": 0, "patronId": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, outstanding) = app.send(Method::GET, "/checkouts", None).await;
    assert!(ids(&outstanding).is_empty());
}

#[tokio::test]
async fn overdue_checkouts_report_late_fee() {
    let app = spawn_app().await;
    // 貸出日数 14 日の資料を 20 日前に貸し出している
    insert_checkout(&app.pool, 3, 2, days_ago(20)).await;
    // 期限内
    insert_checkout(&app.pool, 4, 1, days_ago(5)).await;

    let (status, overdue) = app.send(Method::GET, "/checkouts/overdue", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = overdue["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["materialId"], json!(3));
    assert_eq!(items[0]["lateFee"], json!("3.00"));
    assert_eq!(items[0]["dueDate"], json!(days_ago(6).to_string()));

    let (_, patron) = app.send(Method::GET, "/patrons/2", None).await;
    assert_eq!(patron["lastName"], json!("Stark"));
    assert_eq!(patron["checkouts"][0]["lateFee"], json!("3.00"));
}

#[tokio::test]
async fn withdrawn_materials_are_never_available() {
    let app = spawn_app().await;

    let (_, available) = app.send(Method::GET, "/materials/available", None).await;
    assert_eq!(ids(&available), vec![2, 3, 4, 7]);

    let (status, _) = app.send(Method::PUT, "/materials/7/withdraw", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, available) = app.send(Method::GET, "/materials/available", None).await;
    assert_eq!(ids(&available), vec![2, 3, 4]);

    let (_, material) = app.send(Method::GET, "/materials/7", None).await;
    assert!(!material["withdrawnSince"].is_null());

    // 除籍済みでも名称・種別・ジャンルは更新でき、除籍日時はそのまま残る
    let (status, _) = app
        .send(
            Method::PUT,
            "/materials/7",
            Some(json!({ "name": "Wish You Were Here", "materialTypeId": 2, "genreId": 3 })),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, updated) = app.send(Method::GET, "/materials/7", None).await;
    assert_eq!(updated["name"], json!("Wish You Were Here"));
    assert_eq!(updated["genreId"], json!(3));
    assert_eq!(updated["withdrawnSince"], material["withdrawnSince"]);

    let (status, _) = app
        .send(
            Method::POST,
            "/checkouts",
            Some(json!({ "materialId": 7, "patronId": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deactivated_patron_cannot_check_out() {
    let app = spawn_app().await;

    let (status, _) = app.send(Method::PUT, "/patrons/2/deactivate", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .send(
            Method::POST,
            "/checkouts",
            Some(json!({ "materialId": 2, "patronId": 2 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_checkout_is_not_found() {
    let app = spawn_app().await;

    let (status, _) = app.send(Method::PUT, "/checkouts/42/returned", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::DELETE, "/checkouts/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_and_patron_endpoints() {
    let app = spawn_app().await;

    let (_, types) = app.send(Method::GET, "/materialtypes", None).await;
    assert_eq!(ids(&types), vec![1, 2, 3]);

    let (_, genres) = app.send(Method::GET, "/genres", None).await;
    assert_eq!(ids(&genres).len(), 5);

    let (status, created) = app
        .send(
            Method::POST,
            "/patrons",
            Some(json!({
                "firstName": "Bruce",
                "lastName": "Wayne",
                "email": "batman@example.com",
                "address": "1007 Mountain Drive"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["isActive"], json!(true));

    let (status, _) = app
        .send(
            Method::PUT,
            "/patrons/1",
            Some(json!({ "email": "not-an-email", "address": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send(Method::GET, "/health/db", None).await;
    assert_eq!(status, StatusCode::OK);
}
