use axum::http::StatusCode;
use luct_core::models::rating::{Rating, SaveRatingRequest, SavedRating};
use luct_db::mock::repositories::MockStore;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};

use crate::test_utils::{server, timestamp};

fn rating_from(id: i32, request: SaveRatingRequest) -> Rating {
    Rating {
        id,
        day_of_week: request.day_of_week,
        course_name: request.course_name,
        rating: request.rating,
        rated_by: request.rated_by,
        created_at: timestamp(),
    }
}

fn payload(rating: Value) -> Value {
    json!({ "dayOfWeek": "Monday", "courseName": "DB101", "rating": rating, "ratedBy": 3 })
}

#[tokio::test]
async fn first_rating_is_created() {
    let mut store = MockStore::new();
    store
        .expect_save_rating()
        .returning(|request| Ok(SavedRating::Created(rating_from(1, request))));

    let response = server(store).post("/api/ratings").json(&payload(json!(4))).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["rating"], 4);
    assert_eq!(body["rated_by"], 3);
}

#[tokio::test]
async fn repeated_rating_overwrites_with_200() {
    let mut store = MockStore::new();
    store
        .expect_save_rating()
        .withf(|request: &SaveRatingRequest| request.rating == 5)
        .returning(|request| Ok(SavedRating::Updated(rating_from(1, request))));

    let response = server(store).post("/api/ratings").json(&payload(json!("5"))).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["rating"], 5);
}

#[rstest]
#[case(json!(0))]
#[case(json!(6))]
#[case(json!(-1))]
#[tokio::test]
async fn out_of_range_rating_is_rejected(#[case] rating: Value) {
    let mut store = MockStore::new();
    store.expect_save_rating().never();

    let response = server(store).post("/api/ratings").json(&payload(rating)).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "rating must be between 1 and 5" }));
}

#[tokio::test]
async fn ratings_by_user() {
    let mut store = MockStore::new();
    store.expect_list_ratings_by_user().with(eq(3)).returning(|user_id| {
        Ok(vec![Rating {
            id: 1,
            day_of_week: "Monday".to_string(),
            course_name: "DB101".to_string(),
            rating: 4,
            rated_by: user_id,
            created_at: timestamp(),
        }])
    });

    let response = server(store).get("/api/ratings/user/3").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["rated_by"], 3);
}
