use crate::errors::ServerError;
use crate::load::load_sales;
use crate::router::handle;
use crate::tests::utils::{date, make_db, sale};
use astra::{Body, Request};

fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn dashboard_renders_with_explicit_range() {
    let db = make_db("router_range");
    load_sales(&db, &[sale("ORD-1", date(2050, 1, 10), 100.0)]).unwrap();

    let resp = handle(get("/?start=2050-01-01&end=2050-01-31"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );
}

#[test]
fn dashboard_renders_on_an_empty_store() {
    let db = make_db("router_empty");

    // No rows and no params: defaults to today, placeholders all round.
    let resp = handle(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn invalid_date_param_is_a_bad_request() {
    let db = make_db("router_bad_date");

    let err = handle(get("/?start=junk"), &db).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_path_is_not_found() {
    let db = make_db("router_404");

    let err = handle(get("/nope"), &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(get("/admin"), &db).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
