//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences. Paths in the vectors are
//! relative to the collection URL.

use users_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, User, UserDraft, UserId, UsersClient};

const BASE_URL: &str = "http://localhost:3000/users";

fn client() -> UsersClient {
    UsersClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
    match expected.get("body") {
        Some(body) => {
            let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: u16::try_from(sim["status"].as_u64().unwrap()).unwrap(),
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_expected_error(name: &str, expected_error: &serde_json::Value, err: ApiError) {
    match expected_error.as_str().unwrap() {
        "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
        "HttpError" => assert!(matches!(err, ApiError::HttpError { .. }), "{name}: expected HttpError"),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_users();
        assert_request(name, &req, &case["expected_request"]);

        let users = c.parse_list_users(simulated_response(case)).unwrap();
        let expected: Vec<User> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(users, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: UserDraft = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        let req = c.build_create_user(&input).unwrap();
        assert_request(name, &req, expected_req);

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let user = c.parse_create_user(simulated_response(case)).unwrap();
        let expected: User = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(user, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let raw = include_str!("../../test-vectors/update.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = UserId::new(case["input_id"].as_str().unwrap());
        let input: UserDraft = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_user(&id, &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_user(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error, result.unwrap_err());
        } else {
            let expected: User = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = UserId::new(case["input_id"].as_str().unwrap());

        let req = c.build_delete_user(&id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_user(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error, result.unwrap_err());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
