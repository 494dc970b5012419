//! Verify request building and response classification against the JSON
//! test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, the expected request, a simulated
//! response, and the expected result or error kind. A replaying transport
//! captures the request and answers with the simulated response, so the
//! whole pipeline runs without a network. Bodies are compared as parsed JSON
//! to avoid false negatives from field ordering.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use terrakube_client::{
    Client, Config, Error, HttpMethod, HttpRequest, HttpResponse, Job, ListOptions, Result,
    Transport,
};

/// Answers every request with one canned response and keeps what was sent.
struct Replay {
    response: HttpResponse,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Transport for Replay {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

struct Harness {
    client: Client,
    replay: Arc<Replay>,
}

impl Harness {
    /// Cases without a simulated response must never reach the transport;
    /// the placeholder status makes any stray call fail loudly.
    fn new(case: &Value) -> Self {
        let response = match case.get("simulated_response") {
            Some(sim) => HttpResponse {
                status: sim["status"].as_u64().unwrap() as u16,
                headers: Vec::new(),
                body: sim["body"].as_str().unwrap().to_string(),
            },
            None => HttpResponse {
                status: 599,
                headers: Vec::new(),
                body: String::new(),
            },
        };
        let replay = Arc::new(Replay {
            response,
            seen: Mutex::new(Vec::new()),
        });
        let config = Config::new("https://terrakube.example.com", "vector-token")
            .with_user_agent("vectors/1.0");
        let client = Client::with_transport(config, replay.clone()).unwrap();
        Self { client, replay }
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.replay.seen.lock().unwrap().clone()
    }

    /// Check the single captured request against `expected_request`, or
    /// that nothing was sent when the case has none.
    fn check_request(&self, name: &str, case: &Value) {
        let requests = self.requests();
        let Some(expected) = case.get("expected_request") else {
            assert!(requests.is_empty(), "{name}: request should not be sent");
            return;
        };
        assert_eq!(requests.len(), 1, "{name}: exactly one request");
        let req = &requests[0];

        assert_eq!(
            req.method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(req.path, expected["path"].as_str().unwrap(), "{name}: path");
        assert_eq!(
            req.url,
            format!("https://terrakube.example.com{}", req.path),
            "{name}: url"
        );
        assert_eq!(req.query, pairs(&expected["query"]), "{name}: query");
        assert_eq!(req.headers, pairs(&expected["headers"]), "{name}: headers");

        match expected.get("body") {
            Some(body) => {
                let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&sent, body, "{name}: body");
            }
            None => assert!(req.body.is_none(), "{name}: body should be None"),
        }
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let pair = pair.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn check_error(name: &str, case: &Value, err: &Error) {
    let kind = case["expected_error"].as_str().unwrap();
    let matched = match kind {
        "NotFound" => err.is_not_found(),
        "Unauthorized" => err.is_unauthorized(),
        "Forbidden" => err.is_forbidden(),
        "Conflict" => err.is_conflict(),
        "Decode" => err.is_decode(),
        "Validation" => err.is_validation(),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {kind}, got {err:?}");
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let harness = Harness::new(&case);

        let result = harness.client.jobs().get(
            case["organization_id"].as_str().unwrap(),
            case["job_id"].as_str().unwrap(),
        );
        harness.check_request(name, &case);

        if case.get("expected_error").is_some() {
            check_error(name, &case, &result.unwrap_err());
        } else {
            let expected: Job = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        let harness = Harness::new(&case);

        let options = case["filter"].as_str().map(ListOptions::filter);
        let result = harness
            .client
            .jobs()
            .list(case["organization_id"].as_str().unwrap(), options.as_ref());
        harness.check_request(name, &case);

        if case.get("expected_error").is_some() {
            check_error(name, &case, &result.unwrap_err());
        } else {
            let expected: Vec<Job> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let harness = Harness::new(&case);
        let input: Job = serde_json::from_value(case["input"].clone()).unwrap();

        let result = harness
            .client
            .jobs()
            .create(case["organization_id"].as_str().unwrap(), &input);
        harness.check_request(name, &case);

        if case.get("expected_error").is_some() {
            check_error(name, &case, &result.unwrap_err());
        } else {
            let expected: Job = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let harness = Harness::new(&case);
        let input: Job = serde_json::from_value(case["input"].clone()).unwrap();

        let result = harness
            .client
            .jobs()
            .update(case["organization_id"].as_str().unwrap(), &input);
        harness.check_request(name, &case);

        if case.get("expected_error").is_some() {
            check_error(name, &case, &result.unwrap_err());
        } else {
            let expected: Job = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let harness = Harness::new(&case);

        let result = harness.client.jobs().delete(
            case["organization_id"].as_str().unwrap(),
            case["job_id"].as_str().unwrap(),
        );
        harness.check_request(name, &case);

        if case.get("expected_error").is_some() {
            check_error(name, &case, &result.unwrap_err());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
