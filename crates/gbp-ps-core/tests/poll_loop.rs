//! Poll loop and GraphQL client against an in-process server.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use gbp_ps_core::poller::{CycleOutcome, poll_cycle, run_poll_loop};
use gbp_ps_core::{
    BuildId, BuildProcess, Color, GraphQlClient, GraphQlError, MemoryTableBody, PhaseColors,
    PollConfig,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

#[derive(Default)]
struct MockServer {
    responses: Mutex<VecDeque<(StatusCode, Value)>>,
    requests: Mutex<Vec<(HeaderMap, Value)>>,
}

impl MockServer {
    fn respond(&self, status: StatusCode, body: Value) {
        self.responses.lock().unwrap().push_back((status, body));
    }

    fn requests(&self) -> Vec<(HeaderMap, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn graphql(
    State(state): State<Arc<MockServer>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push((headers, body));
    let (status, body) = state
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::OK, processes_response(&[])));
    (status, Json(body))
}

async fn start_server(state: Arc<MockServer>) -> SocketAddr {
    let app = Router::new()
        .route("/graphql", post(graphql))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    addr
}

fn process_json(package: &str, phase: &str) -> Value {
    json!({
        "machine": "babette",
        "id": "1031",
        "buildHost": "jenkins",
        "package": package,
        "phase": phase,
        "startTime": "2023-11-11T12:20:52+00:00",
    })
}

fn processes_response(processes: &[Value]) -> Value {
    json!({ "data": { "buildProcesses": processes } })
}

fn client_for(addr: SocketAddr) -> GraphQlClient {
    let url = Url::parse(&format!("http://{}/ps/?update_interval=1000", addr)).unwrap();
    GraphQlClient::new(&url).unwrap()
}

fn poll_config(interval_ms: u64) -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(interval_ms),
        colors: PhaseColors::new(&[Color::rgb(0x4d, 0x5e, 0x6f), Color::rgb(0xf5, 0xa6, 0x23)]),
    }
}

#[tokio::test]
async fn test_get_processes_posts_query_to_origin_root() {
    let state = Arc::new(MockServer::default());
    state.respond(
        StatusCode::OK,
        processes_response(&[
            process_json("sys-apps/portage-3.0.51", "postinst"),
            process_json("net-misc/wget-1.21.4", "compile"),
        ]),
    );
    let addr = start_server(state.clone()).await;
    let client = client_for(addr);

    assert_eq!(client.endpoint().path(), "/graphql");

    let processes = client.get_processes().await.unwrap();
    assert_eq!(processes.len(), 2);
    assert_eq!(processes[0].package, "sys-apps/portage-3.0.51");
    assert_eq!(processes[1].id, BuildId::Text("1031".to_string()));

    let requests = state.requests();
    assert_eq!(requests.len(), 1);
    let (headers, body) = &requests[0];
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(headers[header::ACCEPT], "application/json");
    assert!(body["query"].as_str().unwrap().contains("buildProcesses"));
}

#[tokio::test]
async fn test_http_error_status_is_a_failed_cycle() {
    let state = Arc::new(MockServer::default());
    state.respond(
        StatusCode::OK,
        processes_response(&[process_json("sys-apps/portage-3.0.51", "compile")]),
    );
    state.respond(StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "boom" }));
    let addr = start_server(state).await;
    let client = client_for(addr);
    let config = poll_config(500);
    let mut body = MemoryTableBody::default();

    let first = poll_cycle(&client, &mut body, &config).await;
    assert_eq!(first, CycleOutcome::Rendered { rows: 1 });

    let second = poll_cycle(&client, &mut body, &config).await;
    assert_eq!(second, CycleOutcome::Failed);
    assert_eq!(body.rows().len(), 1);
    assert_eq!(body.renders(), 1);

    // Queue is drained: the server now answers with an empty list
    let third = poll_cycle(&client, &mut body, &config).await;
    assert_eq!(third, CycleOutcome::Rendered { rows: 0 });
    assert!(body.rows().is_empty());
}

#[tokio::test]
async fn test_graphql_errors_are_failures() {
    let state = Arc::new(MockServer::default());
    state.respond(
        StatusCode::OK,
        json!({ "data": null, "errors": [{ "message": "Cannot query field" }] }),
    );
    let addr = start_server(state).await;
    let client = client_for(addr);

    let err = client.get_processes().await.unwrap_err();
    match err {
        GraphQlError::QueryFailed { messages } => assert!(messages.contains("Cannot query field")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_a_failed_cycle() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let mut body = MemoryTableBody::default();

    let outcome = poll_cycle(&client, &mut body, &poll_config(500)).await;
    assert_eq!(outcome, CycleOutcome::Failed);
    assert_eq!(body.renders(), 0);
}

#[tokio::test]
async fn test_poll_loop_keeps_polling_until_shutdown() {
    let state = Arc::new(MockServer::default());
    state.respond(StatusCode::BAD_GATEWAY, json!({}));
    state.respond(
        StatusCode::OK,
        processes_response(&[process_json("sys-apps/portage-3.0.51", "unpack")]),
    );
    let addr = start_server(state.clone()).await;
    let client = client_for(addr);
    let mut body = MemoryTableBody::default();
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(400)).await;
        let _ = stop_tx.send(());
    });

    let cycles = run_poll_loop(&client, &mut body, &poll_config(50), async {
        let _ = stop_rx.await;
    })
    .await;

    assert!(cycles >= 3, "only {} cycles ran", cycles);
    assert!(state.requests().len() as u64 >= cycles);
    // Failure, then the process, then empty lists
    assert!(body.renders() >= 2);
    assert!(body.rows().is_empty());
}

#[tokio::test]
async fn test_add_process_sends_mutation_variables() {
    let state = Arc::new(MockServer::default());
    state.respond(
        StatusCode::OK,
        json!({ "data": { "addBuildProcess": { "message": null } } }),
    );
    let addr = start_server(state.clone()).await;
    let client = client_for(addr);

    let process = BuildProcess {
        machine: "babette".to_string(),
        id: BuildId::Text("1031".to_string()),
        build_host: "jenkins".to_string(),
        package: "sys-apps/portage-3.0.51".to_string(),
        phase: "compile".to_string(),
        start_time: chrono::DateTime::parse_from_rfc3339("2023-11-11T12:20:52+00:00").unwrap(),
    };
    client.add_process(&process).await.unwrap();

    let requests = state.requests();
    let (_, body) = &requests[0];
    assert!(body["query"].as_str().unwrap().contains("addBuildProcess"));
    assert_eq!(body["variables"]["process"]["machine"], "babette");
    assert_eq!(body["variables"]["process"]["buildHost"], "jenkins");
    assert_eq!(body["variables"]["process"]["id"], "1031");
}
