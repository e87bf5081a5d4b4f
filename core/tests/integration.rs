//! Fetch the user list from a live mock server over real HTTP.
//!
//! # Design
//! Starts the mock server on a random port and executes the core's requests
//! with ureq, so request building, response parsing and the store's state
//! transitions are checked end-to-end.

use users_core::{
    ApiError, DashboardBody, DashboardView, FetchOutcome, HttpMethod, HttpRequest, HttpResponse, UserForm,
    UserStore, UsersClient, FETCH_FAILED_MESSAGE,
};
use users_core::form::FormField;

/// Execute an `HttpRequest` with ureq, returning 4xx/5xx as data.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => {
            let mut builder = agent.get(&req.path);
            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }
            builder.call()
        }
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Ok(HttpResponse::new(status, body))
}

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn fetch_then_mutate_locally() {
    let base = spawn_server();
    let mut store = UserStore::new(UsersClient::new(&base));

    // Step 1: fetch the seeded list.
    let req = store.begin_fetch();
    assert!(store.state().loading);
    let outcome = store.complete_fetch(execute(req));
    assert_eq!(outcome, FetchOutcome::Succeeded(10));
    let state = store.state();
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.users[0].name, "Leanne Graham");
    assert_eq!(state.custom_count(), 0);

    // Step 2: create a user through the form; it lands first with id 1.
    let mut form = UserForm::create();
    form.set(FormField::Name, "Grace Hopper");
    form.set(FormField::Email, "grace@navy.mil");
    form.set(FormField::Phone, "555-1906");
    form.set(FormField::CompanyName, "US Navy");
    store.dispatch(form.submit().unwrap());
    let state = store.state();
    assert_eq!(state.total(), 11);
    assert_eq!(state.users[0].name, "Grace Hopper");
    assert_eq!(state.users[0].id, 1);

    // Step 3: delete id 1 removes both the new record and the fetched one.
    store.delete(1);
    assert_eq!(store.state().total(), 9);
    assert!(store.state().find(1).is_none());

    // Step 4: refresh restores the server list.
    let req = store.begin_fetch();
    store.complete_fetch(execute(req));
    assert_eq!(store.state().total(), 10);
    assert!(matches!(
        DashboardView::from_state(store.state()).body,
        DashboardBody::Table(_)
    ));
}

#[test]
fn wrong_path_collapses_to_fetch_failed() {
    let base = spawn_server();
    let mut store = UserStore::new(UsersClient::new(&format!("{base}/api")));

    let req = store.begin_fetch();
    let response = execute(req);
    assert_eq!(response.as_ref().map(|r| r.status), Ok(404));

    let outcome = store.complete_fetch(response);
    assert_eq!(outcome, FetchOutcome::Failed(FETCH_FAILED_MESSAGE.to_string()));
    assert_eq!(store.state().error.as_deref(), Some(FETCH_FAILED_MESSAGE));
    assert!(store.state().users.is_empty());
}

#[test]
fn unreachable_server_collapses_to_fetch_failed() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let mut store = UserStore::new(UsersClient::new(&format!("http://{addr}")));

    let req = store.begin_fetch();
    let response = execute(req);
    assert!(matches!(response, Err(ApiError::Transport(_))));

    store.complete_fetch(response);
    assert!(!store.state().loading);
    assert_eq!(store.state().error.as_deref(), Some(FETCH_FAILED_MESSAGE));
}
