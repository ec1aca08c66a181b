//! In-process stub of the storage backend, serving just enough of the
//! contract for the gateway tests: cookie auth, folder/file CRUD, multipart
//! uploads, download bytes, and per-endpoint call counters.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use axum::Router;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use serde_json::json;

pub const TOKEN: &str = "tok-tester";
pub const PASSWORD: &str = "secret";

#[derive(Default)]
pub struct StubState {
    pub folders: Vec<FolderRec>,
    pub next_id: i64,
    pub delete_folder_calls: usize,
    pub delete_file_calls: usize,
    pub list_files_calls: usize,
}

pub struct FolderRec {
    pub id: i64,
    pub path: String,
    pub files: Vec<FileRec>,
}

pub struct FileRec {
    pub filename: String,
    pub revision: i64,
    pub bytes: Vec<u8>,
}

type Shared = Arc<Mutex<StubState>>;

pub struct StubServer {
    pub base_url: String,
    pub state: Shared,
}

impl StubServer {
    #[allow(dead_code)]
    pub fn delete_file_calls(&self) -> usize {
        self.state.lock().unwrap().delete_file_calls
    }

    #[allow(dead_code)]
    pub fn delete_folder_calls(&self) -> usize {
        self.state.lock().unwrap().delete_folder_calls
    }

    #[allow(dead_code)]
    pub fn list_files_calls(&self) -> usize {
        self.state.lock().unwrap().list_files_calls
    }
}

pub fn spawn_stub() -> StubServer {
    let state: Shared = Arc::new(Mutex::new(StubState {
        next_id: 1,
        ..StubState::default()
    }));
    let app_state = state.clone();

    let (tx, rx) = mpsc::channel::<SocketAddr>();
    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let app = router(app_state);
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub");
            let addr = listener.local_addr().expect("stub addr");
            tx.send(addr).expect("send stub addr");
            axum::serve(listener, app).await.expect("serve stub");
        });
    });

    let addr = rx.recv().expect("receive stub addr");
    StubServer {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/login/", post(login))
        .route("/register/", post(register))
        .route("/logout/", post(logout))
        .route("/home/", get(home))
        .route("/folders/", get(list_folders))
        .route("/create_folder/", post(create_folder))
        .route("/delete_folder/:path", delete(delete_folder))
        .route("/folders/:path/files/", get(list_files))
        .route("/upload/:path", post(upload))
        .route("/delete_file/:path/:filename", delete(delete_file))
        .route("/folders/:path/:filename", get(probe))
        .route("/download/:path/:filename", get(download))
        .with_state(state)
}

fn authed(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(|cookies| {
            cookies
                .split(';')
                .any(|part| part.trim() == format!("access_token={TOKEN}"))
        })
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Session expired, log in again" })),
    )
        .into_response()
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": format!("{what} not found") })),
    )
        .into_response()
}

fn session_response(message: &str) -> Response {
    let mut resp = Json(json!({ "message": message })).into_response();
    resp.headers_mut().insert(
        header::SET_COOKIE,
        format!("access_token={TOKEN}; HttpOnly; SameSite=Lax")
            .parse()
            .unwrap(),
    );
    resp
}

async fn login(Json(body): Json<serde_json::Value>) -> Response {
    if body.get("password").and_then(|v| v.as_str()) == Some(PASSWORD) {
        session_response("Login successful")
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid credentials" })),
        )
            .into_response()
    }
}

async fn register(Json(_body): Json<serde_json::Value>) -> Response {
    session_response("User created successfully")
}

async fn logout() -> Response {
    Json(json!({ "message": "Logout successful" })).into_response()
}

async fn home(headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    Json(json!({ "message": "Welcome, tester!" })).into_response()
}

async fn list_folders(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let state = state.lock().unwrap();
    let folders: Vec<_> = state
        .folders
        .iter()
        .map(|f| json!({ "id": f.id, "path": f.path }))
        .collect();
    Json(json!(folders)).into_response()
}

async fn create_folder(
    State(state): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    let mut folder_path = String::new();
    let mut files: Vec<FileRec> = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("folder_path") => {
                folder_path = field.text().await.expect("folder_path text");
            }
            Some("files") => {
                let filename = field.file_name().unwrap_or("unnamed").to_string();
                let bytes = field.bytes().await.expect("file bytes").to_vec();
                files.push(FileRec {
                    filename,
                    revision: 0,
                    bytes,
                });
            }
            _ => {}
        }
    }

    if folder_path.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "folder_path is required" })),
        )
            .into_response();
    }

    let mut state = state.lock().unwrap();
    let id = state.next_id;
    state.next_id += 1;
    state.folders.push(FolderRec {
        id,
        path: folder_path,
        files,
    });
    Json(json!({ "message": "Folder created successfully!" })).into_response()
}

async fn delete_folder(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(path): Path<String>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let mut state = state.lock().unwrap();
    state.delete_folder_calls += 1;
    let before = state.folders.len();
    state.folders.retain(|f| f.path != path);
    if state.folders.len() == before {
        return not_found("Folder");
    }
    Json(json!({ "message": "Folder deleted" })).into_response()
}

async fn list_files(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(path): Path<String>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    if path == "restricted" {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "detail": "Access denied" })),
        )
            .into_response();
    }
    let mut state = state.lock().unwrap();
    state.list_files_calls += 1;
    let Some(folder) = state.folders.iter().find(|f| f.path == path) else {
        return not_found("Folder");
    };
    let files: Vec<_> = folder
        .files
        .iter()
        .map(|f| json!({ "filename": f.filename, "revision": f.revision }))
        .collect();
    Json(json!(files)).into_response()
}

async fn upload(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(path): Path<String>,
    mut multipart: Multipart,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }

    let mut uploaded: Option<FileRec> = None;
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("unnamed").to_string();
            let bytes = field.bytes().await.expect("file bytes").to_vec();
            uploaded = Some(FileRec {
                filename,
                revision: 0,
                bytes,
            });
        }
    }
    let Some(file) = uploaded else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "file part missing" })),
        )
            .into_response();
    };
    if file.filename == "fail.txt" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "upload rejected" })),
        )
            .into_response();
    }

    let mut state = state.lock().unwrap();
    let Some(folder) = state.folders.iter_mut().find(|f| f.path == path) else {
        return not_found("Folder");
    };
    folder.files.push(file);
    Json(json!({ "message": "File uploaded" })).into_response()
}

async fn delete_file(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((path, filename)): Path<(String, String)>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let mut state = state.lock().unwrap();
    state.delete_file_calls += 1;
    let Some(folder) = state.folders.iter_mut().find(|f| f.path == path) else {
        return not_found("Folder");
    };
    let before = folder.files.len();
    folder.files.retain(|f| f.filename != filename);
    if folder.files.len() == before {
        return not_found("File");
    }
    Json(json!({ "message": "File deleted" })).into_response()
}

async fn probe(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((path, filename)): Path<(String, String)>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let state = state.lock().unwrap();
    let exists = state
        .folders
        .iter()
        .any(|f| f.path == path && f.files.iter().any(|file| file.filename == filename));
    if exists {
        StatusCode::OK.into_response()
    } else {
        not_found("File")
    }
}

async fn download(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((path, filename)): Path<(String, String)>,
) -> Response {
    if !authed(&headers) {
        return unauthorized();
    }
    let state = state.lock().unwrap();
    let bytes = state
        .folders
        .iter()
        .find(|f| f.path == path)
        .and_then(|f| f.files.iter().find(|file| file.filename == filename))
        .map(|file| file.bytes.clone());
    match bytes {
        Some(bytes) => bytes.into_response(),
        None => not_found("File"),
    }
}
