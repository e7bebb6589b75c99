//! Mock Stellar Burgers API server for testing
//!
//! An in-process HTTP/1.1 server that keeps users, tokens and orders in
//! memory and answers with the same statuses and messages as the real
//! service, so the client layer and the scenarios can run offline:
//! - POST /api/auth/register, POST /api/auth/login
//! - GET | PATCH | DELETE /api/auth/user
//! - GET /api/ingredients
//! - POST | GET /api/orders
//!
//! Every response closes the connection.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde_json::{json, Value as JsonValue};
use uuid::Uuid;

pub const MSG_REQUIRED_FIELDS: &str = "Email, password and name are required fields";
pub const MSG_USER_EXISTS: &str = "User already exists";
pub const MSG_EMAIL_TAKEN: &str = "User with such email already exists";
pub const MSG_BAD_CREDENTIALS: &str = "email or password are incorrect";
pub const MSG_UNAUTHORISED: &str = "You should be authorised";
pub const MSG_INGREDIENTS_REQUIRED: &str = "Ingredient ids must be provided";
pub const MSG_USER_REMOVED: &str = "User successfully removed";

const API_PREFIX: &str = "/api/";

/// Mock Stellar Burgers server for testing
pub struct MockStellarBurgersServer {
    port: u16,
    running: Arc<AtomicBool>,
    state: Arc<Mutex<ServerState>>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Configuration for the mock server
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Number of ingredients in the catalog (capped at the built-in list)
    pub num_ingredients: usize,
    /// Answer the catalog endpoint with HTTP 500
    pub fail_catalog: bool,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            num_ingredients: CATALOG.len(),
            fail_catalog: false,
            delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct Account {
    email: String,
    password: String,
    name: String,
}

#[derive(Debug, Clone)]
struct StoredOrder {
    id: String,
    number: u64,
    ingredients: Vec<String>,
    owner: Option<Uuid>,
    created_at: String,
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    id: String,
    name: &'static str,
    kind: &'static str,
    price: u32,
}

#[derive(Debug)]
struct ServerState {
    config: MockConfig,
    accounts: HashMap<Uuid, Account>,
    tokens: HashMap<String, Uuid>,
    orders: Vec<StoredOrder>,
    next_order_number: u64,
    catalog: Vec<CatalogEntry>,
}

/// Built-in ingredient list: name, type, price
const CATALOG: &[(&str, &str, u32)] = &[
    ("Краторная булка N-200i", "bun", 1255),
    ("Флюоресцентная булка R2-D3", "bun", 988),
    ("Биокотлета из марсианской Магнолии", "main", 424),
    ("Филе Люминесцентного тетраодонтимформа", "main", 988),
    ("Говяжий метеорит (отбивная)", "main", 3000),
    ("Мясо бессмертных моллюсков Protostomia", "main", 1337),
    ("Хрустящие минеральные кольца", "main", 300),
    ("Плоды Фалленианского дерева", "main", 874),
    ("Кристаллы марсианских альфа-сахаридов", "main", 762),
    ("Мини-салат Экзо-Плантаго", "main", 4400),
    ("Сыр с астероидной плесенью", "main", 4142),
    ("Соус Spicy-X", "sauce", 90),
    ("Соус фирменный Space Sauce", "sauce", 80),
    ("Соус традиционный галактический", "sauce", 15),
    ("Соус с шипами Антарианского плоскоходца", "sauce", 88),
];

impl ServerState {
    fn new(config: MockConfig) -> Self {
        let catalog = CATALOG
            .iter()
            .take(config.num_ingredients)
            .enumerate()
            .map(|(i, &(name, kind, price))| CatalogEntry {
                id: format!("61c0c5a71d1f82001bdaaa{:02x}", 0x6c + i),
                name,
                kind,
                price,
            })
            .collect();

        Self {
            config,
            accounts: HashMap::new(),
            tokens: HashMap::new(),
            orders: Vec::new(),
            next_order_number: 1,
            catalog,
        }
    }

    fn account_by_email(&self, email: &str) -> Option<Uuid> {
        self.accounts
            .iter()
            .find(|(_, account)| account.email == email)
            .map(|(id, _)| *id)
    }

    fn authorised(&self, request: &HttpRequest) -> Option<Uuid> {
        request
            .header("authorization")
            .and_then(|token| self.tokens.get(token))
            .filter(|id| self.accounts.contains_key(id))
            .copied()
    }

    fn issue_tokens(&mut self, account_id: Uuid) -> (String, String) {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(
            json!({ "id": account_id.simple().to_string(), "iat": Utc::now().timestamp() })
                .to_string(),
        );
        let signature = URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes());
        let access_token = format!("Bearer {}.{}.{}", header, payload, signature);
        let refresh_token = Uuid::new_v4().simple().to_string();

        self.tokens.insert(access_token.clone(), account_id);
        (access_token, refresh_token)
    }
}

impl MockStellarBurgersServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let actual_port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let state = Arc::new(Mutex::new(ServerState::new(config)));

        // Non-blocking accept so stop() is observed
        listener.set_nonblocking(true)?;

        let running_clone = Arc::clone(&running);
        let state_clone = Arc::clone(&state);
        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let state = Arc::clone(&state_clone);
                        thread::spawn(move || handle_connection(stream, &state));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port: actual_port,
            running,
            state,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Service root; the API itself lives under `/api/`
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/", self.port)
    }

    /// Number of registered accounts
    pub fn user_count(&self) -> usize {
        lock(&self.state).accounts.len()
    }

    /// Number of orders placed so far
    pub fn order_count(&self) -> usize {
        lock(&self.state).orders.len()
    }

    /// Ids of the catalog, in catalog order
    pub fn catalog_ids(&self) -> Vec<String> {
        lock(&self.state)
            .catalog
            .iter()
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockStellarBurgersServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn lock(state: &Mutex<ServerState>) -> MutexGuard<'_, ServerState> {
    // A panicking handler thread must not take the whole server down
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// =============================================================================
// HTTP plumbing
// =============================================================================

#[derive(Debug)]
struct HttpRequest {
    method: String,
    path: String,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl HttpRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    fn json(&self) -> Option<JsonValue> {
        if self.body.is_empty() {
            Some(json!({}))
        } else {
            serde_json::from_slice(&self.body).ok()
        }
    }
}

struct HttpResponse {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl HttpResponse {
    fn json(status: u16, body: JsonValue) -> Self {
        Self {
            status,
            content_type: "application/json; charset=utf-8",
            body: body.to_string(),
        }
    }

    fn failure(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "success": false, "message": message }))
    }

    fn html(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: body.to_string(),
        }
    }
}

fn read_request(stream: &TcpStream) -> std::io::Result<HttpRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default();
    let path = target.split('?').next().unwrap_or(target).to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }

    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body)?;

    Ok(HttpRequest {
        method,
        path,
        headers,
        body,
    })
}

const INTERNAL_ERROR_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head>\
    <meta charset=\"utf-8\"><title>Error</title></head>\
    <body><pre>Internal Server Error</pre></body></html>";

fn handle_connection(mut stream: TcpStream, state: &Mutex<ServerState>) {
    let _ = stream.set_nonblocking(false);
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));

    let response = match read_request(&stream) {
        Ok(request) => {
            let delay_ms = lock(state).config.delay_ms;
            if delay_ms > 0 {
                thread::sleep(Duration::from_millis(delay_ms));
            }
            route(&request, &mut lock(state))
        }
        Err(_) => HttpResponse::failure(400, "Invalid request"),
    };
    send_response(&mut stream, &response);
}

fn send_response(stream: &mut TcpStream, response: &HttpResponse) {
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        status_text(response.status),
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(response.body.as_bytes());
    let _ = stream.flush();
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        202 => "Accepted",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

// =============================================================================
// Routes
// =============================================================================

fn route(request: &HttpRequest, state: &mut ServerState) -> HttpResponse {
    let Some(endpoint) = request.path.strip_prefix(API_PREFIX) else {
        return HttpResponse::failure(404, "Not found");
    };

    match (request.method.as_str(), endpoint.trim_end_matches('/')) {
        ("POST", "auth/register") => register(request, state),
        ("POST", "auth/login") => login(request, state),
        ("GET", "auth/user") => get_user(request, state),
        ("PATCH", "auth/user") => update_user(request, state),
        ("DELETE", "auth/user") => delete_user(request, state),
        ("GET", "ingredients") => ingredients(state),
        ("POST", "orders") => create_order(request, state),
        ("GET", "orders") => list_orders(request, state),
        (_, "auth/register" | "auth/login" | "auth/user" | "ingredients" | "orders") => {
            HttpResponse::failure(405, "Method not allowed")
        }
        _ => HttpResponse::failure(404, "Not found"),
    }
}

fn non_blank(body: &JsonValue, key: &str) -> Option<String> {
    body.get(key)
        .and_then(JsonValue::as_str)
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
}

fn user_json(account: &Account) -> JsonValue {
    json!({ "email": account.email, "name": account.name })
}

fn register(request: &HttpRequest, state: &mut ServerState) -> HttpResponse {
    let Some(body) = request.json() else {
        return HttpResponse::failure(400, "Invalid JSON");
    };

    let (Some(email), Some(password), Some(name)) = (
        non_blank(&body, "email"),
        non_blank(&body, "password"),
        non_blank(&body, "name"),
    ) else {
        return HttpResponse::failure(403, MSG_REQUIRED_FIELDS);
    };

    let email = email.to_lowercase();
    if state.account_by_email(&email).is_some() {
        return HttpResponse::failure(403, MSG_USER_EXISTS);
    }

    let account = Account {
        email,
        password,
        name,
    };
    let user = user_json(&account);
    let account_id = Uuid::new_v4();
    state.accounts.insert(account_id, account);
    let (access_token, refresh_token) = state.issue_tokens(account_id);

    HttpResponse::json(
        200,
        json!({
            "success": true,
            "user": user,
            "accessToken": access_token,
            "refreshToken": refresh_token,
        }),
    )
}

fn login(request: &HttpRequest, state: &mut ServerState) -> HttpResponse {
    let Some(body) = request.json() else {
        return HttpResponse::failure(400, "Invalid JSON");
    };

    let email = non_blank(&body, "email").map(|e| e.to_lowercase());
    let password = non_blank(&body, "password");

    let found = match (email, password) {
        (Some(email), Some(password)) => state
            .account_by_email(&email)
            .filter(|id| state.accounts[id].password == password),
        _ => None,
    };
    let Some(account_id) = found else {
        return HttpResponse::failure(401, MSG_BAD_CREDENTIALS);
    };

    let user = user_json(&state.accounts[&account_id]);
    let (access_token, refresh_token) = state.issue_tokens(account_id);

    HttpResponse::json(
        200,
        json!({
            "success": true,
            "accessToken": access_token,
            "refreshToken": refresh_token,
            "user": user,
        }),
    )
}

fn get_user(request: &HttpRequest, state: &ServerState) -> HttpResponse {
    match state.authorised(request) {
        Some(id) => HttpResponse::json(
            200,
            json!({ "success": true, "user": user_json(&state.accounts[&id]) }),
        ),
        None => HttpResponse::failure(401, MSG_UNAUTHORISED),
    }
}

fn update_user(request: &HttpRequest, state: &mut ServerState) -> HttpResponse {
    let Some(account_id) = state.authorised(request) else {
        return HttpResponse::failure(401, MSG_UNAUTHORISED);
    };
    let Some(body) = request.json() else {
        return HttpResponse::failure(400, "Invalid JSON");
    };

    let new_email = non_blank(&body, "email").map(|e| e.to_lowercase());
    if let Some(email) = &new_email {
        if state
            .account_by_email(email)
            .is_some_and(|owner| owner != account_id)
        {
            return HttpResponse::failure(403, MSG_EMAIL_TAKEN);
        }
    }

    let Some(account) = state.accounts.get_mut(&account_id) else {
        return HttpResponse::failure(401, MSG_UNAUTHORISED);
    };
    if let Some(email) = new_email {
        account.email = email;
    }
    if let Some(name) = non_blank(&body, "name") {
        account.name = name;
    }
    if let Some(password) = non_blank(&body, "password") {
        account.password = password;
    }

    HttpResponse::json(200, json!({ "success": true, "user": user_json(account) }))
}

fn delete_user(request: &HttpRequest, state: &mut ServerState) -> HttpResponse {
    let Some(account_id) = state.authorised(request) else {
        return HttpResponse::failure(401, MSG_UNAUTHORISED);
    };

    state.accounts.remove(&account_id);
    state.tokens.retain(|_, owner| *owner != account_id);

    HttpResponse::json(202, json!({ "success": true, "message": MSG_USER_REMOVED }))
}

fn ingredients(state: &ServerState) -> HttpResponse {
    if state.config.fail_catalog {
        return HttpResponse::failure(500, "Catalog unavailable");
    }

    let data: Vec<JsonValue> = state
        .catalog
        .iter()
        .map(|entry| {
            json!({
                "_id": entry.id,
                "name": entry.name,
                "type": entry.kind,
                "price": entry.price,
                "__v": 0,
            })
        })
        .collect();

    HttpResponse::json(200, json!({ "success": true, "data": data }))
}

fn create_order(request: &HttpRequest, state: &mut ServerState) -> HttpResponse {
    let Some(body) = request.json() else {
        return HttpResponse::failure(400, "Invalid JSON");
    };

    let ids: Vec<String> = body
        .get("ingredients")
        .and_then(JsonValue::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(JsonValue::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if ids.is_empty() {
        return HttpResponse::failure(400, MSG_INGREDIENTS_REQUIRED);
    }

    let mut names = Vec::with_capacity(ids.len());
    for id in &ids {
        match state.catalog.iter().find(|entry| &entry.id == id) {
            Some(entry) => names.push(entry.name),
            // The real service fails the same way: an HTML error page
            None => return HttpResponse::html(500, INTERNAL_ERROR_PAGE),
        }
    }

    let owner = state.authorised(request);
    let order = StoredOrder {
        id: Uuid::new_v4().simple().to_string(),
        number: state.next_order_number,
        ingredients: ids,
        owner,
        created_at: Utc::now().to_rfc3339(),
    };
    state.next_order_number += 1;

    let burger_name = format!("{} бургер", names.join(" "));
    let order_json = match owner.and_then(|id| state.accounts.get(&id)) {
        Some(account) => json!({
            "_id": order.id,
            "ingredients": order.ingredients,
            "owner": user_json(account),
            "status": "done",
            "name": burger_name,
            "number": order.number,
            "createdAt": order.created_at,
            "updatedAt": order.created_at,
        }),
        None => json!({ "number": order.number }),
    };
    state.orders.push(order);

    HttpResponse::json(
        200,
        json!({ "success": true, "name": burger_name, "order": order_json }),
    )
}

fn list_orders(request: &HttpRequest, state: &ServerState) -> HttpResponse {
    let Some(account_id) = state.authorised(request) else {
        return HttpResponse::failure(401, MSG_UNAUTHORISED);
    };

    let orders: Vec<JsonValue> = state
        .orders
        .iter()
        .filter(|order| order.owner == Some(account_id))
        .map(|order| {
            json!({
                "_id": order.id,
                "ingredients": order.ingredients,
                "status": "done",
                "number": order.number,
                "createdAt": order.created_at,
                "updatedAt": order.created_at,
            })
        })
        .collect();

    HttpResponse::json(
        200,
        json!({
            "success": true,
            "orders": orders,
            "total": state.orders.len(),
            "totalToday": state.orders.len(),
        }),
    )
}
