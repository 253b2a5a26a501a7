//! REST API: create a match, query it, record throws. Observers connect on /ws.

use crate::gateway::Gateway;
use crate::models::{GameMode, MatchError};
use crate::ws;
use actix_web::{
    get, post,
    web::{self, Bytes, Data},
    HttpResponse, Responder,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// Gateway shared across workers. The write lock serializes every command with its broadcast.
pub type AppState = Data<RwLock<Gateway>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    status: &'static str,
}

#[derive(Default, Deserialize)]
struct CreateMatchBody {
    /// Any JSON value; only the string "301" selects 301.
    #[serde(default)]
    mode: Option<serde_json::Value>,
    /// Names as sent; non-string entries are rendered as JSON text.
    #[serde(default)]
    players: Vec<serde_json::Value>,
}

impl CreateMatchBody {
    fn player_names(&self) -> Vec<String> {
        self.players
            .iter()
            .map(|p| match p {
                serde_json::Value::String(name) => name.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThrowBody {
    #[serde(default)]
    player_id: String,
    value: i32,
    mult: i32,
}

fn parse_mode(mode: Option<&serde_json::Value>) -> GameMode {
    mode.and_then(|m| m.as_str())
        .map(GameMode::from_label)
        .unwrap_or_default()
}

/// Parse a JSON body. An empty body yields `T::default()` when one is given.
fn parse_body<T: DeserializeOwned>(body: &Bytes, empty: Option<T>) -> Result<T, HttpResponse> {
    if body.iter().all(u8::is_ascii_whitespace) {
        if let Some(value) = empty {
            return Ok(value);
        }
    }
    serde_json::from_slice(body).map_err(|e| {
        log::warn!("Rejected request body: {}", e);
        let body = serde_json::json!({ "error": format!("invalid body: {}", e) });
        HttpResponse::BadRequest().json(body)
    })
}

fn error_response(e: &MatchError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        MatchError::NoActiveMatch => HttpResponse::NotFound().json(body),
        MatchError::UnknownPlayer(_) => HttpResponse::BadRequest().json(body),
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        status: "healthy",
    })
}

/// Create a new match, replacing the current one. An empty body means 501 with no players;
/// a body that is not valid JSON is rejected and the current match is kept.
#[post("/api/match")]
async fn api_create_match(state: AppState, body: Bytes) -> HttpResponse {
    let body: CreateMatchBody = match parse_body(&body, Some(CreateMatchBody::default())) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let mode = parse_mode(body.mode.as_ref());
    let players = body.player_names();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let game = g.create_match(mode, &players);
    HttpResponse::Ok().json(game)
}

/// Current match and the current leg's throws (404 if no match).
#[get("/api/match")]
async fn api_get_match(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.state() {
        Ok(session) => HttpResponse::Ok().json(session),
        Err(e) => error_response(&e),
    }
}

/// Record one dart for any player on the roster. The match is checked before the body.
#[post("/api/match/throw")]
async fn api_record_throw(state: AppState, body: Bytes) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if !g.has_match() {
        return error_response(&MatchError::NoActiveMatch);
    }
    let body: ThrowBody = match parse_body(&body, None) {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let result = match Uuid::parse_str(&body.player_id) {
        Ok(player_id) => g.record_throw(player_id, body.value, body.mult),
        Err(_) => Err(MatchError::UnknownPlayer(body.player_id.clone())),
    };
    match result {
        Ok(reply) => HttpResponse::Ok().json(reply),
        Err(e) => error_response(&e),
    }
}

/// Register all routes (REST, health and the websocket endpoint).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health))
        .route("/api/health", web::get().to(health))
        .service(api_create_match)
        .service(api_get_match)
        .service(api_record_throw)
        .route("/ws", web::get().to(ws::upgrade));
}
