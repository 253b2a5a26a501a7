//! Websocket observer sessions: one actor per viewer, fed by the gateway.

use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{info, warn};

use crate::api::AppState;
use crate::gateway::ObserverId;
use crate::models::MatchEvent;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    state: AppState,
) -> Result<HttpResponse, Error> {
    ws::start(ViewerSession::new(state), &req, stream)
}

pub struct ViewerSession {
    state: AppState,
    observer_id: Option<ObserverId>,
    last_heartbeat: Instant,
}

impl ViewerSession {
    fn new(state: AppState) -> Self {
        Self {
            state,
            observer_id: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!("Viewer {:?} heartbeat timed out", actor.observer_id);
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }
}

impl Actor for ViewerSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let recipient = ctx.address().recipient::<MatchEvent>();
        match self.state.write() {
            Ok(mut g) => {
                self.observer_id = Some(g.subscribe(recipient));
            }
            Err(_) => {
                warn!("Viewer rejected: lock error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
                return;
            }
        }
        info!("Viewer {:?} connected", self.observer_id);
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(id) = self.observer_id.take() {
            if let Ok(mut g) = self.state.write() {
                g.unsubscribe(id);
            }
            info!("Viewer {} disconnected", id);
        }
    }
}

impl Handler<MatchEvent> for ViewerSession {
    type Result = ();

    fn handle(&mut self, event: MatchEvent, ctx: &mut Self::Context) {
        match serde_json::to_string(&event) {
            Ok(payload) => ctx.text(payload),
            Err(e) => warn!("Failed to serialize {} event: {}", event.kind(), e),
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ViewerSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            // Viewers are read-only; any other frame just counts as activity.
            Ok(_) => {
                self.last_heartbeat = Instant::now();
            }
            Err(e) => {
                warn!("Viewer {:?} protocol error: {}", self.observer_id, e);
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}
