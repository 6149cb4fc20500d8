use super::aggregator::FanOutAggregator;
use super::protocol::{
    OP_END_GAME, OP_GET_GAME, OP_UPDATE_GAME, PARAM_PLAYER_DATA, PARAM_PLAYER_ID, PARAM_ROOM_ID,
    PlayerState, valid_room_id,
};
use super::translate;
use crate::dispatch::{RequestDispatcher, RouteTarget};
use crate::routing::PartitionScheme;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Builds the client-facing HTTP surface with its component extensions.
pub fn router(
    scheme: Arc<PartitionScheme>,
    dispatcher: Arc<RequestDispatcher>,
    aggregator: Arc<FanOutAggregator>,
) -> Router {
    Router::new()
        .route("/api/rooms", get(handle_get_rooms))
        .route("/api/game", get(handle_get_game))
        .route("/api/game/update", get(handle_update_game))
        .route("/api/game/end", get(handle_end_game))
        .layer(Extension(scheme))
        .layer(Extension(dispatcher))
        .layer(Extension(aggregator))
}

#[derive(Deserialize)]
pub struct GetGameParams {
    pub roomid: String,
}

#[derive(Deserialize)]
pub struct UpdateGameParams {
    pub playerid: String,
    pub roomid: String,
    /// Serialized `PlayerState`, exactly as the browser client sends it.
    pub player: String,
}

#[derive(Deserialize)]
pub struct EndGameParams {
    pub playerid: String,
    pub roomid: String,
}

pub async fn handle_get_rooms(
    Extension(aggregator): Extension<Arc<FanOutAggregator>>,
) -> Response {
    match aggregator.list_rooms().await {
        Ok(rooms) => (StatusCode::OK, Json(rooms)).into_response(),
        Err(err) => translate::failure(err),
    }
}

pub async fn handle_get_game(
    Query(params): Query<GetGameParams>,
    Extension(scheme): Extension<Arc<PartitionScheme>>,
    Extension(dispatcher): Extension<Arc<RequestDispatcher>>,
) -> Response {
    let Some(target) = resolve_target(&scheme, &params.roomid) else {
        return invalid_room_id();
    };

    let result = dispatcher
        .dispatch(
            &target,
            OP_GET_GAME,
            &[(PARAM_ROOM_ID, params.roomid.clone())],
        )
        .await;
    translate::keyed_response(result)
}

pub async fn handle_update_game(
    Query(params): Query<UpdateGameParams>,
    Extension(scheme): Extension<Arc<PartitionScheme>>,
    Extension(dispatcher): Extension<Arc<RequestDispatcher>>,
) -> Response {
    let Some(target) = resolve_target(&scheme, &params.roomid) else {
        return invalid_room_id();
    };

    // Validate the payload shape before it goes anywhere near the backend.
    let player: PlayerState = match serde_json::from_str(&params.player) {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("Rejected malformed player payload: {}", e);
            return (StatusCode::BAD_REQUEST, "Invalid player payload").into_response();
        }
    };

    let player_data = match serde_json::to_string(&player) {
        Ok(s) => s,
        Err(e) => return translate::failure(crate::error::GatewayError::unexpected(e)),
    };

    let result = dispatcher
        .dispatch(
            &target,
            OP_UPDATE_GAME,
            &[
                (PARAM_ROOM_ID, params.roomid.clone()),
                (PARAM_PLAYER_ID, params.playerid.clone()),
                (PARAM_PLAYER_DATA, player_data),
            ],
        )
        .await;
    translate::keyed_response(result)
}

pub async fn handle_end_game(
    Query(params): Query<EndGameParams>,
    Extension(scheme): Extension<Arc<PartitionScheme>>,
    Extension(dispatcher): Extension<Arc<RequestDispatcher>>,
) -> Response {
    let Some(target) = resolve_target(&scheme, &params.roomid) else {
        return invalid_room_id();
    };

    let result = dispatcher
        .dispatch(
            &target,
            OP_END_GAME,
            &[
                (PARAM_ROOM_ID, params.roomid.clone()),
                (PARAM_PLAYER_ID, params.playerid.clone()),
            ],
        )
        .await;
    translate::keyed_response(result)
}

/// Identifier check happens here, upstream of the resolver, so resolution
/// itself stays total.
fn resolve_target(scheme: &PartitionScheme, room_id: &str) -> Option<RouteTarget> {
    if !valid_room_id(room_id) {
        return None;
    }
    Some(RouteTarget::for_key(scheme.resolve(room_id)))
}

fn invalid_room_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        "Invalid room id: expected an alphanumeric string of at most 20 characters",
    )
        .into_response()
}
