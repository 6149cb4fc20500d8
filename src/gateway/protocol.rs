//! Gateway Backend Protocol
//!
//! Defines the operation names and query parameters the room store's API
//! understands, plus the DTOs the gateway validates before forwarding.
//!
//! The gateway never interprets backend payload semantics; these constants
//! only exist so every dispatch addresses the store the same way.

use serde::{Deserialize, Serialize};

// --- Backend operations ---

/// Per-partition room listing, fanned out across all partitions.
pub const OP_GET_ROOMS: &str = "GetRooms";
/// Full game state of one room.
pub const OP_GET_GAME: &str = "GetGame";
/// Position/appearance update for one player in one room.
pub const OP_UPDATE_GAME: &str = "UpdateGame";
/// Removes a player from a room, ending their game.
pub const OP_END_GAME: &str = "EndGame";

// --- Backend query parameters ---

pub const PARAM_ROOM_ID: &str = "roomid";
pub const PARAM_PLAYER_ID: &str = "playerid";
/// Serialized `PlayerState`, re-encoded by the gateway after validation.
pub const PARAM_PLAYER_DATA: &str = "playerdata";

// --- Identifier constraints ---

/// Room identifiers are opaque routing keys: alphanumeric, at most this
/// many characters. Enforced here, upstream of key resolution, so the
/// resolver itself needs no error path.
pub const MAX_ROOM_ID_LEN: usize = 20;

pub fn valid_room_id(room_id: &str) -> bool {
    !room_id.is_empty()
        && room_id.len() <= MAX_ROOM_ID_LEN
        && room_id.chars().all(|c| c.is_ascii_alphanumeric())
}

// --- Data Transfer Objects ---

/// The player-state payload carried by an update operation.
///
/// The gateway parses it from the client's serialized form before
/// forwarding — a malformed payload is rejected with 400 and never reaches
/// the backend — then re-encodes it for the dispatch. Field semantics
/// (positions as percentages, color as a hex string) belong to the backend
/// and the browser client; the gateway only checks the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub x_pos: f64,
    pub y_pos: f64,
    pub color: String,
}
