mod dto;
pub mod error;
pub mod handlers;
pub mod repo;
pub mod service;
pub mod store;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
