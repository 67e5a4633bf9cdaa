//! Request routing
//!
//! Maps a parse attempt — a request or a parse failure — to the handler
//! that produces its response.

use anyhow::Result;

use crate::board::state::BoardState;
use crate::http::parser::ParseError;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// Routes parsed requests to handlers.
///
/// Purely a routing table: nothing persists across requests beyond the
/// shared board handle.
#[derive(Debug, Clone)]
pub struct Router {
    state: BoardState,
}

impl Router {
    /// Create a router over the shared board state.
    pub fn new(state: BoardState) -> Self {
        Self { state }
    }

    /// Produce the response for one parse attempt.
    ///
    /// Every `ParseError` variant maps to the same 400 — the variants exist
    /// for logs and tests, not for the wire.
    pub async fn route(&self, parsed: Result<Request, ParseError>) -> Result<Response> {
        let request = match parsed {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = ?e, "request failed to parse");
                return Ok(Response::bad_request());
            }
        };

        if request.method == "GET" && request.path == "/paint_board" {
            let response = self.get_paint_board().await?;
            tracing::debug!(
                method = %request.method,
                path = %request.path,
                status = response.status.as_u16(),
                "request routed"
            );
            return Ok(response);
        }

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            "no route matched"
        );
        Ok(Response::not_found())
    }

    /// Handler for `GET /paint_board`: the board serialized as JSON.
    async fn get_paint_board(&self) -> Result<Response> {
        let board = self.state.snapshot().await;
        let body = serde_json::to_string(&board)?;

        Ok(ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/json")
            .body(body)
            .build())
    }
}
