//! Dispatch Module Tests
//!
//! Validates target addressing and the verbatim status/body contract
//! against a throwaway in-process backend.
//!
//! ## Test Scopes
//! - **Addressing**: Operation segment and partition kind/key parameters in
//!   the backend URL.
//! - **Passthrough**: Success and non-success statuses both come back raw.
//! - **Transport faults**: Unreachable partitions surface as
//!   `PartitionUnreachable`, never as a status code.

#[cfg(test)]
mod tests {
    use crate::dispatch::{RequestDispatcher, RouteTarget};
    use crate::error::GatewayError;
    use crate::topology::{Partition, PartitionKind};
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use std::collections::HashMap;
    use std::net::SocketAddr;

    async fn serve(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    // ============================================================
    // ROUTE TARGETS
    // ============================================================

    #[test]
    fn test_target_for_partition_uses_low_key() {
        let partition = Partition {
            id: "p1".to_string(),
            kind: PartitionKind::Int64Range,
            low_key: 100,
            high_key: 199,
        };

        let target = RouteTarget::for_partition(&partition);
        assert_eq!(target.key, 100);
        assert_eq!(target.kind, PartitionKind::Int64Range);
    }

    // ============================================================
    // ADDRESSING
    // ============================================================

    #[tokio::test]
    async fn test_dispatch_addresses_partition_by_kind_and_key() {
        // Echo the query parameters back so the test can see what the
        // backend was asked.
        let app = Router::new().route(
            "/GetGame",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                format!(
                    "{}|{}|{}",
                    q.get("roomid").cloned().unwrap_or_default(),
                    q.get("partition_kind").cloned().unwrap_or_default(),
                    q.get("partition_key").cloned().unwrap_or_default()
                )
            }),
        );
        let addr = serve(app).await;

        let dispatcher = RequestDispatcher::new(&format!("http://{}", addr));
        let response = dispatcher
            .dispatch(
                &RouteTarget::for_key(42),
                "GetGame",
                &[("roomid", "abc123".to_string())],
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, "abc123|Int64Range|42");
    }

    // ============================================================
    // PASSTHROUGH
    // ============================================================

    #[tokio::test]
    async fn test_non_success_status_is_returned_not_an_error() {
        let app = Router::new().route(
            "/EndGame",
            get(|| async { (StatusCode::NOT_FOUND, "no such room") }),
        );
        let addr = serve(app).await;

        let dispatcher = RequestDispatcher::new(&format!("http://{}", addr));
        let response = dispatcher
            .dispatch(&RouteTarget::for_key(7), "EndGame", &[])
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, "no such room");
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_body_is_verbatim() {
        let app = Router::new().route(
            "/GetRooms",
            get(|| async { r#"[{"foo":{"room_type":"Office","num_players":2}}]"# }),
        );
        let addr = serve(app).await;

        let dispatcher = RequestDispatcher::new(&format!("http://{}", addr));
        let response = dispatcher
            .dispatch(&RouteTarget::for_key(0), "GetRooms", &[])
            .await
            .unwrap();

        assert_eq!(
            response.body,
            r#"[{"foo":{"room_type":"Office","num_players":2}}]"#
        );
    }

    // ============================================================
    // TRANSPORT FAULTS
    // ============================================================

    #[tokio::test]
    async fn test_unreachable_partition() {
        let dispatcher = RequestDispatcher::new("http://127.0.0.1:1");
        let err = dispatcher
            .dispatch(&RouteTarget::for_key(42), "GetGame", &[])
            .await
            .unwrap_err();

        match err {
            GatewayError::PartitionUnreachable { target, .. } => {
                assert_eq!(target, "Int64Range/42");
            }
            other => panic!("expected PartitionUnreachable, got {:?}", other),
        }
    }
}
