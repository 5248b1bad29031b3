//! Tests for server assembly.

use std::net::SocketAddr;

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::{fixture, rstest};

use super::*;
use contacts::domain::TRACE_ID_HEADER;

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(health_state: web::Data<HealthState>, bind_addr: SocketAddr) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), ServerConfig::new(bind_addr))
        .expect("server should bind");

    assert!(
        health_state.is_ready(),
        "server creation should mark readiness"
    );
}

#[rstest]
#[actix_web::test]
async fn app_serves_pages_api_and_probes(health_state: web::Data<HealthState>) {
    health_state.mark_ready();
    let app = test::init_service(build_app(AppDependencies {
        health_state,
        http_state: build_http_state(None),
    }))
    .await;

    for uri in ["/", "/api/contacts", "/health/ready", "/api-docs/openapi.json"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
        assert!(res.headers().contains_key(TRACE_ID_HEADER), "GET {uri}");
    }
}
