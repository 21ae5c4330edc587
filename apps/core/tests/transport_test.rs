use tourneycat_core::config::Config;
use tourneycat_core::contract::CoreResponse;
use tourneycat_core::core_service::CatalogService;
use tourneycat_core::transport::{handle_json, ErrorCode, TransportResponse};

fn service() -> CatalogService {
    CatalogService::new(Config::default()).expect("service should initialize")
}

#[test]
fn answers_a_categories_request_with_an_ok_envelope() {
    let mut service = service();
    let raw = handle_json(&mut service, r#"{"kind":"categories"}"#);
    let response: TransportResponse = serde_json::from_str(&raw).unwrap();

    match response {
        TransportResponse::Ok {
            response: CoreResponse::Categories(payload),
        } => {
            assert_eq!(payload.categories.len(), 6);
        }
        other => panic!("expected ok categories envelope, got {other:?}"),
    }
}

#[test]
fn answers_a_search_request_with_a_plan() {
    let mut service = service();
    let raw = handle_json(
        &mut service,
        r#"{"kind":"search_input","payload":{"term":"PURGE"}}"#,
    );
    let response: TransportResponse = serde_json::from_str(&raw).unwrap();

    match response {
        TransportResponse::Ok {
            response: CoreResponse::Plan(plan),
        } => {
            assert_eq!(plan.blocks.len(), 1);
            assert_eq!(plan.blocks[0].title, "Moderation");
        }
        other => panic!("expected ok plan envelope, got {other:?}"),
    }
}

#[test]
fn rejects_undecodable_payloads_as_invalid_json() {
    let mut service = service();
    let raw = handle_json(&mut service, "this is not json");
    let response: TransportResponse = serde_json::from_str(&raw).unwrap();

    match response {
        TransportResponse::Err { error } => {
            assert_eq!(error.code, ErrorCode::InvalidJson);
        }
        other => panic!("expected error envelope, got {other:?}"),
    }
}

#[test]
fn rejects_well_formed_json_that_is_not_a_request() {
    let mut service = service();
    let raw = handle_json(&mut service, r#"{"kind":"launch","payload":{}}"#);
    let response: TransportResponse = serde_json::from_str(&raw).unwrap();

    match response {
        TransportResponse::Err { error } => {
            assert_eq!(error.code, ErrorCode::InvalidRequest);
            assert!(!error.message.is_empty());
        }
        other => panic!("expected error envelope, got {other:?}"),
    }
}
