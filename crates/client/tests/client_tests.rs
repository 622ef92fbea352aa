use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadboard_client::error::Error;
use leadboard_client::leads::{DateRange, LeadQuery, LeadStatus, NewLead};
use leadboard_client::reports::SeriesQuery;
use leadboard_client::sources::{Platform, SourceConfig, SourcePayload};
use leadboard_client::store::{MemoryStore, TokenStore};
use leadboard_client::ApiClient;

fn client(server: &MockServer, store: Arc<MemoryStore>) -> ApiClient {
    ApiClient::new(&server.uri(), store)
}

fn lead_json(id: &str, seq: u64, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "leadId": seq,
        "name": "Jane Doe",
        "phone": "+971500000000",
        "email": "jane@example.com",
        "source": "elementor",
        "siteName": "Website - Dubai Hills",
        "status": status,
        "createdAt": "2025-11-08T10:00:00Z",
        "payload": {}
    })
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "test_token",
            "user": { "_id": "u1", "name": "Admin", "email": "admin@example.com" }
        })))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let api = client(&mock_server, store);

    let response = api.auth().login("admin@example.com", "secret").await.unwrap();
    assert_eq!(response.token, "test_token");
    assert_eq!(response.user.email, "admin@example.com");
}

#[tokio::test]
async fn me_sends_bearer_token_from_store() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("Authorization", "Bearer persisted_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "_id": "u1", "name": "Admin", "email": "admin@example.com" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::with_token("persisted_token"));
    let api = client(&mock_server, store);

    let user = api.auth().me().await.unwrap();
    assert_eq!(user.name.as_deref(), Some("Admin"));
}

#[tokio::test]
async fn a_401_clears_the_store_and_fires_the_hook_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/leads"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::with_token("expired_token"));
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_hook = fired.clone();

    let api = ApiClient::new(&mock_server.uri(), store.clone()).on_unauthorized(move || {
        fired_hook.fetch_add(1, Ordering::SeqCst);
    });

    let result = api.leads().list(&LeadQuery::default()).await;

    assert!(matches!(result, Err(Error::Unauthorized)));
    assert_eq!(store.load(), None);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn a_401_from_any_endpoint_invalidates_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports/kpis"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryStore::with_token("expired_token"));
    let api = client(&mock_server, store.clone());

    let result = api.reports().kpis().await;
    assert!(matches!(result, Err(Error::Unauthorized)));
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn leads_list_decodes_a_full_page() {
    let mock_server = MockServer::start().await;

    let rows: Vec<_> = (0..20)
        .map(|i| lead_json(&format!("lead{}", i), 100 + i as u64, "queued"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/leads"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .and(query_param("sort", "createdAt"))
        .and(query_param("order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": rows,
            "pagination": {
                "currentPage": 2,
                "totalPages": 5,
                "totalLeads": 93,
                "limit": 20
            }
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));
    let page = api
        .leads()
        .list(&LeadQuery::default().with_page(2))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 20);
    assert_eq!(page.pagination.current_page, 2);
    assert_eq!(page.pagination.total_pages, 5);
    assert_eq!(page.pagination.total_leads, 93);
}

#[tokio::test]
async fn leads_list_sends_filters_but_never_dates_for_presets() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/leads"))
        .and(query_param("status", "failed"))
        .and(query_param("sourceId", "src1"))
        .and(query_param("dateRange", "7d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": { "currentPage": 1, "totalPages": 1, "totalLeads": 0, "limit": 20 }
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));
    let query = LeadQuery {
        status: Some(LeadStatus::Failed),
        source_id: Some("src1".to_string()),
        date_range: DateRange::Last7d,
        date_from: Some("2025-11-01".to_string()),
        date_to: Some("2025-11-08".to_string()),
        ..LeadQuery::default()
    };

    let page = api.leads().list(&query).await.unwrap();
    assert!(page.items.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    let url = requests[0].url.to_string();
    assert!(!url.contains("dateFrom"));
    assert!(!url.contains("dateTo"));
}

#[tokio::test]
async fn lead_detail_decodes_lead_jobs_and_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/leads/lead1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "lead": lead_json("lead1", 1042, "failed"),
                "jobs": [{
                    "_id": "j1",
                    "type": "push_to_bitrix",
                    "status": "FAILED",
                    "attempts": 3,
                    "runAt": "2025-11-08T10:05:00Z",
                    "lastError": "pipeline not found"
                }],
                "errors": [{
                    "_id": "e1",
                    "jobType": "push_to_bitrix",
                    "message": "pipeline not found",
                    "createdAt": "2025-11-08T10:05:00Z"
                }]
            }
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));
    let bundle = api.leads().get("lead1").await.unwrap();

    assert_eq!(bundle.lead.lead_id, 1042);
    assert_eq!(bundle.jobs.len(), 1);
    assert_eq!(bundle.jobs[0].attempts, 3);
    assert_eq!(bundle.errors[0].message, "pipeline not found");
}

#[tokio::test]
async fn creating_a_lead_posts_the_payload_and_decodes_the_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/leads"))
        .and(wiremock::matchers::body_partial_json(json!({
            "name": "Jane Doe",
            "phone": "+971500000000",
            "sourceId": "src1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": lead_json("lead9", 1043, "queued")
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));
    let lead = api
        .leads()
        .create(&NewLead {
            name: "Jane Doe".to_string(),
            phone: "+971500000000".to_string(),
            email: None,
            source_id: "src1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(lead.lead_id, 1043);
    assert_eq!(lead.status, LeadStatus::Queued);
}

#[tokio::test]
async fn retry_posts_to_the_retry_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/leads/lead1/retry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "message": "2 jobs re-queued"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));
    api.leads().retry("lead1").await.unwrap();
}

#[tokio::test]
async fn validation_failure_surfaces_the_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sources"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Name is required"
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));
    let payload = SourcePayload {
        name: String::new(),
        platform: Platform::Elementor,
        config: SourceConfig::default(),
    };

    let err = api.sources().create(&payload).await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Name is required");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn unparsable_error_body_falls_back_to_the_status_line() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));
    let err = api.sources().list().await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("500"));
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn source_crud_hits_the_expected_paths() {
    let mock_server = MockServer::start().await;

    let source = json!({
        "_id": "src1",
        "name": "Website - Dubai Hills",
        "platform": "elementor",
        "identifierToken": "tok_8f3a",
        "leadCount": 0,
        "createdAt": "2025-10-01T08:00:00Z"
    });

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [source.clone()] })),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/sources/src1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": source.clone() })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/sources/src1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Source deleted" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));

    let sources = api.sources().list().await.unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].platform, Platform::Elementor);

    let payload = SourcePayload {
        name: "Website - Dubai Hills".to_string(),
        platform: Platform::Elementor,
        config: SourceConfig {
            sheet_id: Some("sheet123".to_string()),
            sheet_name: Some("Leads".to_string()),
            bitrix_pipeline_id: Some("4".to_string()),
        },
    };
    api.sources().update("src1", &payload).await.unwrap();
    api.sources().delete("src1").await.unwrap();
}

#[tokio::test]
async fn reports_kpis_and_series_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reports/kpis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "leadsToday": 4,
                "leadsLast24h": 10,
                "failedJobs": 2,
                "leadsBySource": [{ "_id": "Website - Dubai Hills", "count": 7 }]
            }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reports/leads-over-time"))
        .and(query_param("period", "28d"))
        .and(query_param("groupBy", "day"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "date": "2025-11-07", "count": 3 },
                { "date": "2025-11-08", "count": 5 }
            ]
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));

    let kpis = api.reports().kpis().await.unwrap();
    assert_eq!(kpis.failed_jobs, 2);
    assert_eq!(kpis.leads_by_source[0].count, 7);

    let series = api
        .reports()
        .leads_over_time(&SeriesQuery::default())
        .await
        .unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[1].count, 5);
}

#[tokio::test]
async fn bitrix_status_test_and_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bitrix/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "connected": true, "webhookConfigured": true }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/bitrix/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "success": true, "message": "Webhook reachable" }
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bitrix/errors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "_id": "e1", "message": "timeout", "createdAt": "2025-11-08T09:00:00Z" }]
        })))
        .mount(&mock_server)
        .await;

    let api = client(&mock_server, Arc::new(MemoryStore::with_token("t")));

    let status = api.bitrix().status().await.unwrap();
    assert!(status.connected);

    let test = api.bitrix().test().await.unwrap();
    assert_eq!(test.message.as_deref(), Some("Webhook reachable"));

    let errors = api.bitrix().errors().await.unwrap();
    assert_eq!(errors[0].message, "timeout");
}
