use payloads::{
    APIClient, ClientError, FilterValue, ListPath, ListRequest, PageWindow,
    Payment, RequestContext, StatusCode, Student, Teacher,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn student_json(name: &str) -> serde_json::Value {
    json!({
        "id": "6b3a5c1e-2f1d-4c55-9a8e-6c1f4f0c1a01",
        "school_id": "0b0d7c8a-4a8e-4c3e-8f0b-1d2e3f4a5b6c",
        "full_name": name,
        "identity_document": null,
        "class_name": "3A",
        "grade": "3",
        "balance": "12.50",
        "enabled": true,
        "created_at": "2024-02-01T10:00:00Z"
    })
}

#[tokio::test]
async fn list_page_sends_query_and_token() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .and(query_param("full_name", "Ana"))
        .and(query_param("export_all", "false"))
        .and(query_param("lang", "es"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [student_json("Ana Pérez")],
            "totalElements": 21
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = APIClient::new(
        server.uri(),
        RequestContext::default()
            .with_token("secret-token")
            .with_lang("es"),
    );
    let mut request = ListRequest {
        window: Some(PageWindow {
            offset: 20,
            limit: 10,
        }),
        ..Default::default()
    };
    request.filters.insert("full_name".into(), FilterValue::text("Ana"));

    let page = client
        .list_page::<Student>(ListPath::STUDENTS, &request)
        .await?;
    assert_eq!(page.total_elements, 21);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].full_name, "Ana Pérez");

    Ok(())
}

#[tokio::test]
async fn export_all_response_without_total() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/students"))
        .and(query_param("export_all", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [student_json("A"), student_json("B")]
        })))
        .mount(&server)
        .await;

    let client = APIClient::new(server.uri(), RequestContext::default());
    let request = ListRequest {
        export_all: true,
        ..Default::default()
    };
    let page = client
        .list_page::<Student>(ListPath::STUDENTS, &request)
        .await?;
    assert_eq!(page.content.len(), 2);

    Ok(())
}

#[tokio::test]
async fn backend_message_becomes_error_text() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "Not allowed",
            "title": "Error",
            "type": "error"
        })))
        .mount(&server)
        .await;

    let client = APIClient::new(server.uri(), RequestContext::default());
    let err = client
        .list_page::<Payment>(ListPath::PAYMENTS, &ListRequest::default())
        .await
        .unwrap_err();
    match err {
        ClientError::APIError(status, message) => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(message, "Not allowed");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn plain_text_errors_are_kept() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/menu_items"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = APIClient::new(server.uri(), RequestContext::default());
    let err = client
        .list_page::<serde_json::Value>(
            ListPath::MENU_ITEMS,
            &ListRequest::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "boom");

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_an_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teachers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = APIClient::new(server.uri(), RequestContext::default());
    let result = client
        .list_page::<Teacher>(ListPath::TEACHERS, &ListRequest::default())
        .await;
    assert!(matches!(result, Err(ClientError::Network(_))));

    Ok(())
}
