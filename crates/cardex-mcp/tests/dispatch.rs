//! MCP dispatch tests over an in-memory card source.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use cardex_client::{CardSource, ClientError};
use cardex_mcp::McpHandler;
use cardex_protocol::mcp::methods;
use cardex_protocol::{JsonRpcNotification, JsonRpcRequest, RequestId};
use cardex_types::CardPage;

/// Fake source that replays a canned page and records the last query.
struct FakeSource {
    page: CardPage,
    queries: std::sync::Mutex<Vec<String>>,
}

impl FakeSource {
    fn with_page(page: CardPage) -> Self {
        Self {
            page,
            queries: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self::with_page(CardPage::default())
    }
}

#[async_trait]
impl CardSource for FakeSource {
    async fn search(&self, query: &str) -> Result<CardPage, ClientError> {
        self.queries.lock().expect("lock").push(query.to_string());
        Ok(self.page.clone())
    }
}

/// Fake source that always fails upstream.
struct BrokenSource;

#[async_trait]
impl CardSource for BrokenSource {
    async fn search(&self, _query: &str) -> Result<CardPage, ClientError> {
        Err(ClientError::Status { status: 503 })
    }
}

fn rpc(method: &str, id: i64, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: RequestId::Number(id),
        method: method.into(),
        params,
    }
}

async fn dispatch_json(handler: &McpHandler, req: JsonRpcRequest) -> Value {
    let output = handler.dispatch(&req).await;
    let json_str = output.to_json().expect("ser");
    serde_json::from_str(&json_str).expect("de")
}

fn sample_page() -> CardPage {
    serde_json::from_value(json!({
        "data": [{
            "id": "sv4pt5-61",
            "name": "Chien-Pao ex",
            "set": {"id": "sv4pt5", "name": "Paldean Fates"},
            "tcgplayer": {
                "url": "https://prices.example/61",
                "updatedAt": "2024/03/01",
                "prices": {"holofoil": {"market": 2.5}}
            }
        }],
        "page": 1,
        "pageSize": 250,
        "count": 1,
        "totalCount": 1
    }))
    .expect("page")
}

#[tokio::test]
async fn initialize_reports_server_info() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(&handler, rpc(methods::INITIALIZE, 1, None)).await;
    assert_eq!(parsed["result"]["serverInfo"]["name"], "cardex");
    assert_eq!(parsed["result"]["protocolVersion"], "2024-11-05");
}

#[tokio::test]
async fn initialize_with_invalid_params_returns_error() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(
        &handler,
        rpc(methods::INITIALIZE, 2, Some(json!({"protocolVersion": 123}))),
    )
    .await;
    assert!(parsed["error"].is_object());
}

#[tokio::test]
async fn tools_list_declares_both_tools() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(&handler, rpc(methods::TOOLS_LIST, 3, None)).await;
    let tools = parsed["result"]["tools"].as_array().expect("tools");
    assert_eq!(tools.len(), 2);
    assert_eq!(tools[0]["name"], "search_cards");
    assert_eq!(tools[1]["name"], "get_card_prices");
    assert!(tools[0]["inputSchema"]["properties"]["subtypes"].is_object());
}

#[tokio::test]
async fn tools_call_missing_params_returns_error() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(&handler, rpc(methods::TOOLS_CALL, 4, None)).await;
    assert!(parsed["error"]["code"].is_i64());
}

#[tokio::test]
async fn tools_call_unknown_tool_flags_error_content() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(
        &handler,
        rpc(methods::TOOLS_CALL, 5, Some(json!({"name": "bogus", "arguments": {}}))),
    )
    .await;
    assert_eq!(parsed["result"]["isError"], true);
    let text = parsed["result"]["content"][0]["text"].as_str().expect("text");
    assert!(text.contains("unknown tool"));
}

#[tokio::test]
async fn search_tool_compiles_filter_and_returns_total() {
    let source = Arc::new(FakeSource::with_page(sample_page()));
    let handler = McpHandler::new(source.clone());
    let parsed = dispatch_json(
        &handler,
        rpc(
            methods::TOOLS_CALL,
            6,
            Some(json!({
                "name": "search_cards",
                "arguments": {"name": "chien-pao", "subtypes": ["EX"], "types": ["-Water"]}
            })),
        ),
    )
    .await;

    assert_eq!(parsed["result"]["isError"], false);
    let text = parsed["result"]["content"][0]["text"].as_str().expect("text");
    let payload: Value = serde_json::from_str(text).expect("payload");
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["cards"][0]["name"], "Chien-Pao ex");

    let queries = source.queries.lock().expect("lock");
    assert_eq!(queries.as_slice(), ["name:\"chien-pao\" subtypes:EX -types:Water"]);
}

#[tokio::test]
async fn search_tool_rejects_malformed_arguments() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(
        &handler,
        rpc(
            methods::TOOLS_CALL,
            7,
            Some(json!({"name": "search_cards", "arguments": {"subtypes": 42}})),
        ),
    )
    .await;
    assert_eq!(parsed["result"]["isError"], true);
    let text = parsed["result"]["content"][0]["text"].as_str().expect("text");
    assert!(text.contains("invalid arguments"));
}

#[tokio::test]
async fn price_tool_returns_summary_for_first_match() {
    let handler = McpHandler::new(Arc::new(FakeSource::with_page(sample_page())));
    let parsed = dispatch_json(
        &handler,
        rpc(
            methods::TOOLS_CALL,
            8,
            Some(json!({
                "name": "get_card_prices",
                "arguments": {"name": "chien-pao", "set": {"id": "sv4pt5"}}
            })),
        ),
    )
    .await;

    assert_eq!(parsed["result"]["isError"], false);
    let text = parsed["result"]["content"][0]["text"].as_str().expect("text");
    let payload: Value = serde_json::from_str(text).expect("payload");
    assert_eq!(payload["name"], "Chien-Pao ex");
    assert_eq!(payload["set"], "Paldean Fates");
    assert_eq!(payload["tcgplayer"]["prices"]["holofoil"]["market"], 2.5);
    assert!(payload["cardmarket"].is_null());
    assert!(payload.get("error").is_none());
}

#[tokio::test]
async fn price_tool_reports_no_match_as_payload_not_fault() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(
        &handler,
        rpc(
            methods::TOOLS_CALL,
            9,
            Some(json!({"name": "get_card_prices", "arguments": {"name": "missingno"}})),
        ),
    )
    .await;

    assert_eq!(parsed["result"]["isError"], false);
    let text = parsed["result"]["content"][0]["text"].as_str().expect("text");
    let payload: Value = serde_json::from_str(text).expect("payload");
    assert_eq!(
        payload["error"],
        "No cards found matching \"missingno\""
    );
    assert!(payload.get("name").is_none());
    assert!(payload.get("tcgplayer").is_none());
}

#[tokio::test]
async fn upstream_failure_surfaces_as_error_content() {
    let handler = McpHandler::new(Arc::new(BrokenSource));
    let parsed = dispatch_json(
        &handler,
        rpc(
            methods::TOOLS_CALL,
            10,
            Some(json!({"name": "search_cards", "arguments": {}})),
        ),
    )
    .await;
    assert_eq!(parsed["result"]["isError"], true);
    let text = parsed["result"]["content"][0]["text"].as_str().expect("text");
    assert!(text.contains("503"));
}

#[tokio::test]
async fn unknown_method_returns_method_not_found() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let parsed = dispatch_json(&handler, rpc("foo/bar", 11, None)).await;
    assert_eq!(parsed["error"]["code"], -32601);
    assert!(parsed["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("unknown method"));
}

#[test]
fn handle_notification_does_not_panic() {
    let handler = McpHandler::new(Arc::new(FakeSource::empty()));
    let notif = JsonRpcNotification {
        jsonrpc: "2.0".into(),
        method: methods::NOTIFICATIONS_INITIALIZED.into(),
        params: None,
    };
    handler.handle_notification(&notif);
}
