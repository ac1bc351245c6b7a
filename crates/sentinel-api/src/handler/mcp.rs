//! JSON-RPC tool surface
//!
//! Minimal MCP-style endpoint exposing the auditor as a host-invocable tool.
//! Supports `initialize`, `tools/list`, and `tools/call`; every malformed
//! request yields a JSON-RPC error object, never a transport error.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::routes::AppState;

/// Protocol revision reported by `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name of the single exposed tool
pub const TOOL_NAME: &str = "audit_agent_activity";

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    fn result(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Option<Value>, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

/// `tools/call` parameters
#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

fn tool_definition() -> Value {
    json!({
        "name": TOOL_NAME,
        "description": "Audit AI agent activity logs and return a governance report with risk score, violations, and recommendations",
        "inputSchema": {
            "type": "object",
            "properties": {
                "activity_logs": {
                    "type": "string",
                    "description": "Raw activity logs from one or more AI agents"
                }
            },
            "required": ["activity_logs"]
        }
    })
}

/// POST /mcp - dispatch one JSON-RPC request
pub async fn handle(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    let id = request.id.clone();
    tracing::debug!(method = %request.method, "tool protocol request");

    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::result(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {"tools": {}},
                "serverInfo": {
                    "name": "sentinel-auditor",
                    "version": env!("CARGO_PKG_VERSION"),
                }
            }),
        ),
        "tools/list" => JsonRpcResponse::result(id, json!({"tools": [tool_definition()]})),
        "tools/call" => tool_call(&state, id, request.params),
        _ => JsonRpcResponse::error(id, -32601, format!("method not found: {}", request.method)),
    };

    Json(response)
}

fn tool_call(state: &AppState, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
    let Some(params) = params else {
        return JsonRpcResponse::error(id, -32602, "missing params");
    };
    let params: ToolCallParams = match serde_json::from_value(params) {
        Ok(params) => params,
        Err(e) => return JsonRpcResponse::error(id, -32602, format!("invalid params: {}", e)),
    };

    if params.name != TOOL_NAME {
        return JsonRpcResponse::error(id, -32602, format!("unknown tool: {}", params.name));
    }

    let Some(activity_logs) = params.arguments.get("activity_logs").and_then(Value::as_str)
    else {
        return JsonRpcResponse::error(id, -32602, "missing argument: activity_logs");
    };

    let report = state.engine.classify(activity_logs);
    state.metrics.record_audit(&report);

    let text = match serde_json::to_string(&report) {
        Ok(text) => text,
        Err(e) => return JsonRpcResponse::error(id, -32603, format!("serialization failed: {}", e)),
    };

    JsonRpcResponse::result(
        id,
        json!({
            "content": [{"type": "text", "text": text}],
            "isError": false
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::from_env().unwrap()
    }

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    #[tokio::test]
    async fn test_initialize() {
        let Json(response) = handle(State(state()), Json(request("initialize", None))).await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "sentinel-auditor");
    }

    #[tokio::test]
    async fn test_tools_list_exposes_audit_tool() {
        let Json(response) = handle(State(state()), Json(request("tools/list", None))).await;
        let result = response.result.unwrap();
        assert_eq!(result["tools"][0]["name"], TOOL_NAME);
        assert_eq!(
            result["tools"][0]["inputSchema"]["required"][0],
            "activity_logs"
        );
    }

    #[tokio::test]
    async fn test_tools_call_returns_report() {
        let params = json!({
            "name": TOOL_NAME,
            "arguments": {"activity_logs": "Agent-A: permission denied"}
        });
        let Json(response) = handle(State(state()), Json(request("tools/call", Some(params)))).await;

        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);

        let text = result["content"][0]["text"].as_str().unwrap();
        let report: sentinel_core::AuditReport = serde_json::from_str(text).unwrap();
        assert_eq!(report.violations.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_method_is_rpc_error() {
        let Json(response) = handle(State(state()), Json(request("resources/list", None))).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_rpc_error() {
        let params = json!({"name": "delete_everything", "arguments": {}});
        let Json(response) = handle(State(state()), Json(request("tools/call", Some(params)))).await;
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_missing_argument_is_rpc_error() {
        let params = json!({"name": TOOL_NAME, "arguments": {}});
        let Json(response) = handle(State(state()), Json(request("tools/call", Some(params)))).await;
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("activity_logs"));
    }
}
