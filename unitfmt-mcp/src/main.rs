//! unitfmt MCP Server
//!
//! Line-delimited JSON-RPC over stdio.
//!
//! Tools:
//! - format_value: Format a number with a unit format id
//! - resolve_format: Describe a format id (catalog or custom)
//! - list_categories: List format categories and their ids

mod config;

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing_subscriber::EnvFilter;
use unitfmt_core::FormatError;
use unitfmt_registry::FormatRegistry;

use crate::config::ServerConfig;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "unitfmt";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: INVALID_PARAMS, message: message.into(), data: None }
    }
}

impl From<FormatError> for McpError {
    fn from(err: FormatError) -> Self {
        let mut data = json!({ "code": err.code() });
        if !err.suggestions().is_empty() {
            data["suggestions"] = json!(err.suggestions());
        }
        McpError { code: INVALID_PARAMS, message: err.to_string(), data: Some(data) }
    }
}

fn init_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    let config = ServerConfig::from_env();
    let filter = match &config {
        Ok(c) => c.log_filter.clone(),
        Err(_) => "info".to_string(),
    };
    init_logging(&filter);

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(code = e.code(), "invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let registry = match FormatRegistry::new(&config.registry) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(code = e.code(), "cannot build format registry: {}", e);
            std::process::exit(2);
        }
    };

    tracing::info!(
        version = SERVER_VERSION,
        protocol = PROTOCOL_VERSION,
        formats = registry.len(),
        scalable = config.registry.scalable,
        time_zone = %config.registry.time_zone,
        "unitfmt MCP server started"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = process_line(&registry, &line) else {
                    continue;
                };
                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response).and_then(|_| stdout.flush()) {
                    tracing::error!("error writing response: {}", e);
                    break;
                }
            }
            Err(e) => {
                tracing::error!("error reading input: {}", e);
                break;
            }
        }
    }

    tracing::info!("server shutting down");
}

/// Handle one input line; `None` when nothing should be written back
fn process_line(registry: &FormatRegistry, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<McpRequest>(line) {
        Ok(request) => {
            tracing::debug!(method = %request.method, "processing request");
            let response = handle_request(registry, &request);
            // Notifications (no id) get no response
            if request.id.is_none() {
                tracing::debug!(method = %request.method, "notification processed");
                return None;
            }
            response
        }
        Err(e) => {
            tracing::warn!("error parsing request: {}", e);
            McpResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(McpError { code: PARSE_ERROR, message: format!("Parse error: {}", e), data: None }),
            }
        }
    };

    match serde_json::to_string(&response) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("error serializing response: {}", e);
            None
        }
    }
}

fn handle_request(registry: &FormatRegistry, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(registry, &request.params),

        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse { jsonrpc: "2.0".to_string(), id: request.id.clone(), result: Some(r), error: None },
        Err(e) => McpResponse { jsonrpc: "2.0".to_string(), id: request.id.clone(), result: None, error: Some(e) },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params
        .as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    tracing::info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Dashboard-style unit and value formatting"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "unitfmt renders raw numbers with dashboard unit formats (bytes, SI units, currency, durations, dates). Use 'list_categories' to discover format ids, then 'format_value'."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    Ok(json!({
        "tools": [
            {
                "name": "format_value",
                "description": "Format a number with a unit format id such as 'bytes', 'decbytes', 'percentunit', 's' or 'currencyUSD'. Custom ids like 'suffix:apples' or 'si:W' are accepted. Unknown ids fall back to plain Number formatting.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Format id"
                        },
                        "value": {
                            "type": ["number", "string"],
                            "description": "Raw value; dates are epoch milliseconds"
                        },
                        "decimals": {
                            "type": "integer",
                            "description": "Decimal places (omit for automatic)"
                        },
                        "scaled_decimals": {
                            "type": "integer",
                            "description": "Decimal places for scaled values"
                        }
                    },
                    "required": ["id", "value"]
                }
            },
            {
                "name": "resolve_format",
                "description": "Describe a format id: display name, category and formatter parameters. Unknown ids return similar ids.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Format id"
                        }
                    },
                    "required": ["id"]
                }
            },
            {
                "name": "list_categories",
                "description": "List format categories in display order with their format ids and names.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Only this category (case-insensitive), e.g. 'Data rate'"
                        }
                    }
                }
            }
        ]
    }))
}

fn handle_tool_call(registry: &FormatRegistry, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "format_value" => tool_format_value(registry, &args),
        "resolve_format" => tool_resolve_format(registry, &args),
        "list_categories" => tool_list_categories(registry, &args),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn string_arg<'a>(args: &'a JsonValue, key: &str) -> Result<&'a str, McpError> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", key)))
}

fn decimals_arg(args: &JsonValue, key: &str) -> Result<Option<i32>, McpError> {
    match args.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .and_then(|d| i32::try_from(d).ok())
            .map(Some)
            .ok_or_else(|| McpError::invalid_params(format!("{} must be an integer", key))),
    }
}

fn value_arg(args: &JsonValue) -> Result<f64, McpError> {
    match args.get("value") {
        Some(JsonValue::Number(n)) => n
            .as_f64()
            .ok_or_else(|| McpError::invalid_params("value is not representable as a number")),
        Some(JsonValue::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| McpError::invalid_params(format!("value '{}' is not a number", s))),
        Some(JsonValue::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        _ => Err(McpError::invalid_params("Missing value argument")),
    }
}

fn tool_format_value(registry: &FormatRegistry, args: &JsonValue) -> Result<JsonValue, McpError> {
    let id = string_arg(args, "id")?;
    let value = value_arg(args)?;
    let decimals = decimals_arg(args, "decimals")?;
    let scaled_decimals = decimals_arg(args, "scaled_decimals")?;

    let (formatter, fallback) = match registry.resolve(id) {
        Ok(formatter) => (formatter, false),
        Err(err) => {
            tracing::debug!(id, error = %err, "unknown format id, using Number");
            (registry.fallback().clone(), true)
        }
    };
    let formatted = formatter.format(value, decimals, scaled_decimals);

    Ok(json!({
        "content": [{ "type": "text", "text": formatted.to_string() }],
        "structuredContent": {
            "prefix": formatted.prefix_str(),
            "text": formatted.text,
            "suffix": formatted.suffix_str(),
            "fallback": fallback
        },
        "isError": false
    }))
}

fn formatter_json(formatter: &unitfmt_registry::Formatter) -> Result<JsonValue, McpError> {
    serde_json::to_value(formatter).map_err(|e| McpError {
        code: INTERNAL_ERROR,
        message: format!("cannot describe formatter: {}", e),
        data: None,
    })
}

fn tool_resolve_format(registry: &FormatRegistry, args: &JsonValue) -> Result<JsonValue, McpError> {
    let id = string_arg(args, "id")?;

    let description = match registry.get(id) {
        Some(entry) => json!({
            "id": entry.id,
            "name": entry.name,
            "category": registry.category_of(id),
            "custom": false,
            "formatter": formatter_json(&entry.formatter)?
        }),
        None => {
            let formatter = registry.resolve(id)?;
            json!({
                "id": id,
                "custom": true,
                "formatter": formatter_json(&formatter)?
            })
        }
    };

    let summary = match description.get("name").and_then(|n| n.as_str()) {
        Some(name) => format!("{}: {}", id, name),
        None => format!("{}: custom format", id),
    };

    Ok(json!({
        "content": [{ "type": "text", "text": summary }],
        "structuredContent": description,
        "isError": false
    }))
}

fn tool_list_categories(registry: &FormatRegistry, args: &JsonValue) -> Result<JsonValue, McpError> {
    let selected = match args.get("category").and_then(|v| v.as_str()) {
        Some(name) => match registry.category(name) {
            Some(category) => vec![category],
            None => {
                return Err(McpError {
                    code: INVALID_PARAMS,
                    message: format!("Unknown category: {}", name),
                    data: Some(json!({
                        "available": registry.categories().iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
                    })),
                })
            }
        },
        None => registry.categories().iter().collect(),
    };

    let text = selected
        .iter()
        .map(|c| {
            let ids: Vec<&str> = c.formats.iter().map(|e| e.id.as_str()).collect();
            format!("{}: {}", c.name, ids.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": { "categories": selected },
        "isError": false
    }))
}
