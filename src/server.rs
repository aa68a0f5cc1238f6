//! JSON-RPC 2.0 front end over stdio, one request per line.
//!
//! The methods are the word-pair operations of [`crate::tools`]
//! (`edit_distance`, `align`, `matrix`) plus `operations`, which lists them
//! with their params schema. A request without an `id` is a notification:
//! it runs but gets no reply.
//!
//! | code   | meaning                                         |
//! |--------|-------------------------------------------------|
//! | -32700 | line is not UTF-8 JSON                          |
//! | -32600 | not a JSON-RPC 2.0 request, or line too long    |
//! | -32601 | unknown method                                  |
//! | -32602 | params do not fit the operation                 |
//! | -32603 | result could not be encoded                     |
//! | -32001 | a word is empty (after normalization)           |
//! | -32002 | a word is over the length limit                 |

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::error::AlignError;
use crate::report::ReportConfig;
use crate::tools::{CallError, ToolRouter};

/// Maximum size of a single request line (10 MiB).
const MAX_LINE_BYTES: usize = 10 * 1024 * 1024;

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;
pub const EMPTY_WORD: i64 = -32001;
pub const WORD_TOO_LONG: i64 = -32002;

/// An incoming request or notification.
#[derive(Debug, Deserialize)]
pub struct Request {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// A reply: `{"jsonrpc": "2.0", "id": .., "result" | "error": ..}`.
#[derive(Debug, Serialize)]
pub struct Response {
    jsonrpc: &'static str,
    pub id: Value,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(RpcError),
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl From<CallError> for RpcError {
    fn from(err: CallError) -> Self {
        let message = err.to_string();
        match err {
            CallError::UnknownOperation(_) => Self::new(METHOD_NOT_FOUND, message),
            CallError::InvalidParams { .. } => Self::new(INVALID_PARAMS, message),
            CallError::Rejected(AlignError::InvalidInput { side }) => Self {
                code: EMPTY_WORD,
                message,
                data: Some(json!({ "side": side.to_string() })),
            },
            CallError::Rejected(AlignError::InputTooLong { side, len, max }) => Self {
                code: WORD_TOO_LONG,
                message,
                data: Some(json!({ "side": side.to_string(), "len": len, "max": max })),
            },
            CallError::Output(_) | CallError::Rejected(_) => Self::new(INTERNAL_ERROR, message),
        }
    }
}

impl Response {
    const fn new(id: Value, outcome: Outcome) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            outcome,
        }
    }

    /// The error code, if this is an error reply.
    #[must_use]
    pub const fn error_code(&self) -> Option<i64> {
        match &self.outcome {
            Outcome::Error(e) => Some(e.code),
            Outcome::Result(_) => None,
        }
    }
}

/// Server settings.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Default normalization, length limit and gap marker for every call.
    pub report: ReportConfig,
}

/// Serve stdin/stdout until stdin is closed.
pub fn run_server(config: &ServerConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = std::io::BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();
    serve(config, &mut reader, &mut stdout)
}

/// Answer requests read line by line from `reader` until EOF.
///
/// Malformed lines get an error reply and the loop continues; only I/O
/// failures end it early.
pub fn serve(config: &ServerConfig, reader: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    info!(
        normalize = config.report.normalize,
        max_input_chars = ?config.report.max_input_chars,
        "lev-align server starting"
    );
    let router = ToolRouter::new(config.report.clone());

    loop {
        let reply = match read_line_limited(reader, MAX_LINE_BYTES).context("failed to read request")? {
            LineRead::Eof => break,
            LineRead::TooLong => {
                warn!(max_bytes = MAX_LINE_BYTES, "request line too long, discarded");
                Some(Response::new(
                    Value::Null,
                    Outcome::Error(RpcError::new(
                        INVALID_REQUEST,
                        format!("request line exceeds {MAX_LINE_BYTES} bytes"),
                    )),
                ))
            }
            LineRead::InvalidUtf8(e) => {
                warn!(error = %e, "request line is not UTF-8");
                Some(Response::new(
                    Value::Null,
                    Outcome::Error(RpcError::new(PARSE_ERROR, format!("parse error: {e}"))),
                ))
            }
            LineRead::Line(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                handle_line(&router, line)
            }
        };

        if let Some(reply) = reply {
            write_response(out, &reply)?;
        }
    }

    info!("input closed, lev-align server stopped");
    Ok(())
}

/// Handle one request line. Returns `None` for notifications.
pub fn handle_line(router: &ToolRouter, line: &str) -> Option<Response> {
    debug!(raw = line, "received request");

    let request: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Some(Response::new(
                Value::Null,
                Outcome::Error(RpcError::new(PARSE_ERROR, format!("parse error: {e}"))),
            ));
        }
    };

    if request.jsonrpc != "2.0" {
        let message = format!("jsonrpc must be \"2.0\", got {:?}", request.jsonrpc);
        return Some(Response::new(
            request.id.unwrap_or(Value::Null),
            Outcome::Error(RpcError::new(INVALID_REQUEST, message)),
        ));
    }

    let outcome = match request.method.as_str() {
        "operations" => serde_json::to_value(ToolRouter::operations())
            .map_err(|e| RpcError::new(INTERNAL_ERROR, e.to_string())),
        method => router.call(method, request.params).map_err(RpcError::from),
    };

    let Some(id) = request.id else {
        debug!(method = %request.method, ok = outcome.is_ok(), "notification handled");
        return None;
    };

    Some(match outcome {
        Ok(value) => Response::new(id, Outcome::Result(value)),
        Err(e) => {
            debug!(method = %request.method, code = e.code, message = %e.message, "call failed");
            Response::new(id, Outcome::Error(e))
        }
    })
}

fn write_response(out: &mut impl Write, reply: &Response) -> Result<()> {
    let json = serde_json::to_string(reply).context("failed to encode response")?;
    out.write_all(json.as_bytes())
        .and_then(|()| out.write_all(b"\n"))
        .and_then(|()| out.flush())
        .context("failed to write response")
}

/// One line of input, as far as framing and encoding go.
#[derive(Debug)]
enum LineRead {
    Eof,
    Line(String),
    /// Over the byte limit; consumed up to its newline and dropped.
    TooLong,
    InvalidUtf8(std::string::FromUtf8Error),
}

/// Read up to the next newline, decoding UTF-8 once the whole line is in.
fn read_line_limited(reader: &mut impl BufRead, max_bytes: usize) -> std::io::Result<LineRead> {
    let mut bytes = Vec::new();
    let mut overflow = false;
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            break;
        }
        let (take, newline) = available
            .iter()
            .position(|&b| b == b'\n')
            .map_or((available.len(), false), |pos| (pos + 1, true));
        if !overflow {
            if bytes.len() + take > max_bytes {
                overflow = true;
                bytes = Vec::new();
            } else {
                bytes.extend_from_slice(&available[..take]);
            }
        }
        reader.consume(take);
        if newline {
            break;
        }
    }

    Ok(if overflow {
        LineRead::TooLong
    } else if bytes.is_empty() {
        LineRead::Eof
    } else {
        String::from_utf8(bytes).map_or_else(LineRead::InvalidUtf8, LineRead::Line)
    })
}
