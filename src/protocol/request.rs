//! HTTP request parsing
//!
//! Parses the request line into a typed request and routes it. Only GET is
//! served; the path portion of the target is percent-decoded before routing.

use crate::error::RequestError;

/// A parsed HTTP request line.
#[derive(Debug, PartialEq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
}

/// Represents a routed request, one variant per endpoint.
#[derive(Debug, PartialEq)]
pub enum Route {
    Home,
    List { folder: String },
    View { path: String },
    Download { path: String },
    NotFound,
}

/// Parses a raw request line (`GET /path?query HTTP/1.1`) into a `Request`.
///
/// The query string is kept raw; parameter values are decoded on lookup.
pub fn parse_request_line(raw: &str) -> Result<Request, RequestError> {
    let trimmed = raw.trim();
    let mut parts = trimmed.split_whitespace();

    let method = parts
        .next()
        .ok_or_else(|| RequestError::MalformedRequestLine(trimmed.to_string()))?;
    let target = parts
        .next()
        .ok_or_else(|| RequestError::MalformedRequestLine(trimmed.to_string()))?;
    let version = parts
        .next()
        .ok_or_else(|| RequestError::MalformedRequestLine(trimmed.to_string()))?;

    if parts.next().is_some() || !version.starts_with("HTTP/") {
        return Err(RequestError::MalformedRequestLine(trimmed.to_string()));
    }

    if method != "GET" {
        return Err(RequestError::UnsupportedMethod(method.to_string()));
    }

    let (raw_path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (target, None),
    };

    Ok(Request {
        method: method.to_string(),
        path: percent_decode(raw_path)?,
        query,
    })
}

/// Routes a parsed request to its endpoint.
pub fn route_request(request: &Request) -> Result<Route, RequestError> {
    let path = request.path.as_str();

    if path == "/" {
        return Ok(Route::Home);
    }

    if path == "/list" || path == "/list/" {
        let folder = match &request.query {
            Some(query) => query_param(query, "folder")?.unwrap_or_default(),
            None => String::new(),
        };
        return Ok(Route::List { folder });
    }

    if let Some(rest) = path.strip_prefix("/view/") {
        return Ok(Route::View {
            path: rest.to_string(),
        });
    }

    if let Some(rest) = path.strip_prefix("/download/") {
        return Ok(Route::Download {
            path: rest.to_string(),
        });
    }

    Ok(Route::NotFound)
}

/// Looks up a query parameter by key, decoding `+` and percent escapes.
pub fn query_param(query: &str, key: &str) -> Result<Option<String>, RequestError> {
    for pair in query.split('&') {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name == key {
            let decoded = percent_decode(&value.replace('+', " "))?;
            return Ok(Some(decoded));
        }
    }
    Ok(None)
}

/// Decodes percent escapes; a truncated or non-hex escape is a client error.
pub fn percent_decode(input: &str) -> Result<String, RequestError> {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%' {
            if index + 2 >= bytes.len() {
                return Err(RequestError::InvalidPercentEncoding(input.to_string()));
            }
            let high = hex_value(bytes[index + 1]);
            let low = hex_value(bytes[index + 2]);
            match (high, low) {
                (Some(high), Some(low)) => decoded.push(high * 16 + low),
                _ => return Err(RequestError::InvalidPercentEncoding(input.to_string())),
            }
            index += 3;
        } else {
            decoded.push(bytes[index]);
            index += 1;
        }
    }

    String::from_utf8(decoded)
        .map_err(|_| RequestError::InvalidPercentEncoding(input.to_string()))
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
