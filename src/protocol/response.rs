//! HTTP response handling
//!
//! Builds and serializes responses. Every response closes the connection;
//! bodies always carry an explicit length.

/// Response status codes used by the server
pub const OK: u16 = 200;
pub const BAD_REQUEST: u16 = 400;
pub const FORBIDDEN: u16 = 403;
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const INTERNAL_ERROR: u16 = 500;

/// An HTTP response ready for serialization.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// An HTML page response.
    pub fn html(status: u16, body: String) -> Self {
        Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body: body.into_bytes(),
        }
    }

    /// A document byte response with the given disposition (`inline` for
    /// viewing, `attachment` for download). Bytes pass through untouched.
    pub fn file(media_type: &str, disposition: &str, filename: &str, body: Vec<u8>) -> Self {
        Self {
            status: OK,
            headers: vec![
                ("Content-Type".to_string(), media_type.to_string()),
                (
                    "Content-Disposition".to_string(),
                    format!("{}; filename=\"{}\"", disposition, filename),
                ),
            ],
            body,
        }
    }

    /// The standard reason phrase for a status code.
    pub fn status_reason(status: u16) -> &'static str {
        match status {
            OK => "OK",
            BAD_REQUEST => "Bad Request",
            FORBIDDEN => "Forbidden",
            NOT_FOUND => "Not Found",
            METHOD_NOT_ALLOWED => "Method Not Allowed",
            INTERNAL_ERROR => "Internal Server Error",
            _ => "Unknown",
        }
    }

    /// Serializes the status line, headers and body for the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status,
            Self::status_reason(self.status)
        );
        for (name, value) in &self.headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        head.push_str(&format!("Content-Length: {}\r\n", self.body.len()));
        head.push_str("Connection: close\r\n\r\n");

        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reasons() {
        assert_eq!(Response::status_reason(200), "OK");
        assert_eq!(Response::status_reason(403), "Forbidden");
        assert_eq!(Response::status_reason(404), "Not Found");
        assert_eq!(Response::status_reason(500), "Internal Server Error");
    }

    #[test]
    fn test_html_response_serialization() {
        let response = Response::html(OK, "<p>hi</p>".to_string());
        let wire = String::from_utf8(response.to_bytes()).unwrap();
        assert!(wire.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(wire.contains("Content-Type: text/html; charset=utf-8\r\n"));
        assert!(wire.contains("Content-Length: 9\r\n"));
        assert!(wire.contains("Connection: close\r\n"));
        assert!(wire.ends_with("\r\n\r\n<p>hi</p>"));
    }

    #[test]
    fn test_file_response_carries_disposition() {
        let response = Response::file("application/pdf", "attachment", "manual.pdf", vec![1, 2]);
        let wire = response.to_bytes();
        let head = String::from_utf8_lossy(&wire);
        assert!(head.contains("Content-Type: application/pdf\r\n"));
        assert!(head.contains("Content-Disposition: attachment; filename=\"manual.pdf\"\r\n"));
        assert!(wire.ends_with(&[1, 2]));
    }
}
