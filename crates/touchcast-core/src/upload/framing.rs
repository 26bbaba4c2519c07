//! HTTP/1.1 request framing for one upload.
//!
//! Both framings POST with `Connection: keep-alive` and an explicit
//! `Content-Length`, so the connection can carry the next cycle.

const PART_FIELD_NAME: &str = "audio";
const PART_FILE_NAME: &str = "audio.raw";
const PAYLOAD_CONTENT_TYPE: &str = "application/octet-stream";

/// How the payload is wrapped on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Framing {
    /// Raw `application/octet-stream` body.
    Raw,
    /// `multipart/form-data` body with a single `audio` file part.
    Multipart {
        /// Boundary token separating parts.
        boundary: String,
    },
}

impl Framing {
    /// Request line, headers, blank line, and any body preamble.
    pub fn request_head(&self, host: &str, path: &str, payload_len: usize) -> String {
        let (content_type, preamble, content_length) = match self {
            Framing::Raw => (PAYLOAD_CONTENT_TYPE.to_string(), String::new(), payload_len),
            Framing::Multipart { boundary } => {
                let preamble = format!(
                    "--{boundary}\r\n\
                     Content-Disposition: form-data; name=\"{PART_FIELD_NAME}\"; filename=\"{PART_FILE_NAME}\"\r\n\
                     Content-Type: {PAYLOAD_CONTENT_TYPE}\r\n\r\n"
                );
                let length = preamble.len() + payload_len + self.trailer().len();
                (
                    format!("multipart/form-data; boundary={boundary}"),
                    preamble,
                    length,
                )
            }
        };

        format!(
            "POST {path} HTTP/1.1\r\n\
             Host: {host}\r\n\
             Content-Type: {content_type}\r\n\
             Content-Length: {content_length}\r\n\
             Connection: keep-alive\r\n\r\n\
             {preamble}"
        )
    }

    /// Bytes written after the payload. Empty for raw framing.
    pub fn trailer(&self) -> String {
        match self {
            Framing::Raw => String::new(),
            Framing::Multipart { boundary } => format!("\r\n--{boundary}--\r\n"),
        }
    }
}
