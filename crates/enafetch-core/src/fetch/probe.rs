//! Size probe before the body is fetched.
//!
//! A metadata-only request through libcurl: FTP sends `SIZE`, HTTP sends
//! `HEAD`. libcurl reports the FTP size as a `Content-Length:` header line,
//! so both protocols go through the same header parser.

use std::str;
use std::time::Duration;

/// Returns the advertised size of `url`, or `None` if the server gave none.
pub(crate) fn probe_size(
    url: &str,
    connect_timeout: Option<Duration>,
) -> Result<Option<u64>, curl::Error> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?;
    easy.follow_location(true)?;
    easy.fail_on_error(true)?;
    if let Some(timeout) = connect_timeout {
        easy.connect_timeout(timeout)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    let size = parse_content_length(&headers).or_else(|| {
        easy.content_length_download()
            .ok()
            .filter(|n| *n >= 0.0)
            .map(|n| n as u64)
    });
    tracing::debug!("probe {} -> size {:?}", url, size);
    Ok(size)
}

/// Last parseable `Content-Length` among the collected header lines
/// (the last one wins across a redirect chain).
fn parse_content_length(lines: &[String]) -> Option<u64> {
    let mut content_length = None;
    for line in lines {
        if let Some((name, value)) = line.trim().split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                if let Ok(n) = value.trim().parse::<u64>() {
                    content_length = Some(n);
                }
            }
        }
    }
    content_length
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ftp_style_size_line() {
        let h = lines(&["Content-Length: 1048576", "Accept-ranges: bytes"]);
        assert_eq!(parse_content_length(&h), Some(1048576));
    }

    #[test]
    fn http_head_case_insensitive() {
        let h = lines(&["HTTP/1.1 200 OK", "content-length:  42 ", ""]);
        assert_eq!(parse_content_length(&h), Some(42));
    }

    #[test]
    fn last_value_wins_after_redirect() {
        let h = lines(&[
            "HTTP/1.1 302 Found",
            "Content-Length: 0",
            "Location: /real",
            "",
            "HTTP/1.1 200 OK",
            "Content-Length: 999",
        ]);
        assert_eq!(parse_content_length(&h), Some(999));
    }

    #[test]
    fn missing_or_garbage() {
        assert_eq!(parse_content_length(&lines(&["HTTP/1.1 200 OK"])), None);
        assert_eq!(parse_content_length(&lines(&["Content-Length: lots"])), None);
    }
}
