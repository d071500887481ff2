//! Minimal `Cookie` / `Set-Cookie` handling for the session id.

use axum::http::{header, HeaderMap};

/// Returns the value of cookie `name` from the request's `Cookie` headers.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(value) = value.to_str() else {
            continue;
        };
        for part in value.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some((k, v)) = part.split_once('=') {
                if k.trim() == name {
                    return Some(v.trim().to_string());
                }
            }
        }
    }
    None
}

pub fn session_cookie(name: &str, value: &str, max_age_seconds: i64, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_get_cookie_among_several() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark; campus_session=abc-123 ; lang=ja"));
        assert_eq!(get_cookie(&headers, "campus_session"), Some("abc-123".to_string()));
        assert_eq!(get_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_get_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::COOKIE, HeaderValue::from_static("b=2"));
        assert_eq!(get_cookie(&headers, "b"), Some("2".to_string()));
    }

    #[test]
    fn test_session_cookie_attributes() {
        let plain = session_cookie("sid", "xyz", 60, false);
        assert_eq!(plain, "sid=xyz; Path=/; HttpOnly; SameSite=Lax; Max-Age=60");
        assert!(session_cookie("sid", "xyz", 60, true).ends_with("; Secure"));
    }
}
