use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure_attr = if secure { "; Secure" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}={value}; HttpOnly; Max-Age=3600; Path=/; SameSite=Strict{secure_attr}"
    ))
}

pub fn clear_cookie(name: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let secure_attr = if secure { "; Secure" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}=; HttpOnly; Max-Age=0; Path=/; SameSite=Strict{secure_attr}"
    ))
}
