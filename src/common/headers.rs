//! リクエストヘッダーから `Accept` の値を取り出すアダプタ

use std::collections::HashMap;

use http::header::{HeaderMap, ACCEPT};
use log::warn;

use crate::negotiation::negotiate_content_type;

/// `HeaderMap` 内のすべての `Accept` ヘッダーを `", "` で連結して返す
///
/// 複数行で送られた同名ヘッダーはカンマ区切りの1つのリストとして扱う。
/// 可視ASCII以外を含む値は読み飛ばす。ヘッダーがなければ空文字列。
pub fn accept_from_header_map(headers: &HeaderMap) -> String {
    let values: Vec<&str> = headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(s) => Some(s),
            Err(e) => {
                warn!("Ignoring non-ASCII Accept header value: {}", e);
                None
            }
        })
        .collect();
    values.join(", ")
}

/// `HashMap` 形式のヘッダーから `Accept` の値を取り出す
///
/// キーは大文字小文字を区別せずに比較する。見つからなければ空文字列。
pub fn accept_from_header_table(headers: &HashMap<String, String>) -> String {
    if let Some(value) = headers.get("accept") {
        return value.clone();
    }
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("accept"))
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

/// `HeaderMap` の `Accept` ヘッダーに基づいてコンテンツタイプを選ぶ
pub fn negotiate_headers<S: AsRef<str>>(headers: &HeaderMap, available: &[S]) -> String {
    negotiate_content_type(&accept_from_header_map(headers), available)
}
