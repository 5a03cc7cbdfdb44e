//! 共通ユーティリティとヘッダー抽出

pub mod utils;
pub mod headers;

pub use utils::{normalize_token, parse_float, to_lower_ascii, trim};
pub use headers::{accept_from_header_map, accept_from_header_table, negotiate_headers};
