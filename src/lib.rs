//! accept-negotiator: HTTP `Accept` ヘッダーによるコンテンツネゴシエーション
//!
//! クライアントの `Accept` ヘッダーの値と、サーバーが返せるコンテンツタイプの
//! 一覧から、最も望ましいコンテンツタイプを1つ選ぶ。
//!
//! ```
//! use accept_negotiator::negotiate_content_type;
//!
//! let available = ["application/json", "text/html"];
//! let selected = negotiate_content_type("text/html;q=0.9, application/json;q=0.8", &available);
//! assert_eq!(selected, "text/html");
//!
//! // ヘッダーがなければ先頭のコンテンツタイプ
//! assert_eq!(negotiate_content_type("", &available), "application/json");
//! ```
//!
//! 処理は状態を持たない純粋な関数として実装されており、スレッド間で
//! 自由に並行して呼び出せる。

pub mod common;
pub mod config;
pub mod error;
pub mod negotiation;

pub use common::{accept_from_header_map, accept_from_header_table, negotiate_headers};
pub use error::Error;
pub use negotiation::{
    explain, negotiate, negotiate_content_type, parse_accept_header, rank_candidates,
    sort_by_preference, Explanation, ParsedMediaRange,
};
