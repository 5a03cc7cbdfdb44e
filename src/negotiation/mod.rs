//! コンテンツネゴシエーションの実装（分割モジュール）

pub mod quality;
pub mod media_range;
pub mod preference;
pub mod core;

pub use quality::{normalize_qvalue, DEFAULT_QVALUE, NOT_ACCEPTABLE, UNMATCHED_QVALUE};
pub use media_range::{parse_accept_header, ParsedMediaRange, WILDCARD};
pub use preference::{compare, precedes, sort_by_preference};
pub use core::{explain, negotiate, negotiate_content_type, rank_candidates, Explanation};
