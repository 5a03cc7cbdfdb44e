//! メディアレンジの優先順位付け

use std::cmp::Ordering;

use super::media_range::ParsedMediaRange;

/// `a` を `b` より優先すべきかどうか
///
/// 1. 品質値が高い方
/// 2. タイプが異なる場合は `*` の方、どちらも同じ種類なら出現順
/// 3. サブタイプが異なる場合は `*` の方、どちらも同じ種類なら出現順
/// 4. 出現順
///
/// 品質値が同じときにワイルドカードが具体的な型より前に来る点に注意。
pub fn precedes(a: &ParsedMediaRange, b: &ParsedMediaRange) -> bool {
    if a.qvalue != b.qvalue {
        return a.qvalue > b.qvalue;
    }

    if a.media_type != b.media_type {
        return match (a.is_wildcard_type(), b.is_wildcard_type()) {
            (true, false) => true,
            (false, true) => false,
            _ => a.order < b.order,
        };
    }

    if a.subtype != b.subtype {
        return match (a.is_wildcard_subtype(), b.is_wildcard_subtype()) {
            (true, false) => true,
            (false, true) => false,
            _ => a.order < b.order,
        };
    }

    a.order < b.order
}

/// [`precedes`] を `Ordering` として表したもの（前に来る方が `Less`）
pub fn compare(a: &ParsedMediaRange, b: &ParsedMediaRange) -> Ordering {
    if precedes(a, b) {
        Ordering::Less
    } else if precedes(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// 優先順に並べ替える（安定な挿入ソート）
///
/// 対象はヘッダー1つ分の要素数なので二乗で構わない。[`compare`] は
/// 入力によっては厳密弱順序にならないため、`sort_by` は使わない。
pub fn sort_by_preference(ranges: &mut [ParsedMediaRange]) {
    for i in 1..ranges.len() {
        let mut j = i;
        while j > 0 && compare(&ranges[i], &ranges[j - 1]) == Ordering::Less {
            j -= 1;
        }
        ranges[j..=i].rotate_right(1);
    }
}
