//! 受け入れ可能なメディアレンジと利用可能なコンテンツタイプの突き合わせ

use log::{debug, trace};
use serde::Serialize;

use super::media_range::{parse_accept_header, ParsedMediaRange};
use super::preference::sort_by_preference;
use super::quality::UNMATCHED_QVALUE;

/// 利用可能なコンテンツタイプそれぞれの実効品質値を求め、優先順に並べて返す
///
/// `accepted` は [`sort_by_preference`] で並べ替え済みであること。
/// `/` を含まないなど解析できない候補は結果に含まれない。
pub fn rank_candidates<S: AsRef<str>>(
    accepted: &[ParsedMediaRange],
    available: &[S],
) -> Vec<ParsedMediaRange> {
    let mut candidates = Vec::with_capacity(available.len());

    for raw in available {
        let raw = raw.as_ref();
        let mut candidate =
            match ParsedMediaRange::from_range(raw, UNMATCHED_QVALUE, candidates.len()) {
                Ok(candidate) => candidate,
                Err(e) => {
                    debug!("Skipping available content type {:?}: {}", raw, e);
                    continue;
                }
            };

        let mut match_found = false;
        for range in accepted {
            if range.media_type == candidate.media_type
                && (range.subtype == candidate.subtype
                    || (range.is_wildcard_subtype() && !match_found))
            {
                // type/subtype または type/*
                candidate.qvalue = range.qvalue;
                match_found = true;
            } else if range.is_wildcard_type() && !match_found {
                // */* は後続のより具体的なマッチで上書きされうる
                candidate.qvalue = range.qvalue;
            }
        }

        trace!(
            "Candidate {} scored q={} (matched range: {})",
            candidate.range,
            candidate.qvalue,
            match_found
        );
        candidates.push(candidate);
    }

    sort_by_preference(&mut candidates);
    candidates
}

/// 受け入れ可能なメディアレンジに照らして、利用可能なコンテンツタイプから
/// 最も望ましいものを1つ選ぶ
///
/// `accepted` が空、または候補が1つも作れなかった場合は `available` の
/// 先頭要素を手を加えずに返す。`available` も空なら空文字列を返す。
/// `q=0` で拒否されたタイプでも、他に選択肢がなければ返される。
pub fn negotiate<S: AsRef<str>>(accepted: &[ParsedMediaRange], available: &[S]) -> String {
    if accepted.is_empty() {
        return first_available(available);
    }

    match rank_candidates(accepted, available).into_iter().next() {
        Some(best) => best.range,
        None => first_available(available),
    }
}

/// `Accept` ヘッダーの値から直接ネゴシエーションする
///
/// ヘッダーの解析、優先順位での並べ替え、候補との突き合わせを順に行う。
/// 失敗することはなく、常に文字列を返す。
pub fn negotiate_content_type<S: AsRef<str>>(accept: &str, available: &[S]) -> String {
    let mut accepted = parse_accept_header(accept);
    sort_by_preference(&mut accepted);
    let selected = negotiate(&accepted, available);
    debug!("Negotiated {:?} for Accept {:?}", selected, accept);
    selected
}

fn first_available<S: AsRef<str>>(available: &[S]) -> String {
    available
        .first()
        .map(|s| s.as_ref().to_string())
        .unwrap_or_default()
}

/// ネゴシエーションの経過（CLIのJSON出力用）
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    /// 選ばれたコンテンツタイプ
    pub selected: String,
    /// 優先順に並べた受け入れ可能なメディアレンジ
    pub accepted: Vec<ParsedMediaRange>,
    /// 優先順に並べた候補と実効品質値
    pub candidates: Vec<ParsedMediaRange>,
}

/// [`negotiate_content_type`] と同じ選択を行い、途中の順位付けも返す
pub fn explain<S: AsRef<str>>(accept: &str, available: &[S]) -> Explanation {
    let mut accepted = parse_accept_header(accept);
    sort_by_preference(&mut accepted);
    let candidates = if accepted.is_empty() {
        Vec::new()
    } else {
        rank_candidates(&accepted, available)
    };
    let selected = match candidates.first() {
        Some(best) => best.range.clone(),
        None => first_available(available),
    };

    Explanation {
        selected,
        accepted,
        candidates,
    }
}
