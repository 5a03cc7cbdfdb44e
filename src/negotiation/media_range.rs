//! `Accept` ヘッダーのトークン分割とメディアレンジ解析

use log::debug;
use serde::Serialize;

use super::quality::{normalize_qvalue, DEFAULT_QVALUE, NOT_ACCEPTABLE};
use crate::common::utils::{normalize_token, parse_float, trim};
use crate::error::Error;

/// ワイルドカード
pub const WILDCARD: &str = "*";

/// 解析済みのメディアレンジ
///
/// 受け入れ側（`Accept` ヘッダーの各要素）と候補側（サーバーが返せる
/// コンテンツタイプ）の両方をこの型で表す。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedMediaRange {
    /// トリム・小文字化済みのメディアレンジ（例: `text/html`, `*/*`）
    pub range: String,
    /// `/` より前
    #[serde(rename = "type")]
    pub media_type: String,
    /// `/` より後
    pub subtype: String,
    /// 品質値
    pub qvalue: f32,
    /// 元の並びでの位置（同順位のときの決定的なタイブレーク）
    pub order: usize,
}

impl ParsedMediaRange {
    /// `type/subtype` 部分だけを解析する（パラメータは扱わない）
    ///
    /// トリムと小文字化の後、最初の `/` で分割する。
    /// `text/` や `/html`、空白だけのトークンのようにタイプかサブタイプが
    /// 空になるものは意図的にエラーとする（解析済みの値は常に両方が空でない）。
    pub fn from_range(raw: &str, qvalue: f32, order: usize) -> Result<Self, Error> {
        let range = normalize_token(raw);
        let (media_type, subtype) = match range.split_once('/') {
            Some((t, s)) => (t.to_string(), s.to_string()),
            None => return Err(Error::MissingSlash(range)),
        };

        if media_type == WILDCARD && subtype != WILDCARD {
            return Err(Error::WildcardTypeWithSubtype(range));
        }
        if media_type.is_empty() || subtype.is_empty() {
            return Err(Error::EmptyTypeOrSubtype(range));
        }

        Ok(Self {
            range,
            media_type,
            subtype,
            qvalue,
            order,
        })
    }

    /// `Accept` ヘッダーの1要素（カンマ区切りの1トークン）を解析する
    ///
    /// `=` のないパラメータや数値として読めない `q` があれば、
    /// そのトークン全体が無効になる。`q` / `Q` 以外のパラメータは読み捨てる。
    pub fn parse(token: &str, order: usize) -> Result<Self, Error> {
        let mut segments = split_segments(trim(token));
        let range = segments.next().unwrap_or("");
        let mut parsed = Self::from_range(range, DEFAULT_QVALUE, order)?;

        for param in segments {
            let param = trim(param);
            let (key, value) = param
                .split_once('=')
                .ok_or_else(|| Error::MissingParameterValue(param.to_string()))?;

            let key = trim(key);
            if key == "q" || key == "Q" {
                let value = trim(value);
                let raw = parse_float(value)
                    .ok_or_else(|| Error::InvalidQuality(value.to_string()))?;
                parsed.qvalue = normalize_qvalue(raw);
            }
        }

        Ok(parsed)
    }

    /// タイプが `*` かどうか
    pub fn is_wildcard_type(&self) -> bool {
        self.media_type == WILDCARD
    }

    /// サブタイプが `*` かどうか
    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == WILDCARD
    }

    /// `q=0` で明示的に拒否されているかどうか
    pub fn is_not_acceptable(&self) -> bool {
        self.qvalue == NOT_ACCEPTABLE
    }
}

/// `;` で分割する。末尾の `;` が生む空要素は1つだけ無視する。
fn split_segments(token: &str) -> impl Iterator<Item = &str> {
    let body = token.strip_suffix(';').unwrap_or(token);
    body.split(';')
}

/// `Accept` ヘッダーの値を解析し、有効なメディアレンジを出現順に返す
///
/// 無効なトークンは個別に捨てる。`order` は捨てたトークンも含めた
/// カンマ区切りでの位置になる。並べ替えは行わない。
pub fn parse_accept_header(header: &str) -> Vec<ParsedMediaRange> {
    if header.is_empty() {
        return Vec::new();
    }

    header
        .split(',')
        .enumerate()
        .filter_map(|(order, token)| match ParsedMediaRange::parse(token, order) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("Discarding accept token #{} {:?}: {}", order, token, e);
                None
            }
        })
        .collect()
}
