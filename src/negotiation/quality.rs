//! 品質値（qvalue）の正規化

/// `q` パラメータがない場合の品質値
pub const DEFAULT_QVALUE: f32 = 1.0;

/// `q=0`（受け入れ不可）を表す番兵値
pub const NOT_ACCEPTABLE: f32 = -1.0;

/// どのメディアレンジにもマッチしなかった候補の品質値
pub const UNMATCHED_QVALUE: f32 = 0.0;

/// 有効な品質値の最小値
pub const MIN_QVALUE: f32 = 0.001;

/// 有効な品質値の最大値
pub const MAX_QVALUE: f32 = 1.0;

/// パース直後の品質値を正規化する
///
/// RFC 9110 Section 12.4.2 に従い、品質値は 0.001 から 1 の範囲で表す。
///
/// - `0` は「受け入れ不可」として [`NOT_ACCEPTABLE`] に置き換える
/// - 範囲外の値（0 を除く 0.001 未満、または 1 超）は指定がないものとみなし
///   [`DEFAULT_QVALUE`] に戻す
/// - それ以外はそのまま返す
pub fn normalize_qvalue(raw: f32) -> f32 {
    if raw == 0.0 {
        NOT_ACCEPTABLE
    } else if raw < MIN_QVALUE || raw > MAX_QVALUE {
        DEFAULT_QVALUE
    } else {
        raw
    }
}
