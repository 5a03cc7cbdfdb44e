//! エラー型の定義

use thiserror::Error;

/// クレート内部のエラー型
///
/// ネゴシエーション自体は失敗しないため、メディアレンジ系のバリアントは
/// 呼び出し元へは返らず、該当トークンを破棄する理由としてのみ使われる。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// `/` を含まないメディアレンジ
    #[error("Media range has no '/': {0}")]
    MissingSlash(String),

    /// `*/html` のようにワイルドカードタイプに具体的なサブタイプが続く
    #[error("Wildcard type with concrete subtype: {0}")]
    WildcardTypeWithSubtype(String),

    /// タイプまたはサブタイプが空
    #[error("Empty type or subtype: {0}")]
    EmptyTypeOrSubtype(String),

    /// `=` を含まないパラメータ
    #[error("Parameter without '=': {0}")]
    MissingParameterValue(String),

    /// 数値として解釈できない品質値
    #[error("Invalid quality value: {0}")]
    InvalidQuality(String),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 出力のシリアライズエラー
    #[error("Failed to serialize output: {0}")]
    Serialization(String),
}

impl Error {
    /// CLIの終了コードを取得
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Configuration(_) => 2,
            _ => 1,
        }
    }
}
