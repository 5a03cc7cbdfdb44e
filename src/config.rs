//! CLIの設定（コマンドライン引数と環境変数）

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 出力形式を指定する環境変数
pub const OUTPUT_ENV: &str = "NEGOTIATE_OUTPUT";

/// 使い方
pub const USAGE: &str = "usage: negotiate <ACCEPT> [CONTENT_TYPE]...";

/// 出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 選ばれたコンテンツタイプのみ
    #[default]
    Plain,
    /// 順位付けの経過を含むJSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Configuration(format!(
                "unknown output format '{}' (expected 'plain' or 'json')",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// 出力形式を取得する
/// 優先順位: 環境変数 `NEGOTIATE_OUTPUT` -> デフォルト `plain`
pub fn get_output_format() -> Result<OutputFormat, Error> {
    match env::var(OUTPUT_ENV) {
        Ok(value) => value.parse(),
        Err(_) => Ok(OutputFormat::default()),
    }
}

/// CLIの実行設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `Accept` ヘッダーの値（空文字列はヘッダーなし）
    pub accept: String,
    /// 利用可能なコンテンツタイプ（優先順）
    pub available: Vec<String>,
    /// 出力形式
    pub output: OutputFormat,
}

impl Config {
    /// プログラム名を除いた引数列と環境変数から設定を構築
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let accept = args
            .next()
            .ok_or_else(|| Error::Configuration("missing <ACCEPT> argument".to_string()))?;

        Ok(Self {
            accept,
            available: args.collect(),
            output: get_output_format()?,
        })
    }

    /// `std::env::args` から設定を構築
    pub fn from_env() -> Result<Self, Error> {
        Self::from_args(env::args().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_config_defaults_to_plain() {
        temp_env::with_var_unset(OUTPUT_ENV, || {
            let config = Config::from_args(args(&["text/*", "text/html", "application/json"])).unwrap();
            assert_eq!(config.accept, "text/*");
            assert_eq!(config.available, vec!["text/html", "application/json"]);
            assert_eq!(config.output, OutputFormat::Plain);
        });
    }

    #[test]
    fn test_config_reads_output_env() {
        temp_env::with_var(OUTPUT_ENV, Some("json"), || {
            let config = Config::from_args(args(&[""])).unwrap();
            assert_eq!(config.accept, "");
            assert!(config.available.is_empty());
            assert_eq!(config.output, OutputFormat::Json);
        });
    }

    #[test]
    fn test_config_rejects_unknown_output() {
        temp_env::with_var(OUTPUT_ENV, Some("xml"), || {
            let err = Config::from_args(args(&["*/*"])).unwrap_err();
            assert_eq!(err.exit_code(), 2);
        });
    }

    #[test]
    fn test_config_requires_accept_argument() {
        temp_env::with_var_unset(OUTPUT_ENV, || {
            let err = Config::from_args(Vec::new()).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)));
            assert_eq!(err.exit_code(), 2);
        });
    }
}
