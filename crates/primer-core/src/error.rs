//! # エラー型
//!
//! 例題ユニット自体は失敗しません。エラーはユニット名の解決と設定ファイルの読み込みでのみ発生します。

use std::path::PathBuf;
use thiserror::Error;

/// Primerのエラー型
#[derive(Error, Debug)]
pub enum PrimerError {
    /// 存在しないユニット名
    #[error("不明なユニット: '{0}' (利用可能: generics, methods, objects, prototype)")]
    UnknownUnit(String),

    /// 設定ファイルの読み込みまたは解析の失敗
    #[error("設定ファイルエラー [パス: {}]: {message}", .path.display())]
    Config {
        path: PathBuf,
        message: String,
    },
}

/// 結果型のエイリアス
pub type Result<T, E = PrimerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PrimerError::UnknownUnit("classes".to_string());
        assert!(err.to_string().contains("'classes'"));

        let err = PrimerError::Config {
            path: PathBuf::from("primer.toml"),
            message: "invalid".to_string(),
        };
        assert!(err.to_string().contains("primer.toml"));
        assert!(err.to_string().contains("invalid"));
    }
}
