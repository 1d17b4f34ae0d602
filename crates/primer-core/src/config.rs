//! # 設定ファイル
//!
//! `primer.toml` から読み込まれる設定です。ファイルが存在しない場合はデフォルト設定を使用します。

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{PrimerError, Result};

/// デフォルトの設定ファイル名
pub const DEFAULT_CONFIG_FILE: &str = "primer.toml";

/// Primerの設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 一般設定
    #[serde(default)]
    pub general: GeneralConfig,
}

/// 一般設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// ログレベル ("off", "error", "warn", "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// カラー出力
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_true(),
        }
    }
}

impl GeneralConfig {
    /// ログレベル名を `LevelFilter` に変換する (不明な名前は `None`)
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.parse::<LevelFilter>().ok()
    }
}

impl Config {
    /// 設定をロード
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path).map_err(|err| PrimerError::Config {
            path: path.to_path_buf(),
            message: format!("設定ファイルの読み込みに失敗しました: {}", err),
        })?;

        toml::from_str(&contents).map_err(|err| PrimerError::Config {
            path: path.to_path_buf(),
            message: format!("設定ファイルの解析に失敗しました: {}", err),
        })
    }

    /// TOML文字列から設定を解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|err| PrimerError::Config {
            path: PathBuf::from("<string>"),
            message: err.to_string(),
        })
    }

    /// カレントディレクトリの設定ファイルのパスを取得
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }
}
