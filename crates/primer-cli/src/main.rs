/*
 * Primer CLI - メインエントリーポイント
 *
 * 例題ユニットを実行するCLIツールのエントリーポイントです。
 * コマンドライン引数の解析、設定の読み込み、ロギングの初期化を行い、
 * サブコマンドの処理を呼び出します。
 *
 * ユニットの出力は標準出力へ、ログは標準エラー出力へ書き出されます。
 */

use clap::Parser;
use env_logger::Builder;
use log::{error, info, warn, LevelFilter};
use std::process;

use primer_core::config::Config;

mod cli;

fn main() -> anyhow::Result<()> {
    // コマンドライン引数の解析
    let cli = cli::Cli::parse();

    // 設定ファイルの読み込み (ロギング初期化後に結果を報告する)
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let loaded = Config::load(&config_path);

    let config_level = loaded
        .as_ref()
        .ok()
        .and_then(|config| config.general.level_filter())
        .unwrap_or(LevelFilter::Info);

    // ロギングの初期化
    let mut builder = Builder::new();
    builder.filter_level(cli.log_level(config_level));
    builder.init();

    let config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("設定ファイルの読み込みに失敗しました: {}", e);
            if cli.strict {
                process::exit(1);
            }
            Config::default()
        }
    };

    if config.general.level_filter().is_none() {
        warn!("不明なログレベル '{}'、info を使用します", config.general.log_level);
    }

    if cli.no_color || !config.general.color {
        colored::control::set_override(false);
    }

    info!("Primer v{} を起動しています", primer_core::VERSION);

    match cli::run(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("実行エラー: {}", e);
            Err(e)
        }
    }
}
