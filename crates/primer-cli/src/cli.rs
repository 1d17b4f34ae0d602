/*
 * Primer CLI - コマンドライン引数処理モジュール
 *
 * コマンドライン引数を解析し、例題ユニットの実行と一覧表示に変換します。
 */

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{debug, LevelFilter};

use primer_core::units::{self, Unit};
use primer_core::{StdoutConsole, VERSION};

/// 型付きデータ構築とメソッド呼び出しの例題を実行するCLIツール
#[derive(Parser, Debug)]
#[command(name = "primer")]
#[command(author = "Primer開発チーム")]
#[command(version = VERSION)]
#[command(about = "例題ユニットの実行", long_about = None)]
pub struct Cli {
    /// 詳細なログ出力を有効にする
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// エラー以外のログを抑制する
    #[arg(short, long, global = true, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,

    /// 設定ファイルへのパス (省略時は ./primer.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 設定ファイルの読み込み失敗をエラーとして扱う
    #[arg(long, global = true, default_value = "false")]
    pub strict: bool,

    /// カラー出力を無効にする
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// サブコマンド
    #[command(subcommand)]
    pub command: Commands,
}

/// Primerのサブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 指定したユニットを順に実行
    Run(RunArgs),

    /// 全ユニットを実行
    All,

    /// ユニットを一覧表示
    List(ListArgs),
}

/// 実行サブコマンドの引数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// 実行するユニット名 (generics, methods, objects, prototype)
    #[arg(required = true, value_name = "UNIT")]
    pub units: Vec<String>,
}

/// 一覧サブコマンドの引数
#[derive(Args, Debug)]
pub struct ListArgs {
    /// JSON形式で出力
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Cli {
    /// フラグと設定からログレベルを決定する
    pub fn log_level(&self, configured: LevelFilter) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            configured
        }
    }
}

/// サブコマンドを実行
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run_units(args),
        Commands::All => {
            let mut console = StdoutConsole::new();
            units::run_all(&mut console);
            Ok(())
        }
        Commands::List(args) => list_units(args),
    }
}

fn run_units(args: &RunArgs) -> Result<()> {
    // 実行前に全ての名前を解決する
    let selected = args
        .units
        .iter()
        .map(|name| name.parse::<Unit>())
        .collect::<Result<Vec<_>, _>>()?;

    debug!("実行するユニット: {:?}", selected);

    let mut console = StdoutConsole::new();
    for unit in selected {
        unit.run(&mut console);
    }
    Ok(())
}

fn list_units(args: &ListArgs) -> Result<()> {
    let infos = units::list();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let json = serde_json::to_string_pretty(&infos).context("ユニット一覧のJSON変換に失敗しました")?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    for info in infos {
        writeln!(out, "{} {}", format!("{:<10}", info.name).green().bold(), info.description)?;
    }
    Ok(())
}
