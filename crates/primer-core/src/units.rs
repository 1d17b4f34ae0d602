//! # 例題ユニットのレジストリ
//!
//! 4つのユニットはそれぞれ独立しており、状態を共有しません。

use std::fmt;
use std::str::FromStr;

use log::{debug, info};
use serde::Serialize;

use crate::console::Console;
use crate::error::PrimerError;
use crate::{generics, methods, objects, prototype};

/// 例題ユニット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// ジェネリックな恒等関数
    Generics,
    /// メソッドを持つクラス
    Methods,
    /// 省略可能フィールドを持つ構造的レコード
    Objects,
    /// 副作用を持つメソッド呼び出し
    Prototype,
}

impl Unit {
    /// 全ユニット (実行順)
    pub const ALL: [Unit; 4] = [Unit::Generics, Unit::Methods, Unit::Objects, Unit::Prototype];

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Generics => "generics",
            Unit::Methods => "methods",
            Unit::Objects => "objects",
            Unit::Prototype => "prototype",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Unit::Generics => "ジェネリックな恒等関数の型推論",
            Unit::Methods => "フィールドと整形メソッドを持つクラス",
            Unit::Objects => "省略可能フィールドを後から代入する構造的レコード",
            Unit::Prototype => "インスタンスメソッドによる副作用の呼び出し",
        }
    }

    pub fn info(&self) -> UnitInfo {
        UnitInfo {
            name: self.name(),
            description: self.description(),
        }
    }

    /// ユニットを実行する
    pub fn run(&self, console: &mut dyn Console) {
        debug!("ユニット '{}' を実行します", self.name());
        match self {
            Unit::Generics => generics::run(console),
            Unit::Methods => methods::run(console),
            Unit::Objects => objects::run(console),
            Unit::Prototype => prototype::run(console),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PrimerError::UnknownUnit(s.to_string()))
    }
}

/// ユニット一覧の項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// 全ユニットを順に実行する
pub fn run_all(console: &mut dyn Console) {
    for unit in Unit::ALL {
        info!("ユニット '{}' を開始します", unit);
        unit.run(console);
    }
}

/// 全ユニットの一覧
pub fn list() -> Vec<UnitInfo> {
    Unit::ALL.iter().map(Unit::info).collect()
}
