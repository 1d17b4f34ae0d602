//! # メソッド呼び出しの例題
//!
//! インスタンスのメソッドを呼び出すたびに1行出力します。レコード自体は変更されません。

use crate::console::Console;
use crate::inspect::{Inspect, ObjectLiteral};

/// ブランドとモデルを持つ車
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carro {
    pub brand: String,
    pub model: String,
}

impl Carro {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
        }
    }

    /// `start` が出力するメッセージ
    pub fn start_message(&self) -> String {
        format!("{} {} está ligado!", self.brand, self.model)
    }

    /// メッセージを1行出力する
    pub fn start(&self, console: &mut dyn Console) {
        console.log(&self.start_message());
    }
}

impl Inspect for Carro {
    fn render_nested(&self) -> String {
        ObjectLiteral::named("Carro")
            .field("brand", &self.brand)
            .field("model", &self.model)
            .render()
    }
}

/// 例題を実行する
///
/// 出力: `Fusca 1975 está ligado!`
pub fn run(console: &mut dyn Console) {
    let meu_carro = Carro::new("Fusca", "1975");

    meu_carro.start(console);
}
