//! # 構造的レコードの例題
//!
//! 必須フィールド2つと省略可能フィールド1つを持つ、振る舞いのないデータです。
//! 省略可能フィールドは構築後に代入できます。

use crate::console::Console;
use crate::inspect::{Inspect, ObjectLiteral};

/// 人物
#[derive(Debug, Clone, PartialEq)]
pub struct Pessoa {
    pub nome: String,
    pub idade: f64,
    pub sobrenome: Option<String>,
}

impl Pessoa {
    /// 必須フィールドのみで構築する
    pub fn new(nome: impl Into<String>, idade: f64) -> Self {
        Self {
            nome: nome.into(),
            idade,
            sobrenome: None,
        }
    }

    pub fn sobrenome(&self) -> Option<&str> {
        self.sobrenome.as_deref()
    }

    pub fn set_sobrenome(&mut self, sobrenome: impl Into<String>) {
        self.sobrenome = Some(sobrenome.into());
    }
}

impl Inspect for Pessoa {
    fn render_nested(&self) -> String {
        ObjectLiteral::new()
            .field("nome", &self.nome)
            .field("idade", &self.idade)
            .optional_field("sobrenome", self.sobrenome.as_ref())
            .render()
    }
}

/// 例題を実行する
///
/// 出力: `{ nome: "João", idade: 30, sobrenome: "Silva" }`
pub fn run(console: &mut dyn Console) {
    let mut pessoa = Pessoa {
        nome: "João".to_string(),
        idade: 30.0,
        sobrenome: None,
    };

    pessoa.sobrenome = Some("Silva".to_string());

    console.log(&pessoa);
}
