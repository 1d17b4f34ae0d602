//! # メソッドを持つクラスの例題

use crate::console::Console;
use crate::inspect::{Inspect, ObjectLiteral};

/// メーカーとモデルを持つ車
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub make: String,
    pub model: String,
}

impl Car {
    /// 引数をそのままフィールドに設定する
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }

    /// `Car: {make} {model}` 形式の文字列を返す
    pub fn display_info(&self) -> String {
        format!("Car: {} {}", self.make, self.model)
    }
}

impl Inspect for Car {
    fn render_nested(&self) -> String {
        ObjectLiteral::named("Car")
            .field("make", &self.make)
            .field("model", &self.model)
            .render()
    }
}

/// 例題を実行する
///
/// 出力: `Car: Honda Fit`
pub fn run(console: &mut dyn Console) {
    let my_car = Car::new("Honda", "Fit");

    console.log(&my_car.display_info());
}
