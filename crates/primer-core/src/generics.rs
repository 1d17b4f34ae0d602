//! # ジェネリクスの例題
//!
//! 型パラメータを持つ恒等関数です。引数の型がそのまま戻り値の型として推論されます。

use log::debug;

use crate::console::Console;

/// 引数をそのまま返す
pub fn identity<T>(arg: T) -> T {
    arg
}

/// スクリプト上の型名を持つ型
pub trait TypeName {
    /// 型名を取得
    fn type_name() -> &'static str;
}

// 基本型に対するTypeNameトレイトの実装
macro_rules! impl_type_name {
    ($name:expr => $($type:ty),*) => {
        $(
            impl TypeName for $type {
                fn type_name() -> &'static str {
                    $name
                }
            }
        )*
    };
}

impl_type_name!("number" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
impl_type_name!("string" => String, str, char);
impl_type_name!("boolean" => bool);

impl<T: TypeName + ?Sized> TypeName for &T {
    fn type_name() -> &'static str {
        T::type_name()
    }
}

impl<T: TypeName> TypeName for Option<T> {
    fn type_name() -> &'static str {
        T::type_name()
    }
}

/// 値の型名を取得
pub fn type_of<T: TypeName + ?Sized>(_value: &T) -> &'static str {
    T::type_name()
}

/// 例題を実行する
///
/// 出力: `5`、`hello` の2行
pub fn run(console: &mut dyn Console) {
    let result1: i32 = identity(5);
    let result2: &str = identity("hello");

    debug!("result1: {}", type_of(&result1));
    debug!("result2: {}", type_of(&result2));

    console.log(&result1);
    console.log(&result2);
}
