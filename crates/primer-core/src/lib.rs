//! Primerの例題ライブラリ
//!
//! 型付きデータの構築と振る舞いの呼び出しを示す、互いに独立した4つの例題ユニットを提供します。
//! 各ユニットは共有状態を持たず、`Console` を通じてのみ出力します。

/// コンソール出力の抽象化
pub mod console;

/// コンソール向けの値の文字列化
pub mod inspect;

/// ジェネリックな恒等関数の例題
pub mod generics;

/// メソッドを持つクラスの例題
pub mod methods;

/// 省略可能フィールドを持つ構造的レコードの例題
pub mod objects;

/// 副作用を持つメソッド呼び出しの例題
pub mod prototype;

/// 例題ユニットのレジストリ
pub mod units;

/// 設定ファイル
pub mod config;

/// エラー型
pub mod error;

pub use console::{BufferConsole, Console, StdoutConsole};
pub use error::{PrimerError, Result};
pub use inspect::{Inspect, ObjectLiteral};
pub use units::{Unit, UnitInfo};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
