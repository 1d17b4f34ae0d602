//! # 値の文字列化
//!
//! `console.log` 相当の表示規則を実装します。
//! トップレベルの文字列はそのまま、入れ子になった文字列は引用符付きで表示されます。
//! 存在しない省略可能値は `undefined` と表示されます。

use std::fmt::Write;

/// 値が存在しないことを示す表示
pub const UNDEFINED: &str = "undefined";

/// コンソール表示可能な値
pub trait Inspect {
    /// 入れ子の位置に置かれたときの表示
    fn render_nested(&self) -> String;

    /// トップレベルで出力されるときの表示
    fn display(&self) -> String {
        self.render_nested()
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn render_nested(&self) -> String {
        (**self).render_nested()
    }

    fn display(&self) -> String {
        (**self).display()
    }
}

impl Inspect for str {
    fn render_nested(&self) -> String {
        quote(self)
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl Inspect for String {
    fn render_nested(&self) -> String {
        self.as_str().render_nested()
    }

    fn display(&self) -> String {
        self.clone()
    }
}

impl Inspect for bool {
    fn render_nested(&self) -> String {
        self.to_string()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn render_nested(&self) -> String {
        match self {
            Some(value) => value.render_nested(),
            None => UNDEFINED.to_string(),
        }
    }

    fn display(&self) -> String {
        match self {
            Some(value) => value.display(),
            None => UNDEFINED.to_string(),
        }
    }
}

// 整数型はそのまま十進表記
macro_rules! impl_inspect_for_integers {
    ($($type:ty),*) => {
        $(
            impl Inspect for $type {
                fn render_nested(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_inspect_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Inspect for f64 {
    fn render_nested(&self) -> String {
        format_number(*self)
    }
}

impl Inspect for f32 {
    fn render_nested(&self) -> String {
        format_number(f64::from(*self))
    }
}

/// 数値を表示形式に変換する
///
/// 整数値の浮動小数点数は小数部なしで表示されます (`30.0` は `30`)。
/// 絶対値が `1e21` 以上または `1e-6` 未満の値は指数表記になります (`1e+21`, `1e-7`)。
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value != 0.0 && (value.abs() >= 1e21 || value.abs() < 1e-6) {
        format_exponent(value)
    } else {
        format!("{}", value)
    }
}

// `{:e}` は最短の仮数を出力するが、正の指数に `+` が付かない
fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// 文字列を二重引用符で囲み、必要な文字をエスケープする
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// オブジェクトリテラル形式の表示
///
/// キーは追加された順に並びます。クラス名が設定されている場合は先頭に付きます。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ObjectLiteral {
    class_name: Option<&'static str>,
    fields: Vec<(&'static str, String)>,
}

impl ObjectLiteral {
    /// 名前のないリテラル
    pub fn new() -> Self {
        Self::default()
    }

    /// クラスのインスタンスとしてのリテラル
    pub fn named(class_name: &'static str) -> Self {
        Self {
            class_name: Some(class_name),
            fields: Vec::new(),
        }
    }

    /// フィールドを追加する
    pub fn field(mut self, key: &'static str, value: &dyn Inspect) -> Self {
        self.fields.push((key, value.render_nested()));
        self
    }

    /// 値が存在する場合のみフィールドを追加する
    pub fn optional_field<T: Inspect>(self, key: &'static str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(name) = self.class_name {
            out.push_str(name);
            out.push(' ');
        }
        if self.fields.is_empty() {
            out.push_str("{}");
            return out;
        }
        out.push_str("{ ");
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            // String への書き込みは失敗しない
            let _ = write!(out, "{}: {}", key, value);
        }
        out.push_str(" }");
        out
    }
}

impl Inspect for ObjectLiteral {
    fn render_nested(&self) -> String {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings() {
        assert_eq!("hello".display(), "hello");
        assert_eq!("hello".render_nested(), "\"hello\"");
        assert_eq!(String::from("João").render_nested(), "\"João\"");
        assert_eq!("a\"b\\c".render_nested(), r#""a\"b\\c""#);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(5_i32.render_nested(), "5");
        assert_eq!(30.0_f64.render_nested(), "30");
        assert_eq!(1.5_f64.render_nested(), "1.5");
        assert_eq!((-0.0_f64).render_nested(), "-0");
        assert_eq!(f64::NAN.render_nested(), "NaN");
        assert_eq!(f64::INFINITY.render_nested(), "Infinity");
        assert_eq!(f64::NEG_INFINITY.render_nested(), "-Infinity");
        assert_eq!(0.25_f32.render_nested(), "0.25");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(1e21_f64.render_nested(), "1e+21");
        assert_eq!((-1e21_f64).render_nested(), "-1e+21");
        assert_eq!(1.5e300_f64.render_nested(), "1.5e+300");
        assert_eq!(1e-7_f64.render_nested(), "1e-7");
        assert_eq!(2.5e-8_f64.render_nested(), "2.5e-8");

        // 境界の内側は通常表記
        assert_eq!(1e20_f64.render_nested(), "100000000000000000000");
        assert_eq!(1e-6_f64.render_nested(), "0.000001");
        assert_eq!(0.0_f64.render_nested(), "0");
    }

    #[test]
    fn test_control_characters_are_escaped() {
        assert_eq!("a\u{1}b".render_nested(), r#""a\x01b""#);
        assert_eq!("\u{7f}".render_nested(), r#""\x7f""#);
        assert_eq!("\u{1b}[0m".render_nested(), r#""\x1b[0m""#);
        assert_eq!("tab\there".render_nested(), r#""tab\there""#);
        assert_eq!("\u{1}".display(), "\u{1}");
    }

    #[test]
    fn test_absent_value_is_undefined() {
        let absent: Option<&str> = None;
        assert_eq!(absent.render_nested(), UNDEFINED);
        assert_eq!(absent.display(), UNDEFINED);
        assert_eq!(Some("x").render_nested(), "\"x\"");
        assert_eq!(Some("x").display(), "x");

        let absent_number: Option<f64> = None;
        assert_eq!(absent_number.render_nested(), UNDEFINED);
    }

    #[test]
    fn test_object_literal() {
        assert_eq!(ObjectLiteral::new().render(), "{}");
        assert_eq!(ObjectLiteral::named("Empty").render(), "Empty {}");

        let literal = ObjectLiteral::named("Point").field("x", &1_i32).field("y", &"two");
        assert_eq!(literal.render(), "Point { x: 1, y: \"two\" }");
        assert_eq!(literal.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_optional_field_is_omitted_when_absent() {
        let absent: Option<&String> = None;
        let literal = ObjectLiteral::new().field("a", &true).optional_field("b", absent);
        assert_eq!(literal.render(), "{ a: true }");
    }

    #[test]
    fn test_nested_literal() {
        let inner = ObjectLiteral::new().field("k", &"v");
        let outer = ObjectLiteral::new().field("inner", &inner);
        assert_eq!(outer.render(), "{ inner: { k: \"v\" } }");
    }
}
