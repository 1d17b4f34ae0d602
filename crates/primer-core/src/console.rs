//! # コンソール出力
//!
//! 例題ユニットはすべてこのトレイトを通じて1行ずつ出力します。
//! 出力は同期的で、呼び出し順がそのまま行の順序になります。

use crate::inspect::Inspect;

/// 行単位の出力先
pub trait Console {
    /// 1行を書き出す
    fn write_line(&mut self, line: &str);

    /// 値をトップレベル形式で文字列化し、1行として書き出す
    fn log(&mut self, value: &dyn Inspect) {
        let line = value.display();
        self.write_line(&line);
    }
}

/// 標準出力へ書き出すコンソール
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// 出力行をメモリ上に記録するコンソール
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録された行
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_records_lines_in_order() {
        let mut console = BufferConsole::new();
        assert!(console.is_empty());

        console.write_line("first");
        console.log(&5_i32);
        console.log(&"third");

        assert_eq!(console.len(), 3);
        assert_eq!(console.lines(), &["first", "5", "third"]);
    }

    #[test]
    fn test_log_uses_top_level_form() {
        let mut console = BufferConsole::new();
        console.log(&String::from("João"));
        console.log(&Some(1.5_f64));
        console.log(&None::<String>);

        assert_eq!(console.into_lines(), vec!["João", "1.5", "undefined"]);
    }

    #[test]
    fn test_clear() {
        let mut console = BufferConsole::new();
        console.write_line("x");
        console.clear();
        assert!(console.is_empty());
    }
}
