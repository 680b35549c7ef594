use std::io::Write;

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_BLUE: &str = "\x1b[94m";
}

/// Colored line writer over any output (stdout in the binary, a buffer in tests).
pub struct Colors<W: Write> {
    out: W,
    /// Label column width for [`Colors::kv`].
    width: usize,
}

impl<W: Write> Colors<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: 22 }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn cprint(&mut self, text: &str, color: &str) {
        let _ = writeln!(self.out, "{}{}{}", color, text, cc::RESET);
    }

    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    pub fn header(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}{}{}{}", cc::BOLD, cc::CYAN, text, cc::RESET);
    }

    /// `label: value` with the label dimmed and padded.
    pub fn kv(&mut self, label: &str, value: impl std::fmt::Display) {
        let _ = writeln!(
            self.out,
            "{}{:<width$}{} {}",
            cc::LIGHT_GRAY,
            format!("{label}:"),
            cc::RESET,
            value,
            width = self.width
        );
    }

    pub fn flag(&mut self, label: &str, ok: bool) {
        let (color, word) = if ok { (cc::GREEN, "yes") } else { (cc::RED, "no") };
        self.kv(label, format!("{color}{word}{}", cc::RESET));
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut Colors<Vec<u8>>)) -> String {
        let mut c = Colors::new(Vec::new());
        f(&mut c);
        String::from_utf8(c.into_inner()).unwrap()
    }

    #[test]
    fn cprint_wraps_in_color() {
        let out = written(|c| c.cprint("hello", cc::LIGHT_BLUE));
        assert_eq!(out, format!("{}hello{}\n", cc::LIGHT_BLUE, cc::RESET));
    }

    #[test]
    fn kv_pads_label() {
        let out = written(|c| c.kv("block", 42));
        assert!(out.contains("block:"));
        assert!(out.ends_with(" 42\n"));
        let mut c = Colors::new(Vec::new()).with_width(8);
        c.kv("ab", "x");
        let narrow = String::from_utf8(c.into_inner()).unwrap();
        assert!(narrow.contains("ab:     "));
    }

    #[test]
    fn flags_color_the_answer() {
        let out = written(|c| {
            c.flag("success", true);
            c.flag("stale", false);
        });
        assert!(out.contains(&format!("{}yes", cc::GREEN)));
        assert!(out.contains(&format!("{}no", cc::RED)));
    }
}
