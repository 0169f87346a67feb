//! Where reports go.

/// Semantic sink for report lines.
///
/// Reports only say what kind of line they emit; the sink decides how it
/// looks and which stream it goes to.
pub trait Output {
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    fn warning(&mut self, msg: &str);

    fn error(&mut self, msg: &str);

    /// A labeled horizontal rule around preformatted text.
    fn divider(&mut self, label: &str);

    /// Text printed as-is, such as generated source.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Something that can describe itself to an [`Output`].
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the terminal: diagnostics on stderr, everything else on stdout.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Output;

    /// Keeps each rendered line so tests can compare them, streams merged.
    #[derive(Default)]
    pub struct RecordingOutput {
        pub lines: Vec<String>,
    }

    impl Output for RecordingOutput {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("{}:", name));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{}: {}", key, value));
        }

        fn list_item(&mut self, text: &str) {
            self.lines.push(format!("  - {}", text));
        }

        fn warning(&mut self, msg: &str) {
            self.lines.push(format!("warning: {}", msg));
        }

        fn error(&mut self, msg: &str) {
            self.lines.push(format!("error: {}", msg));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("── {} ──", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn newline(&mut self) {
            self.lines.push(String::new());
        }
    }
}
