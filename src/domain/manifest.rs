/// File names written by a prepare run, rendered as the target's ignore file.
///
/// Entries are kept as recorded; a name recorded twice is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreManifest {
    entries: Vec<String>,
}

impl IgnoreManifest {
    pub const FILE_NAME: &'static str = ".gitignore";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>) {
        self.entries.push(name.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted byte-wise ascending.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.entries.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// One entry per line, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in self.sorted() {
            out.push_str(entry);
            out.push('\n');
        }
        if out.is_empty() {
            out.push('\n');
        }
        out
    }
}
