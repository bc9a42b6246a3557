/// Characters that drive splitting and cleaning of a qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameSyntax {
    pub separator: char,
    /// Each occurrence flips the literal-span flag; open and close are not told apart.
    pub enclosing: &'static [char],
    pub stripped: &'static [char],
}

impl NameSyntax {
    pub const TSQL: Self = Self {
        separator: '.',
        enclosing: &['[', ']', '"'],
        stripped: &['"', '\'', '[', ']'],
    };

    pub const MYSQL: Self = Self {
        separator: '.',
        enclosing: &['`'],
        stripped: &['`'],
    };

    pub fn named(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tsql" | "mssql" => Some(Self::TSQL),
            "mysql" => Some(Self::MYSQL),
            _ => None,
        }
    }

    pub(crate) fn is_enclosing(&self, ch: char) -> bool {
        self.enclosing.contains(&ch)
    }

    pub(crate) fn is_stripped(&self, ch: char) -> bool {
        self.stripped.contains(&ch)
    }
}

impl Default for NameSyntax {
    fn default() -> Self {
        Self::TSQL
    }
}
