/// The five statements rendered for every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// Single row by UUID key.
    Get,
    /// Row count.
    Count,
    /// Page of rows, newest first.
    Fetch,
    /// Delete by UUID key.
    Remove,
    /// Insert one row.
    Insert,
}

impl StatementKind {
    pub const ALL: [StatementKind; 5] = [
        StatementKind::Get,
        StatementKind::Count,
        StatementKind::Fetch,
        StatementKind::Remove,
        StatementKind::Insert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Get => "get",
            StatementKind::Count => "count",
            StatementKind::Fetch => "fetch",
            StatementKind::Remove => "remove",
            StatementKind::Insert => "insert",
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
