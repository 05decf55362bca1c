/// Which branch of the update workflow a run executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Ask the user for everything.
    Interactive,
    /// Update to the latest WordPress version.
    Latest,
    /// Update to the given version string.
    Custom(String),
}

impl RunMode {
    /// Select the mode from CLI flags; the two flags are mutually exclusive at the parser.
    pub fn from_flags(latest: bool, custom: Option<String>) -> Self {
        match (latest, custom) {
            (_, Some(version)) => RunMode::Custom(version),
            (true, None) => RunMode::Latest,
            (false, None) => RunMode::Interactive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunMode::Interactive => "interactive",
            RunMode::Latest => "latest",
            RunMode::Custom(_) => "custom",
        }
    }
}

/// Where the new value comes from when the user is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Custom,
    Latest,
}
