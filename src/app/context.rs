use crate::ports::{Interaction, ReadmeStore, VersionCheck};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ReadmeStore, V: VersionCheck, I: Interaction> {
    field_key: String,
    readme: R,
    versions: V,
    interaction: I,
}

impl<R: ReadmeStore, V: VersionCheck, I: Interaction> AppContext<R, V, I> {
    /// Create a new application context.
    pub fn new(field_key: impl Into<String>, readme: R, versions: V, interaction: I) -> Self {
        Self { field_key: field_key.into(), readme, versions, interaction }
    }

    /// Header key being updated.
    pub fn field_key(&self) -> &str {
        &self.field_key
    }

    /// Get a reference to the readme store.
    pub fn readme(&self) -> &R {
        &self.readme
    }

    /// Get a reference to the version-check client.
    pub fn versions(&self) -> &V {
        &self.versions
    }

    /// Get a reference to the user interaction port.
    pub fn interaction(&self) -> &I {
        &self.interaction
    }
}
