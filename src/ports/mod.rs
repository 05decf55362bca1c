mod interaction;
mod readme_store;
mod version_check;

pub use interaction::{Interaction, Status};
pub use readme_store::ReadmeStore;
pub use version_check::VersionCheck;
