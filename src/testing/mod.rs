mod fake_version_check;
mod memory_readme_store;
mod scripted_interaction;

pub use fake_version_check::FakeVersionCheck;
pub use memory_readme_store::MemoryReadmeStore;
pub use scripted_interaction::ScriptedInteraction;
