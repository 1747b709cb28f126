//! In-memory test doubles for the ports.

mod fake_lint_runner;
mod memory_filesystem;

pub use fake_lint_runner::FakeLintRunner;
pub use memory_filesystem::MemoryFilesystem;
pub use static_template_catalog::StaticTemplateCatalog;
