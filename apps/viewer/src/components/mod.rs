//! Page components. Each owns its state and draws only its own elements.

pub mod browser;
pub mod catalog;
pub mod shell;
pub mod viewer;

pub use browser::QuestionBrowser;
pub use catalog::FolderCatalog;
pub use shell::{shortcut_for, Key, KeyPress, Shell, Shortcut};
pub use viewer::QuestionViewer;
