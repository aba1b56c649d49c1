//! Folder classification, display labels and catalog layout.
//!
//! A single table of known folder names drives both the subject grouping and
//! the display labels so the two can never disagree.

use serde::{Deserialize, Serialize};

use crate::types::Folder;

/// Viewport width at or below which catalog sections become collapsible.
pub const COLLAPSE_BREAKPOINT: u32 = 768;

/// Subject a folder is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    English,
    Other,
}

impl Subject {
    /// Display order of catalog sections.
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::English, Subject::Other];

    pub fn title(self) -> &'static str {
        match self {
            Self::Math => "Math",
            Self::English => "English",
            Self::Other => "Other",
        }
    }

    /// Icon name used in the section header.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Math => "calculator",
            Self::English => "book",
            Self::Other => "folder",
        }
    }

    fn path_prefix(self) -> Option<&'static str> {
        match self {
            Self::Math => Some("math/"),
            Self::English => Some("eng/"),
            Self::Other => None,
        }
    }
}

struct KnownFolder {
    name: &'static str,
    subject: Subject,
    label: Option<&'static str>,
}

#[rustfmt::skip]
const KNOWN_FOLDERS: &[KnownFolder] = &[
    KnownFolder { name: "algebra", subject: Subject::Math, label: None },
    KnownFolder { name: "geometry", subject: Subject::Math, label: None },
    KnownFolder { name: "advancedmath", subject: Subject::Math, label: Some("Advanced Math") },
    KnownFolder { name: "problemsolving", subject: Subject::Math, label: Some("Problem Solving") },
    KnownFolder { name: "craftandstructure", subject: Subject::English, label: Some("Craft and Structure") },
    KnownFolder { name: "expressionofidea", subject: Subject::English, label: Some("Expression of Ideas") },
    KnownFolder { name: "informationandideas", subject: Subject::English, label: Some("Information and Ideas") },
    KnownFolder { name: "standardenglish", subject: Subject::English, label: Some("Standard English") },
];

fn known(name: &str) -> Option<&'static KnownFolder> {
    KNOWN_FOLDERS.iter().find(|k| k.name == name)
}

fn normalize_path(name: &str) -> String {
    name.replace('\\', "/").to_lowercase()
}

/// Subject for a folder path such as `math/algebra` or `standardEnglish`.
pub fn classify(name: &str) -> Subject {
    let path = normalize_path(name);
    for subject in [Subject::Math, Subject::English] {
        if subject.path_prefix().is_some_and(|p| path.starts_with(p)) {
            return subject;
        }
    }
    known(&path).map_or(Subject::Other, |k| k.subject)
}

/// Last path segment of a folder name.
pub fn leaf_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Human readable label for a folder name.
pub fn format_folder_name(name: &str) -> String {
    let leaf = leaf_name(name);
    if let Some(label) = known(&leaf.to_lowercase()).and_then(|k| k.label) {
        return label.to_string();
    }

    leaf.replace(['_', '-'], " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A non-empty group of folders sharing a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderCategory {
    pub subject: Subject,
    pub folders: Vec<Folder>,
}

/// Partition folders by subject, keeping input order and dropping empty groups.
pub fn group_folders(folders: &[Folder]) -> Vec<FolderCategory> {
    Subject::ALL
        .iter()
        .map(|&subject| FolderCategory {
            subject,
            folders: folders
                .iter()
                .filter(|f| classify(&f.name) == subject)
                .cloned()
                .collect(),
        })
        .filter(|c| !c.folders.is_empty())
        .collect()
}

/// Header counters for the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub folder_count: usize,
    pub total_questions: u64,
}

impl CatalogStats {
    pub fn from_folders(folders: &[Folder]) -> Self {
        Self {
            folder_count: folders.len(),
            total_questions: folders.iter().map(|f| f.count).sum(),
        }
    }
}

/// Collapse state of the rendered catalog sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLayout {
    collapsible: bool,
    collapsed: Vec<bool>,
}

impl CatalogLayout {
    /// Fresh layout for `sections` sections at the given viewport width.
    ///
    /// Narrow viewports collapse every section but the first.
    pub fn for_viewport(sections: usize, viewport_width: u32) -> Self {
        let collapsible = viewport_width <= COLLAPSE_BREAKPOINT;
        Self {
            collapsible,
            collapsed: (0..sections).map(|i| collapsible && i > 0).collect(),
        }
    }

    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed.get(index).copied().unwrap_or(false)
    }

    /// Flip a section. Returns false when the layout is not collapsible or the
    /// index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.collapsible {
            return false;
        }
        match self.collapsed.get_mut(index) {
            Some(flag) => {
                *flag = !*flag;
                true
            }
            None => false,
        }
    }
}
