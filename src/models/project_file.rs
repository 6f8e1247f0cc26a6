use std::fmt;

/// The four files every generated project contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectFileKind {
    EntryScript,
    Requirements,
    Dockerfile,
    Makefile,
}

impl ProjectFileKind {
    /// Write order used by the generator
    pub const ALL: [Self; 4] = [
        Self::EntryScript,
        Self::Requirements,
        Self::Dockerfile,
        Self::Makefile,
    ];
}

impl fmt::Display for ProjectFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::EntryScript => "entry script",
            Self::Requirements => "requirements",
            Self::Dockerfile => "Dockerfile",
            Self::Makefile => "Makefile",
        };
        write!(f, "{label}")
    }
}

/// A rendered file, ready to be written into the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub kind: ProjectFileKind,
    /// Name relative to the project directory
    pub file_name: String,
    pub contents: String,
}

impl ProjectFile {
    pub fn new(kind: ProjectFileKind, file_name: impl Into<String>, contents: String) -> Self {
        Self {
            kind,
            file_name: file_name.into(),
            contents,
        }
    }
}
