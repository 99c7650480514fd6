use serde::Serialize;

/// Languages offered in the front end's picker.
///
/// The prompt accepts any display string; this menu only supplies the
/// highlight id and file extension for known entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgrammingLanguage {
    Python,
    Java,
    C,
    Cpp,
    JavaScript,
    Go,
    Rust,
}

#[derive(Clone, Debug, Serialize)]
pub struct LanguageOption {
    pub name: &'static str,
    pub highlight: &'static str,
    pub extension: &'static str,
    pub file_name: String,
}

impl ProgrammingLanguage {
    pub const MENU: [ProgrammingLanguage; 7] = [
        ProgrammingLanguage::Python,
        ProgrammingLanguage::Java,
        ProgrammingLanguage::C,
        ProgrammingLanguage::Cpp,
        ProgrammingLanguage::JavaScript,
        ProgrammingLanguage::Go,
        ProgrammingLanguage::Rust,
    ];

    pub const DEFAULT: ProgrammingLanguage = ProgrammingLanguage::Python;

    pub fn display_name(self) -> &'static str {
        match self {
            ProgrammingLanguage::Python => "Python",
            ProgrammingLanguage::Java => "Java",
            ProgrammingLanguage::C => "C",
            ProgrammingLanguage::Cpp => "C++",
            ProgrammingLanguage::JavaScript => "JavaScript",
            ProgrammingLanguage::Go => "Go",
            ProgrammingLanguage::Rust => "Rust",
        }
    }

    pub fn highlight(self) -> &'static str {
        match self {
            ProgrammingLanguage::Python => "python",
            ProgrammingLanguage::Java => "java",
            ProgrammingLanguage::C => "c",
            ProgrammingLanguage::Cpp => "cpp",
            ProgrammingLanguage::JavaScript => "javascript",
            ProgrammingLanguage::Go => "go",
            ProgrammingLanguage::Rust => "rust",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ProgrammingLanguage::Python => "py",
            ProgrammingLanguage::Java => "java",
            ProgrammingLanguage::C => "c",
            ProgrammingLanguage::Cpp => "cpp",
            ProgrammingLanguage::JavaScript => "js",
            ProgrammingLanguage::Go => "go",
            ProgrammingLanguage::Rust => "rs",
        }
    }

    /// Menu spelling for a known language, otherwise the trimmed input.
    pub fn canonical_name(name: &str) -> String {
        Self::from_display_name(name)
            .map(|lang| lang.display_name().to_string())
            .unwrap_or_else(|| name.trim().to_string())
    }

    /// Case-insensitive lookup by display name.
    pub fn from_display_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::MENU
            .into_iter()
            .find(|lang| lang.display_name().eq_ignore_ascii_case(name))
    }

    pub fn option(self) -> LanguageOption {
        LanguageOption {
            name: self.display_name(),
            highlight: self.highlight(),
            extension: self.extension(),
            file_name: self.solution_file_name(),
        }
    }

    pub fn solution_file_name(self) -> String {
        format!("solution.{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            ProgrammingLanguage::from_display_name("c++"),
            Some(ProgrammingLanguage::Cpp)
        );
        assert_eq!(
            ProgrammingLanguage::from_display_name(" javascript "),
            Some(ProgrammingLanguage::JavaScript)
        );
        assert_eq!(ProgrammingLanguage::from_display_name("COBOL"), None);
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(ProgrammingLanguage::canonical_name("python "), "Python");
        assert_eq!(ProgrammingLanguage::canonical_name(" Kotlin "), "Kotlin");
    }

    #[test]
    fn test_solution_file_name() {
        assert_eq!(ProgrammingLanguage::Cpp.solution_file_name(), "solution.cpp");
        assert_eq!(ProgrammingLanguage::Python.solution_file_name(), "solution.py");
    }
}
