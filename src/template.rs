//! Source templates, one per language, with three placeholders replaced verbatim.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

pub const DATE_PLACEHOLDER: &str = "DATE";
pub const FILENAME_PLACEHOLDER: &str = "FILENAME";
pub const LINK_PLACEHOLDER: &str = "PROBLEM_LINK";

pub const DEFAULT_LANGUAGE: Language = Language::Cpp;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum Language {
    #[default]
    #[strum(serialize = "cpp")]
    Cpp,
    #[strum(serialize = "py")]
    Py,
    /// C++ without the local debug header.
    #[strum(serialize = "clean_cpp")]
    CleanCpp,
}

impl Language {
    pub fn extension(self) -> String {
        format!(".{}", self)
    }

    pub fn template(self) -> &'static str {
        match self {
            Language::Cpp => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/template.cpp")),
            Language::Py => include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/template.py")),
            Language::CleanCpp => {
                include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/template.clean_cpp"))
            }
        }
    }
}

/// Extensions of files that count as solutions.
pub fn source_extensions() -> Vec<String> {
    Language::iter().map(Language::extension).collect()
}

/// Template registered for `lang`, if any.
pub fn lookup(lang: &str) -> Option<&'static str> {
    Language::from_str(lang).ok().map(Language::template)
}

/// Plain string replacement: every occurrence of a placeholder is substituted, wherever it is.
pub fn render(template: &str, date: &str, filename: &str, link: &str) -> String {
    template
        .replace(DATE_PLACEHOLDER, date)
        .replace(FILENAME_PLACEHOLDER, filename)
        .replace(LINK_PLACEHOLDER, link)
}
