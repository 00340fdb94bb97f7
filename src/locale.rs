//! Localized captions of the generated document.

use std::str::FromStr;

/// Language of all captions written into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    French,
}

/// Fixed captions for one [Locale].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captions {
    /// `babel` language option
    pub babel_language: &'static str,
    pub document_title: &'static str,
    pub trees_chapter: &'static str,
    pub records_chapter: &'static str,
    /// Title of the first tree page
    pub root_page: &'static str,
    /// Prefix of continuation page titles, followed by `{sosa} ({name})`
    pub continuation_page: &'static str,
    pub birth: &'static str,
    pub death: &'static str,
    /// Lead-in of a cross-reference to an earlier entry
    pub see: &'static str,
}

const ENGLISH: Captions = Captions {
    babel_language: "english",
    document_title: "Family tree",
    trees_chapter: "The trees of my ancestors",
    records_chapter: "The records of my ancestors",
    root_page: "The root",
    continuation_page: "Continuation of branch",
    birth: "Birth",
    death: "Death",
    see: "See",
};

const FRENCH: Captions = Captions {
    babel_language: "french",
    document_title: "Arbre généalogique",
    trees_chapter: "Les arbres de mes ancêtres",
    records_chapter: "Les fiches de mes ancêtres",
    root_page: "La racine",
    continuation_page: "Suite de la branche",
    birth: "Naissance",
    death: "Décès",
    see: "Voir",
};

impl Locale {
    /// Returns the captions of this locale.
    pub fn captions(self) -> &'static Captions {
        match self {
            Locale::English => &ENGLISH,
            Locale::French => &FRENCH,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts language codes and names, e.g. `en`, `english`, `fr`, `French`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "fr" | "french" | "francais" | "français" => Ok(Locale::French),
            other => Err(format!("unknown locale '{other}' (expected 'en' or 'fr')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("fr".parse::<Locale>(), Ok(Locale::French));
        assert_eq!("English".parse::<Locale>(), Ok(Locale::English));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_captions_differ_per_locale() {
        assert_eq!(Locale::French.captions().see, "Voir");
        assert_eq!(Locale::English.captions().see, "See");
    }
}
