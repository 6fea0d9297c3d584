//! Two-language (EN/ES) text toggle state.

/// Active page language. The page loads in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }

    /// Attribute carrying this language's text on translated elements.
    pub fn attr(self) -> &'static str {
        match self {
            Lang::En => "data-en",
            Lang::Es => "data-es",
        }
    }

    /// Picks the displayed string from a translation pair.
    pub fn pick<'a>(self, en: &'a str, es: &'a str) -> &'a str {
        match self {
            Lang::En => en,
            Lang::Es => es,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_round_trips_through_spanish() {
        let lang = Lang::default();
        assert_eq!(lang.pick("Hello", "Hola"), "Hello");

        let lang = lang.toggled();
        assert_eq!(lang, Lang::Es);
        assert_eq!(lang.pick("Hello", "Hola"), "Hola");

        let lang = lang.toggled();
        assert_eq!(lang.pick("Hello", "Hola"), "Hello");
    }

    #[test]
    fn attr_names_match_the_dataset_pair() {
        assert_eq!(Lang::En.attr(), "data-en");
        assert_eq!(Lang::Es.attr(), "data-es");
    }
}
