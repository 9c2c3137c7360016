// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

use crate::errors::ParseSlugError;

/// Language of the site, selected via the first URL path segment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,

    #[serde(rename = "zh")]
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn to_str(self) -> &'static str {
        #[allow(clippy::expect_used)]
        serde_variant::to_variant_name(&self)
            .expect("Converting enum to string should always succeed")
    }

    /// Value of the HTML `lang` attribute.
    #[must_use]
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh-CN",
        }
    }

    /// The other locale, used for language switch links.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    /// Picks one of two texts depending on the locale.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, zh: &'a str) -> &'a str {
        match self {
            Self::En => en,
            Self::Zh => zh,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = ParseSlugError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.to_str() == string)
            .ok_or_else(|| ParseSlugError::unknown("locale", string))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A value given in both languages.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Localized<T> {
    #[serde(rename = "en")]
    pub en: T,

    #[serde(rename = "zh")]
    pub zh: T,
}

impl<T> Localized<T> {
    #[must_use]
    pub fn new(en: T, zh: T) -> Self {
        Self { en, zh }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        }
    }

    pub fn get_mut(&mut self, locale: Locale) -> &mut T {
        match locale {
            Locale::En => &mut self.en,
            Locale::Zh => &mut self.zh,
        }
    }

    pub fn map<U, F>(self, mut f: F) -> Localized<U>
    where
        F: FnMut(T) -> U,
    {
        Localized { en: f(self.en), zh: f(self.zh) }
    }
}

impl Localized<&'static str> {
    #[must_use]
    pub fn to_owned_strings(&self) -> Localized<String> {
        Localized { en: self.en.to_string(), zh: self.zh.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_slugs() {
        assert_eq!(Locale::En.to_str(), "en");
        assert_eq!(Locale::Zh.to_str(), "zh");
        assert_eq!("zh".parse::<Locale>(), Ok(Locale::Zh));
        assert_eq!("fr".parse::<Locale>(), Err(ParseSlugError::unknown("locale", "fr")));
    }

    #[test]
    fn test_localized_get() {
        let text = Localized::new("Service", "服务");
        assert_eq!(*text.get(Locale::En), "Service");
        assert_eq!(*text.get(Locale::Zh), "服务");
        assert_eq!(text.map(str::len), Localized::new(7, 6));
    }
}
