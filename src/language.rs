use anyhow::{Result, anyhow};
use isolang::Language as IsoLanguage;

/// Display language utilities
///
/// The page ships its diagnosis text in two languages. This module owns the
/// two-state selector and validates configured codes as real ISO 639-1 codes
/// before mapping them onto the supported pair.
/// The display language for diagnosis text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
}

impl Language {
    /// Parse a display language from an ISO 639-1 code
    ///
    /// Codes are validated against the ISO registry first, so an unknown
    /// code ("xx") reports as invalid rather than merely unsupported.
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_lowercase();
        let iso = IsoLanguage::from_639_1(&normalized)
            .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

        match iso {
            IsoLanguage::Eng => Ok(Self::En),
            IsoLanguage::Hin => Ok(Self::Hi),
            _ => Err(anyhow!(
                "Unsupported display language: {} ({})",
                normalized,
                iso.to_name()
            )),
        }
    }

    /// The other supported language
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }

    /// ISO 639-1 code for this language
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// English name of this language
    pub fn name(self) -> &'static str {
        match self {
            Self::En => IsoLanguage::Eng.to_name(),
            Self::Hi => IsoLanguage::Hin.to_name(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}
