use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Image types the prediction service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
pub enum ImageMime {
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "image/jpg")]
    Jpg,
    #[strum(serialize = "image/png")]
    Png,
}

impl ImageMime {
    /// Matches a declared MIME type. Parameters after `;` are ignored and the
    /// comparison is ASCII case-insensitive; the file content is never inspected.
    pub fn parse(declared: &str) -> Option<Self> {
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Self::from_str(&essence).ok()
    }

    /// Value for the `accept` attribute of the file picker.
    pub fn accept_attribute() -> String {
        Self::iter()
            .map(<&'static str>::from)
            .collect::<Vec<_>>()
            .join(",")
    }
}
