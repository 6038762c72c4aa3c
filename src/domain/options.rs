//! Mutually exclusive option groups: theme, layout and A/B variant
//!
//! Each group is parsed from the identifier its button carries (`"blue"`,
//! `"minimal"`, `"c"`), so invalid identifiers surface as parse errors that
//! callers turn into no-ops.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Visual theme; swaps the accent palette of the whole frame
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Dark,
}

/// Page layout; controls preview spacing and column template
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    #[default]
    Standard,
    Minimal,
    Creative,
}

/// Call-to-action variant; `A` is the control
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    VariantArray,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AbVariant {
    #[default]
    A,
    B,
    C,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Blue => "Blue",
            Theme::Green => "Green",
            Theme::Purple => "Purple",
            Theme::Orange => "Orange",
            Theme::Dark => "Dark",
        }
    }
}

impl Layout {
    pub fn label(&self) -> &'static str {
        match self {
            Layout::Standard => "Standard",
            Layout::Minimal => "Minimal",
            Layout::Creative => "Creative",
        }
    }
}

impl AbVariant {
    pub fn label(&self) -> &'static str {
        match self {
            AbVariant::A => "Variant A",
            AbVariant::B => "Variant B",
            AbVariant::C => "Variant C",
        }
    }
}

/// Position of a value inside its option group, for cursor placement
pub fn position_of<T: VariantArray + PartialEq>(value: &T) -> usize {
    T::VARIANTS
        .iter()
        .position(|variant| variant == value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("blue", Some(Theme::Blue))]
    #[case("dark", Some(Theme::Dark))]
    #[case("Blue", None)]
    #[case("neon", None)]
    #[case("", None)]
    fn test_theme_from_id(#[case] id: &str, #[case] expected: Option<Theme>) {
        assert_eq!(Theme::from_str(id).ok(), expected);
    }

    #[rstest]
    #[case("standard", Some(Layout::Standard))]
    #[case("minimal", Some(Layout::Minimal))]
    #[case("creative", Some(Layout::Creative))]
    #[case("grid", None)]
    fn test_layout_from_id(#[case] id: &str, #[case] expected: Option<Layout>) {
        assert_eq!(Layout::from_str(id).ok(), expected);
    }

    #[rstest]
    #[case("a", Some(AbVariant::A))]
    #[case("b", Some(AbVariant::B))]
    #[case("c", Some(AbVariant::C))]
    #[case("d", None)]
    fn test_variant_from_id(#[case] id: &str, #[case] expected: Option<AbVariant>) {
        assert_eq!(AbVariant::from_str(id).ok(), expected);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Theme::default(), Theme::Blue);
        assert_eq!(Layout::default(), Layout::Standard);
        assert_eq!(AbVariant::default(), AbVariant::A);
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(Theme::Purple.to_string(), "purple");
        assert_eq!(Layout::Creative.as_ref(), "creative");
        assert_eq!(AbVariant::B.to_string(), "b");
    }

    #[test]
    fn test_position_of() {
        assert_eq!(position_of(&Theme::Blue), 0);
        assert_eq!(position_of(&Layout::Creative), 2);
        assert_eq!(position_of(&AbVariant::C), 2);
    }

    #[test]
    fn test_serde_uses_lowercase_ids() -> color_eyre::Result<()> {
        assert_eq!(serde_json::to_string(&Theme::Orange)?, "\"orange\"");
        let layout: Layout = serde_json::from_str("\"minimal\"")?;
        assert_eq!(layout, Layout::Minimal);

        Ok(())
    }
}
