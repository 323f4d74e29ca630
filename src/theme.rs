//! Color roles and color resolution.
//!
//! Pages never carry concrete colors. Sections reference abstract role codes
//! such as `PAGE_NUMBERS_FG`, and a [`Theme`] supplied by the caller maps
//! each role to an [`Rgb`] value at render time. Codes that are not role
//! names are treated as literal color specifications (`#RRGGBB`,
//! `#AARRGGBB` or a common color name).
//!
//! # Example
//!
//! ```
//! use teletext::theme::{resolve_color, ColorRole, Palette, Rgb};
//!
//! let palette = Palette::new("demo").with_color(ColorRole::PageNumbersFg, Rgb::new(255, 0, 0));
//! assert_eq!(resolve_color("PAGE_NUMBERS_FG", &palette), Rgb::new(255, 0, 0));
//! assert_eq!(resolve_color("#00ff00", &palette), Rgb::new(0, 255, 0));
//! assert_eq!(resolve_color("TITLE_TEXT", &palette), Rgb::WHITE);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A concrete 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Fallback for anything that cannot be resolved.
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `#AARRGGBB` (alpha ignored) or a color name.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let hex = match hex.len() {
                6 => hex,
                8 => &hex[2..],
                _ => return None,
            };
            let value = u32::from_str_radix(hex, 16).ok()?;
            return Some(Self::new(
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ));
        }
        named_color(&spec.to_ascii_lowercase())
    }

    /// `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::parse(s).ok_or_else(|| Error::InvalidPalette(format!("bad color {:?}", s)))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let spec = String::deserialize(deserializer)?;
        Rgb::parse(&spec)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color {:?}", spec)))
    }
}

fn named_color(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb::new(0x00, 0x00, 0x00),
        "darkgray" | "darkgrey" => Rgb::new(0x44, 0x44, 0x44),
        "gray" | "grey" => Rgb::new(0x88, 0x88, 0x88),
        "lightgray" | "lightgrey" => Rgb::new(0xCC, 0xCC, 0xCC),
        "white" => Rgb::new(0xFF, 0xFF, 0xFF),
        "red" => Rgb::new(0xFF, 0x00, 0x00),
        "green" => Rgb::new(0x00, 0xFF, 0x00),
        "blue" => Rgb::new(0x00, 0x00, 0xFF),
        "yellow" => Rgb::new(0xFF, 0xFF, 0x00),
        "cyan" | "aqua" => Rgb::new(0x00, 0xFF, 0xFF),
        "magenta" | "fuchsia" => Rgb::new(0xFF, 0x00, 0xFF),
        "lime" => Rgb::new(0x00, 0xFF, 0x00),
        "maroon" => Rgb::new(0x80, 0x00, 0x00),
        "navy" => Rgb::new(0x00, 0x00, 0x80),
        "olive" => Rgb::new(0x80, 0x80, 0x00),
        "purple" => Rgb::new(0x80, 0x00, 0x80),
        "silver" => Rgb::new(0xC0, 0xC0, 0xC0),
        "teal" => Rgb::new(0x00, 0x80, 0x80),
        _ => return None,
    };
    Some(rgb)
}

macro_rules! color_roles {
    ($($variant:ident => $code:literal),* $(,)?) => {
        /// Abstract color roles referenced by page sections.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorRole {
            $(
                #[doc = $code]
                $variant,
            )*
        }

        impl ColorRole {
            /// Every role, in declaration order.
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$variant),*];

            /// Code string stored in page documents.
            pub const fn code(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $code,)*
                }
            }

            /// Role for a code string, if it names one.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(ColorRole::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

color_roles! {
    MainPageBg => "MAIN_PAGE_BG",
    MainPageFg => "MAIN_PAGE_FG",
    ArticlePageBg => "ARTICLE_PAGE_BG",
    ArticlePageFg => "ARTICLE_PAGE_FG",
    TitleText => "TITLE_TEXT",
    BodyText => "BODY_TEXT",
    BodyTextAlt => "BODY_TEXT_ALT",
    HeaderFg => "HEADER_FG",
    HeaderBg => "HEADER_BG",
    TopArticlesBg => "TOP_ARTICLES_BG",
    TopArticlesFg => "TOP_ARTICLES_FG",
    LatestNewsHeaderFg => "LATEST_NEWS_HEADER_FG",
    LatestNewsHeaderBg => "LATEST_NEWS_HEADER_BG",
    LatestNewsBg => "LATEST_NEWS_BG",
    LatestNewsFg => "LATEST_NEWS_FG",
    IndexHeaderFg => "INDEX_HEADER_FG",
    IndexHeaderBg => "INDEX_HEADER_BG",
    IndexItemFg => "INDEX_ITEM_FG",
    IndexItemBg => "INDEX_ITEM_BG",
    MarginFg => "MARGIN_FG",
    MarginBg => "MARGIN_BG",
    NavigationBg => "NAVIGATION_BG",
    NavigationDisabledFg => "NAVIGATION_DISABLED_FG",
    PageNumbersFg => "PAGE_NUMBERS_FG",
    StatusBarBg => "STATUS_BAR_BG",
    StatusBarFg => "STATUS_BAR_FG",
    CategoryHeader => "CATEGORY_HEADER",
    LinkColor => "LINK_COLOR",
    DateTimeFg => "DATE_TIME_FG",
    DateTimeBg => "DATE_TIME_BG",
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<ColorRole> for String {
    fn from(role: ColorRole) -> Self {
        role.code().to_string()
    }
}

/// Maps color roles to concrete colors.
///
/// Implementations only answer for roles they define; [`resolve_color`]
/// applies the white fallback.
pub trait Theme {
    /// Color for a role, if the theme defines one.
    fn color(&self, role: ColorRole) -> Option<Rgb>;
}

impl<F> Theme for F
where
    F: Fn(ColorRole) -> Option<Rgb>,
{
    fn color(&self, role: ColorRole) -> Option<Rgb> {
        self(role)
    }
}

/// Resolve a color code through a theme.
///
/// Role codes go through the theme (white when undefined); any other code is
/// parsed as a literal color (white when unparseable).
pub fn resolve_color(code: &str, theme: &dyn Theme) -> Rgb {
    match ColorRole::from_code(code) {
        Some(role) => theme.color(role).unwrap_or(Rgb::WHITE),
        None => Rgb::parse(code).unwrap_or(Rgb::WHITE),
    }
}

/// A named role-to-color table, typically loaded from JSON.
///
/// ```json
/// { "name": "Night", "colors": { "MAIN_PAGE_BG": "#000044", "PAGE_NUMBERS_FG": "red" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    /// Display name
    pub name: String,
    colors: HashMap<ColorRole, Rgb>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: HashMap::new(),
        }
    }

    /// Set a role color.
    pub fn with_color(mut self, role: ColorRole, color: Rgb) -> Self {
        self.colors.insert(role, color);
        self
    }

    /// Set a role color in place.
    pub fn set(&mut self, role: ColorRole, color: Rgb) {
        self.colors.insert(role, color);
    }

    /// Whether the palette defines a role.
    pub fn has_color(&self, role: ColorRole) -> bool {
        self.colors.contains_key(&role)
    }

    /// Number of defined roles.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if no role is defined.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Parse a palette from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawPalette = serde_json::from_str(json)?;
        let mut palette = Palette::new(raw.name);
        for (code, spec) in raw.colors {
            let role = ColorRole::from_code(&code)
                .ok_or_else(|| Error::InvalidPalette(format!("unknown role {}", code)))?;
            palette.set(role, spec.parse()?);
        }
        log::debug!("Loaded palette {:?} with {} roles", palette.name, palette.len());
        Ok(palette)
    }

    /// Load a palette from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the palette to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        let raw = RawPalette {
            name: self.name.clone(),
            colors: self
                .colors
                .iter()
                .map(|(role, rgb)| (role.code().to_string(), rgb.to_hex()))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}

impl Theme for Palette {
    fn color(&self, role: ColorRole) -> Option<Rgb> {
        self.colors.get(&role).copied()
    }
}

#[derive(Serialize, Deserialize)]
struct RawPalette {
    #[serde(default)]
    name: String,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}
