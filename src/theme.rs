use serde::Deserialize;
use tui::style::{Color, Style};

use self::de::deserialize_option_color_hex_string;

macro_rules! def_theme_struct_with_defaults {
    ($($name:ident => $color:expr),+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
        pub struct Theme {
            $(
                #[serde(deserialize_with = "deserialize_option_color_hex_string")]
                #[serde(default)]
                $name: Option<Color>,
            )+
        }
        impl Theme {
            $(
                #[inline]
                pub fn $name(self) -> Color {
                    self.$name.unwrap_or($color)
                }
            )+
        }
        impl Default for Theme {
            fn default() -> Theme {
                Self {
                    $( $name: Some($color), )+
                }
            }
        }
    };
}

def_theme_struct_with_defaults!(
    background => Color::Reset,
    gray => Color::DarkGray,
    emphasis => Color::Rgb(16, 185, 129),
    error => Color::Red,
    text_normal => Color::Reset,
    text_primary => Color::Yellow,
    text_secondary => Color::Cyan,
    border_primary => Color::Blue,
    highlight_unfocused => Color::DarkGray
);

impl Theme {
    #[inline]
    pub fn style(self) -> Style {
        Style::default().bg(self.background())
    }
}

fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

mod de {
    use std::fmt;

    use serde::de::{self, Error, Unexpected, Visitor};

    use super::{hex_to_color, Color};

    pub(crate) fn deserialize_option_color_hex_string<'de, D>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct ColorVisitor;

        impl<'de> Visitor<'de> for ColorVisitor {
            type Value = Option<Color>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hex string in the format of '#09ACDF'")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                if let Some(color) = hex_to_color(s) {
                    return Ok(Some(color));
                }

                Err(de::Error::invalid_value(Unexpected::Str(s), &self))
            }
        }

        deserializer.deserialize_any(ColorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#10B981"), Some(Color::Rgb(16, 185, 129)));
        assert_eq!(hex_to_color("#000000"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(hex_to_color("10B981"), None);
        assert_eq!(hex_to_color("#10B98"), None);
        assert_eq!(hex_to_color("#GGGGGG"), None);
        assert_eq!(hex_to_color("#+F+F+F"), None);
        assert_eq!(hex_to_color("é12345"), None);
        assert_eq!(hex_to_color("#é1234"), None);
        assert_eq!(hex_to_color(""), None);
    }

    #[test]
    fn test_theme_rejects_non_ascii() {
        let theme: Result<Theme, _> = serde_yaml::from_str("emphasis: 'é12345'");

        assert!(theme.is_err());
    }

    #[test]
    fn test_theme_overrides() {
        let theme: Theme = serde_yaml::from_str("emphasis: '#00FF00'\nerror: '#FF0000'").unwrap();

        assert_eq!(theme.emphasis(), Color::Rgb(0, 255, 0));
        assert_eq!(theme.error(), Color::Rgb(255, 0, 0));
        // Unset colors are None after deserializing and fall back to defaults
        assert_eq!(theme.border_primary(), Color::Blue);
    }

    #[test]
    fn test_theme_rejects_bad_hex() {
        let theme: Result<Theme, _> = serde_yaml::from_str("emphasis: green");

        assert!(theme.is_err());
    }
}
