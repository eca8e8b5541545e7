//!
//! 128-bit random identifier stored as 32 nibbles, rendered through
//! templates in which every `N` is replaced by the next nibble as a single
//! lowercase hex digit.
//!

use crate::{Error, Result, log::Topic};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

const NIBBLES: usize = 32;
const PLACEHOLDER: char = 'N';
const HEX: &[u8; 16] = b"0123456789abcdef";

///
/// Guid
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Guid {
    bytes: [u8; NIBBLES],
}

impl Guid {
    /// Built-in renderings, each with exactly 32 placeholders.
    pub const FORMATS: [&'static str; 5] = [
        "NNNNNNNNNNNNNNNNNNNNNNNNNNNNNNNN",
        "NNNNNNNN-NNNN-NNNN-NNNN-NNNNNNNNNNNN",
        "{NNNNNNNN-NNNN-NNNN-NNNN-NNNNNNNNNNNN}",
        "(NNNNNNNN-NNNN-NNNN-NNNN-NNNNNNNNNNNN)",
        "{0xNNNNNNNN,0xNNNN,0xNNNN,{0xNN,0xNN,0xNN,0xNN,0xNN,0xNN,0xNN,0xNN}}",
    ];

    /// Dashed, no braces.
    pub const DEFAULT_FORMAT: &'static str = Self::FORMATS[1];

    /// All nibbles zero.
    pub const EMPTY: Self = Self {
        bytes: [0; NIBBLES],
    };

    /// Generate 32 uniformly distributed nibbles from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        let mut raw = [0u8; NIBBLES / 2];
        crate::rand::fill_bytes(&mut raw);

        let mut bytes = [0u8; NIBBLES];
        for (i, &byte) in raw.iter().enumerate() {
            bytes[2 * i] = byte >> 4;
            bytes[2 * i + 1] = byte & 0x0f;
        }

        Self { bytes }
    }

    /// Build from explicit nibbles; every value must be in `0..=15`.
    pub fn from_bytes(bytes: [u8; NIBBLES]) -> Result<Self> {
        if let Some(bad) = bytes.iter().find(|&&b| b > 0x0f) {
            return Err(Error::invalid(format!("nibble {bad} is out of range 0..=15")));
        }

        Ok(Self { bytes })
    }

    #[must_use]
    pub const fn bytes(&self) -> &[u8; NIBBLES] {
        &self.bytes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Render with a built-in format.
    ///
    /// `None`, or an index past the end of [`Self::FORMATS`], selects
    /// [`Self::DEFAULT_FORMAT`].
    pub fn to_string_with(&self, selector: Option<usize>) -> Result<String> {
        let template = selector
            .and_then(|i| Self::FORMATS.get(i).copied())
            .unwrap_or(Self::DEFAULT_FORMAT);

        self.render(template)
    }

    /// Render with an arbitrary template holding exactly 32 `N`s.
    pub fn render(&self, template: &str) -> Result<String> {
        let placeholders = template.chars().filter(|&c| c == PLACEHOLDER).count();
        if placeholders != NIBBLES {
            crate::log!(Topic::Guid, Debug, "malformed template '{template}'");
            return Err(Error::MalformedFormat { placeholders });
        }

        let mut out = String::with_capacity(template.len());
        self.write_template(&mut out, template)
            .map_err(|e| Error::invalid(e.to_string()))?;

        Ok(out)
    }

    /// Undashed 32-digit form; the canonical value used for comparison.
    #[must_use]
    pub fn value_of(&self) -> String {
        self.bytes
            .iter()
            .map(|&b| char::from(HEX[usize::from(b & 0x0f)]))
            .collect()
    }

    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.value_of() == other.value_of()
    }

    // template must already be known to hold exactly NIBBLES placeholders
    fn write_template<W: fmt::Write>(&self, out: &mut W, template: &str) -> fmt::Result {
        let mut nibbles = self.bytes.iter();

        for c in template.chars() {
            if c == PLACEHOLDER {
                let b = nibbles.next().copied().unwrap_or_default();
                out.write_char(char::from(HEX[usize::from(b & 0x0f)]))?;
            } else {
                out.write_char(c)?;
            }
        }

        Ok(())
    }

    // matches `s` against one template, collecting the nibbles on success
    fn parse_with(s: &str, template: &str) -> Option<Self> {
        if s.chars().count() != template.len() {
            return None;
        }

        let mut bytes = [0u8; NIBBLES];
        let mut next = 0;
        for (c, t) in s.chars().zip(template.chars()) {
            if t == PLACEHOLDER {
                let digit = c.to_digit(16)?;
                bytes[next] = u8::try_from(digit).ok()?;
                next += 1;
            } else if c != t {
                return None;
            }
        }

        Some(Self { bytes })
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_template(f, Self::DEFAULT_FORMAT)
    }
}

impl FromStr for Guid {
    type Err = Error;

    /// Accepts any of the built-in renderings; hex digits in either case.
    fn from_str(s: &str) -> Result<Self> {
        Self::FORMATS
            .iter()
            .find_map(|template| Self::parse_with(s, template))
            .ok_or_else(|| Error::invalid(format!("'{s}' does not match any guid format")))
    }
}

impl Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
