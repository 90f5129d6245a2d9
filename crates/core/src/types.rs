//! Fixed enumerations referenced by configuration.
//!
//! Each enumeration exposes its canonical lower-snake text form through
//! [`VARIANTS`](DeathChestType::VARIANTS)/`as_str` and parses it back with
//! exact, case-sensitive matching. The config engine compares persisted
//! strings against these texts verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string matches no variant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} variant: {input:?}")]
pub struct ParseVariantError {
    /// Name of the enumeration being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

/// The kind of container placed on death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathChestType {
    /// Always a single chest; overflow items stay with the caller.
    SingleOnly,
    /// A single chest, widened to a double when the drops need it.
    SingleOrDouble,
    /// A shulker box (always single-width).
    ShulkerBox,
}

impl DeathChestType {
    /// Canonical text of every variant, in declaration order.
    pub const VARIANTS: &'static [&'static str] =
        &["single_only", "single_or_double", "shulker_box"];

    /// Canonical text form.
    pub const fn as_str(self) -> &'static str {
        match self {
            DeathChestType::SingleOnly => "single_only",
            DeathChestType::SingleOrDouble => "single_or_double",
            DeathChestType::ShulkerBox => "shulker_box",
        }
    }
}

impl fmt::Display for DeathChestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeathChestType {
    type Err = ParseVariantError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "single_only" => Ok(DeathChestType::SingleOnly),
            "single_or_double" => Ok(DeathChestType::SingleOrDouble),
            "shulker_box" => Ok(DeathChestType::ShulkerBox),
            _ => Err(ParseVariantError {
                kind: "death chest type",
                input: input.to_string(),
            }),
        }
    }
}

/// The sixteen dye colors a shulker box can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    /// Canonical text of every variant, in declaration order.
    pub const VARIANTS: &'static [&'static str] = &[
        "white",
        "orange",
        "magenta",
        "light_blue",
        "yellow",
        "lime",
        "pink",
        "gray",
        "light_gray",
        "cyan",
        "purple",
        "blue",
        "brown",
        "green",
        "red",
        "black",
    ];

    /// Canonical text form.
    pub const fn as_str(self) -> &'static str {
        match self {
            DyeColor::White => "white",
            DyeColor::Orange => "orange",
            DyeColor::Magenta => "magenta",
            DyeColor::LightBlue => "light_blue",
            DyeColor::Yellow => "yellow",
            DyeColor::Lime => "lime",
            DyeColor::Pink => "pink",
            DyeColor::Gray => "gray",
            DyeColor::LightGray => "light_gray",
            DyeColor::Cyan => "cyan",
            DyeColor::Purple => "purple",
            DyeColor::Blue => "blue",
            DyeColor::Brown => "brown",
            DyeColor::Green => "green",
            DyeColor::Red => "red",
            DyeColor::Black => "black",
        }
    }
}

impl fmt::Display for DyeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DyeColor {
    type Err = ParseVariantError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "white" => Ok(DyeColor::White),
            "orange" => Ok(DyeColor::Orange),
            "magenta" => Ok(DyeColor::Magenta),
            "light_blue" => Ok(DyeColor::LightBlue),
            "yellow" => Ok(DyeColor::Yellow),
            "lime" => Ok(DyeColor::Lime),
            "pink" => Ok(DyeColor::Pink),
            "gray" => Ok(DyeColor::Gray),
            "light_gray" => Ok(DyeColor::LightGray),
            "cyan" => Ok(DyeColor::Cyan),
            "purple" => Ok(DyeColor::Purple),
            "blue" => Ok(DyeColor::Blue),
            "brown" => Ok(DyeColor::Brown),
            "green" => Ok(DyeColor::Green),
            "red" => Ok(DyeColor::Red),
            "black" => Ok(DyeColor::Black),
            _ => Err(ParseVariantError {
                kind: "dye color",
                input: input.to_string(),
            }),
        }
    }
}
