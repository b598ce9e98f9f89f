// src/types.rs

//! Small value types shared by the config and render layers.

use std::fmt;
use std::str::FromStr;

/// One of the four fixed map orientations.
///
/// The discriminant is the rotation index used everywhere else (render
/// behaviours, the front-end descriptor, tile directories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rotation {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::TopLeft,
        Rotation::TopRight,
        Rotation::BottomRight,
        Rotation::BottomLeft,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical name as used in the `rotations` key of a map section.
    pub fn name(self) -> &'static str {
        match self {
            Rotation::TopLeft => "top-left",
            Rotation::TopRight => "top-right",
            Rotation::BottomRight => "bottom-right",
            Rotation::BottomLeft => "bottom-left",
        }
    }

    /// Abbreviation accepted on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            Rotation::TopLeft => "tl",
            Rotation::TopRight => "tr",
            Rotation::BottomRight => "br",
            Rotation::BottomLeft => "bl",
        }
    }

    /// Look up a rotation by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Look up a rotation the way render-behaviour specs name it: short
    /// name, canonical name or index.
    pub fn from_short_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.short_name() == name || r.name() == name)
            .or_else(|| name.parse::<usize>().ok().and_then(Self::from_index))
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render mode of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rendermode {
    #[default]
    Normal,
    Daylight,
    Nightlight,
    Cave,
}

impl Rendermode {
    pub fn as_str(self) -> &'static str {
        match self {
            Rendermode::Normal => "normal",
            Rendermode::Daylight => "daylight",
            Rendermode::Nightlight => "nightlight",
            Rendermode::Cave => "cave",
        }
    }
}

impl fmt::Display for Rendermode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rendermode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "normal" => Ok(Rendermode::Normal),
            "daylight" => Ok(Rendermode::Daylight),
            "nightlight" => Ok(Rendermode::Nightlight),
            "cave" => Ok(Rendermode::Cave),
            _ => Err("must be one of: normal, daylight, nightlight, cave".to_string()),
        }
    }
}

/// What the renderer should do with one (map, rotation) pair.
///
/// - `Skip`: do not render at all.
/// - `Auto`: render only what changed since the last run (default).
/// - `Force`: render everything from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderBehavior {
    Skip,
    #[default]
    Auto,
    Force,
}

impl fmt::Display for RenderBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RenderBehavior::Skip => "skip",
            RenderBehavior::Auto => "auto",
            RenderBehavior::Force => "force",
        };
        f.write_str(s)
    }
}

/// Kind tag of an overlay section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Dummy,
    Height,
    Lighting,
    Slime,
    Spawn,
}

impl OverlayKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OverlayKind::Dummy => "dummy",
            OverlayKind::Height => "height",
            OverlayKind::Lighting => "lighting",
            OverlayKind::Slime => "slime",
            OverlayKind::Spawn => "spawn",
        }
    }

    /// Human-readable name of the overlay kind.
    pub fn pretty_name(self) -> &'static str {
        match self {
            OverlayKind::Dummy => "Dummy",
            OverlayKind::Height => "Height",
            OverlayKind::Lighting => "Lighting",
            OverlayKind::Slime => "Slime chunks",
            OverlayKind::Spawn => "Spawnable blocks",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dummy" => Ok(OverlayKind::Dummy),
            "height" => Ok(OverlayKind::Height),
            "lighting" => Ok(OverlayKind::Lighting),
            "slime" => Ok(OverlayKind::Slime),
            "spawn" => Ok(OverlayKind::Spawn),
            other => Err(format!(
                "unknown overlay type '{other}' (expected one of: dummy, height, lighting, slime, spawn)"
            )),
        }
    }
}
