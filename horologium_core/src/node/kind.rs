// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node kinds and attribute values.

use alloc::string::String;
use core::fmt;

/// What a node represents in the native tree.
///
/// The first two kinds are text layout containers; the rest are vector
/// graphics primitives used by the [`scene`](crate::scene) renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Block-level container (a line of its own).
    Block,
    /// Inline container (flows within a line).
    Inline,
    /// Root of a vector scene, with its own coordinate system.
    Svg,
    /// Grouping node inside a vector scene.
    Group,
    /// Axis-aligned rectangle.
    Rect,
    /// Circle.
    Circle,
    /// Straight line segment.
    Line,
}

impl NodeKind {
    /// Markup tag name of this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Block => "div",
            Self::Inline => "span",
            Self::Svg => "svg",
            Self::Group => "g",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Line => "line",
        }
    }

    /// Whether the kind lives in the vector graphics namespace.
    #[must_use]
    pub const fn is_vector(self) -> bool {
        !matches!(self, Self::Block | Self::Inline)
    }
}

/// Value of a node attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A number, written in shortest round-trip form.
    Number(f64),
    /// Free text.
    Text(String),
}

impl AttrValue {
    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
