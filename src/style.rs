//! Injected node styling.
//!
//! Styles are passed to the panel at construction rather than looked up from
//! a process-wide asset registry. A style the host never registered resolves
//! to the unstyled default so a missing skin degrades visually instead of
//! failing.

use slint::Color;
use std::collections::HashMap;

/// Colors used when drawing one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub background: Color,
    pub border: Color,
    pub title: Color,
    pub pin_fill: Color,
}

impl NodeStyle {
    /// The explicit "no style" fallback: flat greys, legible on anything.
    pub fn unstyled() -> Self {
        Self {
            background: Color::from_rgb_u8(60, 60, 60),
            border: Color::from_rgb_u8(120, 120, 120),
            title: Color::from_rgb_u8(230, 230, 230),
            pin_fill: Color::from_rgb_u8(160, 160, 160),
        }
    }
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self::unstyled()
    }
}

/// Named style collection injected at panel construction.
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    styles: HashMap<String, NodeStyle>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, style: NodeStyle) {
        self.styles.insert(name.into(), style);
    }

    /// Resolve a style by name, falling back to [`NodeStyle::unstyled`] when
    /// the name is unknown.
    pub fn resolve(&self, name: &str) -> NodeStyle {
        self.styles
            .get(name)
            .copied()
            .unwrap_or_else(NodeStyle::unstyled)
    }
}
