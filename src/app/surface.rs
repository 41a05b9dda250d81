//! In-memory decoration store the viewer renders from.

use std::collections::BTreeMap;

use ratatui::style::Style;

use crate::decoration::DecorationKind;
use crate::document::{Position, Range};
use crate::highlight::{DecorationHandle, DecorationSurface};

#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub style: Style,
    pub ranges: Vec<Range>,
}

#[derive(Debug, Default)]
pub struct BufferSurface {
    next_id: u64,
    live: BTreeMap<u64, Decoration>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Combined style of every decoration covering `pos`. Symbol styles sit
    /// on top of content, content on top of dimming.
    pub fn style_at(&self, pos: Position) -> Style {
        let mut style = Style::default();
        for kind in [
            DecorationKind::OutOfScope,
            DecorationKind::Content,
            DecorationKind::Symbols,
        ] {
            for decoration in self.live.values().filter(|d| d.kind == kind) {
                if decoration.ranges.iter().any(|r| r.contains(pos)) {
                    style = style.patch(decoration.style);
                }
            }
        }
        style
    }
}

impl DecorationSurface for BufferSurface {
    fn create(&mut self, kind: DecorationKind, style: Style, ranges: &[Range]) -> DecorationHandle {
        self.next_id += 1;
        self.live.insert(
            self.next_id,
            Decoration {
                kind,
                style,
                ranges: ranges.to_vec(),
            },
        );
        DecorationHandle::new(self.next_id)
    }

    fn remove(&mut self, handle: DecorationHandle) {
        if self.live.remove(&handle.id()).is_none() {
            log::warn!("Removing unknown decoration {}", handle.id());
        }
    }
}
