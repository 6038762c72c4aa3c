//! Page-structure preview
//!
//! The block sequence is rebuilt from scratch whenever the selection changes.
//! Layout changes only re-apply spacing, and choosing an A/B variant only
//! rewrites the call-to-action block of the existing preview.

use serde::{Deserialize, Serialize};

use crate::domain::{
    catalog::Catalog,
    options::{AbVariant, Layout},
    selection::SelectionState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Header,
    Hero,
    Features,
    Gallery,
    PricingTable,
    Testimonials,
    CallToAction,
    ContactForm,
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Grid,
    Images,
    Table,
    Comment,
    Rocket,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Grid => "▦",
            Icon::Images => "▣",
            Icon::Table => "▤",
            Icon::Comment => "✉",
            Icon::Rocket => "➚",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewBlock {
    pub kind: BlockKind,
    pub label: String,
    pub icon: Option<Icon>,
}

impl PreviewBlock {
    fn new(kind: BlockKind, label: &str, icon: Option<Icon>) -> Self {
        Self {
            kind,
            label: label.to_string(),
            icon,
        }
    }

    fn call_to_action(variant: Option<AbVariant>) -> Self {
        let (label, icon) = cta_content(variant.unwrap_or_default());
        Self::new(BlockKind::CallToAction, label, icon)
    }
}

/// Label and icon of the call-to-action for a variant
pub fn cta_content(variant: AbVariant) -> (&'static str, Option<Icon>) {
    match variant {
        AbVariant::A => ("Call to Action", None),
        AbVariant::B => ("Get Free Consultation", Some(Icon::Comment)),
        AbVariant::C => ("Start Now", Some(Icon::Rocket)),
    }
}

/// Optional blocks, in page order, with the tag that pulls each one in
const TAGGED_BLOCKS: [(&str, BlockKind, &str, Icon); 4] = [
    ("grid", BlockKind::Features, "Features Grid", Icon::Grid),
    ("gallery", BlockKind::Gallery, "Portfolio Gallery", Icon::Images),
    ("table", BlockKind::PricingTable, "Pricing Table", Icon::Table),
    ("testimonials", BlockKind::Testimonials, "Testimonials", Icon::Comment),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnTemplate {
    /// One block per row
    Single,
    /// As many columns of at least `min_width` as fit
    AutoFit { min_width: u16 },
}

/// Spacing parameters applied to the preview container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpacing {
    pub gap: u16,
    pub padding: Option<u16>,
    pub columns: ColumnTemplate,
}

impl LayoutSpacing {
    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Minimal => Self {
                gap: 5,
                padding: Some(10),
                columns: ColumnTemplate::Single,
            },
            Layout::Creative => Self {
                gap: 20,
                padding: None,
                columns: ColumnTemplate::AutoFit { min_width: 150 },
            },
            Layout::Standard => Self {
                gap: 10,
                padding: None,
                columns: ColumnTemplate::Single,
            },
        }
    }
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self::for_layout(Layout::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    blocks: Vec<PreviewBlock>,
    spacing: LayoutSpacing,
}

impl Preview {
    pub fn blocks(&self) -> &[PreviewBlock] {
        &self.blocks
    }

    pub fn spacing(&self) -> LayoutSpacing {
        self.spacing
    }

    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|block| block.kind == kind).count()
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.count(kind) > 0
    }

    pub fn position(&self, kind: BlockKind) -> Option<usize> {
        self.blocks.iter().position(|block| block.kind == kind)
    }

    pub fn call_to_action(&self) -> Option<&PreviewBlock> {
        self.blocks
            .iter()
            .find(|block| block.kind == BlockKind::CallToAction)
    }

    /// Re-apply spacing without touching the blocks
    pub fn apply_layout(&mut self, layout: Layout) {
        self.spacing = LayoutSpacing::for_layout(layout);
    }

    /// Rewrite only the call-to-action block. Returns `false` if there is none.
    pub fn apply_variant(&mut self, variant: AbVariant) -> bool {
        let Some(block) = self
            .blocks
            .iter_mut()
            .find(|block| block.kind == BlockKind::CallToAction)
        else {
            return false;
        };

        let (label, icon) = cta_content(variant);
        block.label = label.to_string();
        block.icon = icon;
        true
    }
}

fn any_selected_with_tag(catalog: &Catalog, selection: &SelectionState, tag: &str) -> bool {
    catalog
        .iter()
        .any(|item| selection.is_selected(item.id) && item.has_tag(tag))
}

/// Build the full block sequence implied by the selection
pub fn build_preview(catalog: &Catalog, selection: &SelectionState) -> Preview {
    let mut blocks = vec![
        PreviewBlock::new(BlockKind::Header, "Header", None),
        PreviewBlock::new(BlockKind::Hero, "Hero Section", None),
    ];

    for (tag, kind, label, icon) in TAGGED_BLOCKS {
        if any_selected_with_tag(catalog, selection, tag) {
            blocks.push(PreviewBlock::new(kind, label, Some(icon)));
        }
    }

    blocks.push(PreviewBlock::call_to_action(selection.active_variant()));
    blocks.push(PreviewBlock::new(BlockKind::ContactForm, "Contact Form", None));
    blocks.push(PreviewBlock::new(BlockKind::Footer, "Footer", None));

    let mut preview = Preview {
        blocks,
        spacing: LayoutSpacing::default(),
    };
    preview.apply_layout(selection.layout);
    preview
}
