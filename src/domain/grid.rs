use thousands::Separable;

use crate::domain::{catalog::Catalog, selection::SelectionState};

/// Display card for one catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCard {
    pub id: u32,
    pub price_label: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub selected: bool,
}

pub fn price_label(price: u64) -> String {
    format!("${}", price.separate_with_commas())
}

/// Build every card from scratch, in catalog order
pub fn build_grid(catalog: &Catalog, selection: &SelectionState) -> Vec<ComponentCard> {
    catalog
        .iter()
        .map(|item| ComponentCard {
            id: item.id,
            price_label: price_label(item.price),
            name: item.name.clone(),
            description: item.description.clone(),
            tags: item.tags.iter().cloned().collect(),
            selected: selection.is_selected(item.id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::options::{Layout, Theme};

    #[test]
    fn test_build_grid_marks_selection() {
        let catalog = Catalog::builtin();
        let selection = SelectionState::new(&catalog, Theme::Blue, Layout::Standard);

        let grid = build_grid(&catalog, &selection);

        assert_eq!(grid.len(), 8);
        let selected: Vec<u32> = grid
            .iter()
            .filter(|card| card.selected)
            .map(|card| card.id)
            .collect();
        assert_eq!(selected, vec![1, 2, 5]);
    }

    #[test]
    fn test_build_grid_card_content() {
        let catalog = Catalog::builtin();
        let selection = SelectionState::new(&catalog, Theme::Blue, Layout::Standard);

        let grid = build_grid(&catalog, &selection);

        assert_eq!(
            grid[2],
            ComponentCard {
                id: 3,
                price_label: "$700".to_string(),
                name: "Portfolio Gallery".to_string(),
                description: "Work showcase with lightbox".to_string(),
                tags: vec!["gallery".to_string(), "lightbox".to_string()],
                selected: false,
            }
        );
    }

    #[test]
    fn test_build_grid_reflects_toggle() {
        let catalog = Catalog::builtin();
        let mut selection = SelectionState::new(&catalog, Theme::Blue, Layout::Standard);
        selection.toggle_component(7, &catalog);

        let grid = build_grid(&catalog, &selection);
        assert!(grid[6].selected);
    }

    #[test]
    fn test_price_label_uses_separators() {
        assert_eq!(price_label(0), "$0");
        assert_eq!(price_label(1000), "$1,000");
        assert_eq!(price_label(2850), "$2,850");
    }
}
