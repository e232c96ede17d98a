use serde::Serialize;

use crate::model::config::Catalog;
use crate::ops::navigator::Navigator;

/// One selectable cell of the current view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEntry {
    pub key: String,
    pub text: String,
    pub is_category: bool,
}

/// Keys to show for the current category.
///
/// A catalog override for the current category name replaces the
/// category's own keys. Home is never overridden.
pub fn visible_keys(nav: &Navigator, catalog: &Catalog) -> Vec<String> {
    if !nav.is_home()
        && let Some(images) = catalog.images_for(nav.current_category_name())
    {
        return images.to_vec();
    }
    nav.visible_keys()
}

/// The current view with the text each key resolves to
pub fn current_view(nav: &Navigator, catalog: &Catalog) -> Vec<ViewEntry> {
    visible_keys(nav, catalog)
        .into_iter()
        .map(|key| ViewEntry {
            text: nav.describe(&key).to_string(),
            is_category: nav.is_category(&key),
            key,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Food",
            vec![
                "img/food/plate.png".to_string(),
                "img/food/apple.png".to_string(),
            ],
        );
        catalog
    }

    #[test]
    fn test_override_replaces_keys() {
        let mut nav =
            Navigator::from_source("food Food\n>img/food/apple.png apple\n>img/food/x.png x\n")
                .unwrap();
        nav.resolve("food");
        assert_eq!(
            visible_keys(&nav, &catalog()),
            vec!["img/food/plate.png", "img/food/apple.png"]
        );
        assert_eq!(
            nav.visible_keys(),
            vec!["img/food/apple.png", "img/food/x.png"]
        );
    }

    #[test]
    fn test_no_override_uses_category_keys() {
        let mut nav = Navigator::from_source("clothing Clothing\n>hat.png hat\n").unwrap();
        nav.resolve("clothing");
        assert_eq!(visible_keys(&nav, &catalog()), vec!["hat.png"]);
    }

    #[test]
    fn test_home_is_never_overridden() {
        let mut catalog = Catalog::new();
        catalog.insert("", vec!["x.png".to_string()]);
        let nav = Navigator::from_source("food Food\n").unwrap();
        assert_eq!(visible_keys(&nav, &catalog), vec!["food"]);
    }

    #[test]
    fn test_current_view_texts() {
        let mut nav = Navigator::from_source("food Food\n>img/food/apple.png apple\n").unwrap();
        let home = current_view(&nav, &catalog());
        assert_eq!(
            home,
            vec![ViewEntry {
                key: "food".into(),
                text: "Food".into(),
                is_category: true,
            }]
        );

        nav.resolve("food");
        let food = current_view(&nav, &catalog());
        assert_eq!(food[0].text, "img/food/plate.png");
        assert_eq!(food[1].text, "apple");
        assert!(!food[1].is_category);
    }
}
