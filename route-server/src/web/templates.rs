//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Itinerary, RouteRecord, Step, StepKind};
use crate::favorites::Favorite;

use super::dto::source_badge;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form and favorites.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub favorites: Vec<FavoriteView>,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate;

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route list fragment (search results).
#[derive(Template)]
#[template(path = "route_list.html")]
pub struct RouteListTemplate {
    pub destination: String,
    pub routes: Vec<RouteCardView>,
}

/// Favorites list fragment.
#[derive(Template)]
#[template(path = "favorites_list.html")]
pub struct FavoritesListTemplate {
    pub favorites: Vec<FavoriteView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route card view model.
#[derive(Debug, Clone)]
pub struct RouteCardView {
    pub line_label: String,
    pub destination_title: String,
    pub eta_label: String,
    pub source_badge: Option<String>,
    pub has_detail: bool,
    pub steps: Vec<StepView>,
}

impl RouteCardView {
    /// Create from a raw route record.
    pub fn from_record(record: &RouteRecord) -> Self {
        let itinerary = Itinerary::from_record(record);
        let steps = itinerary.steps().iter().map(StepView::from_step).collect();

        let destination = record.destination_name.display_text();
        let destination_title = if destination.is_empty() {
            "Destination unavailable".to_string()
        } else {
            destination
        };

        Self {
            line_label: itinerary.line_label().to_string(),
            destination_title,
            eta_label: itinerary.eta_label().to_string(),
            source_badge: source_badge(record),
            has_detail: itinerary.has_detail(),
            steps,
        }
    }
}

/// Itinerary step view model.
#[derive(Debug, Clone)]
pub struct StepView {
    /// CSS class suffix for the step kind
    pub kind_class: &'static str,

    /// Lead-in text before the label
    pub prefix: &'static str,

    pub label: String,
}

impl StepView {
    /// Create from a derived step.
    pub fn from_step(step: &Step) -> Self {
        let (kind_class, prefix) = match step.kind {
            StepKind::Walk => ("walk", "Walk"),
            StepKind::Board => ("board", "Board at"),
            StepKind::Vehicle => ("vehicle", "Bus"),
            StepKind::RideTo => ("ride-to", "Ride to"),
            StepKind::Alight => ("alight", "Get off at"),
        };
        Self {
            kind_class,
            prefix,
            label: step.label.clone(),
        }
    }
}

/// Favorite route view model.
#[derive(Debug, Clone)]
pub struct FavoriteView {
    pub id: u64,
    pub name: String,
    pub from: String,
    pub to: String,
    pub short_destination: String,
}

impl FavoriteView {
    /// Create from a stored favorite.
    pub fn from_favorite(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id,
            name: favorite.name.clone(),
            from: favorite.from.clone(),
            to: favorite.to.clone(),
            short_destination: favorite.short_destination().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawValue;

    #[test]
    fn route_card_view_fallback_title() {
        let view = RouteCardView::from_record(&RouteRecord::default());
        assert_eq!(view.destination_title, "Destination unavailable");
        assert_eq!(view.line_label, "-");
        assert!(!view.has_detail);
    }

    #[test]
    fn route_card_view_with_destination() {
        let mut record = RouteRecord::default();
        record.destination_name = RawValue::Text("Dizengoff Center".into());
        record.line_number = RawValue::Number(18.0);
        let view = RouteCardView::from_record(&record);
        assert_eq!(view.destination_title, "Dizengoff Center");
        assert_eq!(view.line_label, "18");
    }

    #[test]
    fn step_view_prefixes() {
        let view = StepView::from_step(&Step::new(StepKind::Walk, "5 minutes"));
        assert_eq!(view.prefix, "Walk");
        assert_eq!(view.kind_class, "walk");

        let view = StepView::from_step(&Step::new(StepKind::Board, "Main Square (12)"));
        assert_eq!(view.prefix, "Board at");

        let view = StepView::from_step(&Step::new(StepKind::Alight, "City Mall"));
        assert_eq!(view.prefix, "Get off at");
        assert_eq!(view.kind_class, "alight");
    }

    #[test]
    fn favorite_view_short_destination() {
        let favorite = Favorite {
            id: 7,
            name: "Shopping".into(),
            from: "Home".into(),
            to: "Dizengoff Center, Tel Aviv".into(),
        };
        let view = FavoriteView::from_favorite(&favorite);
        assert_eq!(view.short_destination, "Dizengoff Center");
        assert_eq!(view.to, "Dizengoff Center, Tel Aviv");
    }

    #[test]
    fn templates_render() {
        let favorites = vec![FavoriteView {
            id: 1,
            name: "Way to work".into(),
            from: "Herzl St 25, Tel Aviv".into(),
            to: "High-Tech Park, Herzliya".into(),
            short_destination: "High-Tech Park".into(),
        }];

        let html = IndexTemplate { favorites }.render().unwrap();
        assert!(html.contains("Way to work"));
        assert!(html.contains("High-Tech Park"));

        let mut record = RouteRecord::default();
        record.destination_name = RawValue::Text("City Mall".into());
        record.line_number = RawValue::Number(9.0);
        record.board_stop_name1 = RawValue::Text("Main Square".into());
        let html = RouteListTemplate {
            destination: "City Mall".into(),
            routes: vec![RouteCardView::from_record(&record)],
        }
        .render()
        .unwrap();
        assert!(html.contains("City Mall"));
        assert!(html.contains("Main Square"));
    }

    #[test]
    fn empty_route_list_renders_placeholder() {
        let html = RouteListTemplate {
            destination: "Nowhere".into(),
            routes: vec![],
        }
        .render()
        .unwrap();
        assert!(html.contains("No routes found"));
    }
}
