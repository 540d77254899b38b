//! The keystroke handler driving a results view.

use super::common::{fixture_index, fixture_widget, scenario_index, RecordingView};
use tissue_search::{ResultsView, SearchWidget, WidgetConfig};

#[test]
fn test_typing_replaces_results_each_keystroke() {
    let widget = fixture_widget();
    let mut view = RecordingView::default();

    for value in ["b", "be", "bel", "belt"] {
        widget.handle_input(value, &mut view);
    }

    assert_eq!(view.history.len(), 4);
    assert_eq!(
        view.current(),
        r#"<p><a href="/machines/belt-slip/">Belt slip under load</a></p>"#
    );
}

#[test]
fn test_view_shows_latest_input_not_earlier_one() {
    let widget = fixture_widget();
    let mut view = String::new();
    widget.handle_input("coolant", &mut view);
    widget.handle_input("lathe", &mut view);
    assert!(view.contains("/machines/lathe-chatter/"));
    assert!(!view.contains("coolant"));
}

#[test]
fn test_titles_are_escaped_by_default() {
    let widget = fixture_widget();
    let mut view = String::new();
    widget.handle_input("chatter", &mut view);
    assert_eq!(
        view,
        r#"<p><a href="/machines/lathe-chatter/">Lathe chatter &amp; tool height</a></p>"#
    );
}

#[test]
fn test_raw_markup_opt_in() {
    let config = WidgetConfig {
        raw_markup: true,
        ..WidgetConfig::default()
    };
    let widget = SearchWidget::new(fixture_index(), &config);
    assert_eq!(
        widget.render("chatter"),
        r#"<p><a href="/machines/lathe-chatter/">Lathe chatter & tool height</a></p>"#
    );
}

#[test]
fn test_modes_agree_without_markup_characters() {
    let raw = SearchWidget::new(
        scenario_index(),
        &WidgetConfig {
            raw_markup: true,
            ..WidgetConfig::default()
        },
    );
    let escaped = SearchWidget::new(scenario_index(), &WidgetConfig::default());
    for query in ["", "cnc", "slip", "xyz"] {
        assert_eq!(raw.render(query), escaped.render(query));
    }
}

#[test]
fn test_custom_no_matches_message() {
    let config = WidgetConfig::from_json(r#"{"noMatchesMessage": "Nothing here"}"#).unwrap();
    let widget = SearchWidget::new(scenario_index(), &config);
    assert_eq!(widget.render("xyz"), "<p><em>Nothing here</em></p>");
}

/// A view that counts writes, standing in for a DOM element.
struct CountingView {
    writes: usize,
    last: String,
}

impl ResultsView for CountingView {
    fn replace_content(&mut self, markup: &str) {
        self.writes += 1;
        self.last = markup.to_string();
    }
}

#[test]
fn test_handler_writes_exactly_once_per_keystroke() {
    let widget = fixture_widget();
    let mut view = CountingView {
        writes: 0,
        last: String::new(),
    };
    widget.handle_input("", &mut view);
    widget.handle_input("zzz", &mut view);
    assert_eq!(view.writes, 2);
    assert_eq!(view.last, "<p><em>No matches found.</em></p>");
}

#[test]
fn test_handler_accepts_trait_objects() {
    let widget = fixture_widget();
    let mut recording = RecordingView::default();
    let view: &mut dyn ResultsView = &mut recording;
    widget.handle_input("about", view);
    assert_eq!(
        recording.current(),
        r#"<p><a href="/about/">About this wiki</a></p>"#
    );
}
