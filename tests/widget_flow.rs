use searchbox::{CandidateList, FilterWidget, Highlight, View, WidgetConfig, DEFAULT_CANDIDATES};
use std::time::{Duration, Instant};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn widget(items: &[&str]) -> FilterWidget {
    FilterWidget::new(CandidateList::new(items.iter().copied()), WidgetConfig::default())
}

/// Type `text` one char at a time, `gap` apart, starting at `start`.
fn type_slowly(w: &mut FilterWidget, text: &str, start: Instant, gap: Duration) -> Instant {
    let mut now = start;
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        w.set_query(typed.clone(), now);
        assert!(!w.tick(now), "committed mid-typing at {typed:?}");
        now += gap;
    }
    now
}

#[test]
fn typing_al_highlights_alexa() {
    let start = Instant::now();
    let mut w = widget(&["Siri", "Alexa", "Google"]);
    let end = type_slowly(&mut w, "al", start, ms(40));
    assert!(w.tick(end + ms(220)));

    assert_eq!(w.debounced_query(), "al");
    let View::Matches { query, results } = w.view() else {
        panic!("expected matches");
    };
    assert_eq!(results.iter().collect::<Vec<_>>(), ["Alexa"]);
    let item = results.get(0).unwrap();
    assert_eq!(Highlight::new(item, query).matched(), Some("Al"));
}

#[test]
fn typing_xyz_shows_empty_state() {
    let start = Instant::now();
    let mut w = widget(&["Siri", "Alexa", "Google"]);
    let end = type_slowly(&mut w, "xyz", start, ms(30));
    w.tick(end + ms(250));

    assert!(w.results().is_empty());
    let view = w.view();
    assert!(matches!(view, View::Empty { .. }));
    assert!(view.message().unwrap().contains("xyz"));
}

#[test]
fn rapid_typing_commits_once_with_trimmed_value() {
    let start = Instant::now();
    let mut w = widget(DEFAULT_CANDIDATES);
    let end = type_slowly(&mut w, "  Face ", start, ms(10));

    let commits: usize = (0..40)
        .map(|step| w.tick(end + ms(step * 10)) as usize)
        .sum();
    assert_eq!(commits, 1);
    assert_eq!(w.debounced_query(), "Face");
    assert_eq!(w.results().iter().collect::<Vec<_>>(), ["Facebook"]);
}

#[test]
fn every_query_matches_lowercase_containment() {
    let start = Instant::now();
    let mut w = widget(DEFAULT_CANDIDATES);
    for (i, query) in ["s", "IN", "kedin", "oo", "T", "q"].iter().enumerate() {
        let t = start + ms(1000 * i as u64);
        w.set_query(*query, t);
        w.tick(t + ms(220));

        let expected: Vec<&str> = DEFAULT_CANDIDATES
            .iter()
            .copied()
            .filter(|c| c.to_lowercase().contains(&query.to_lowercase()))
            .collect();
        assert_eq!(w.results().iter().collect::<Vec<_>>(), expected, "query {query:?}");
    }
}

#[test]
fn clear_returns_to_hint() {
    let start = Instant::now();
    let mut w = widget(&["Siri", "Alexa", "Google"]);
    w.set_query("goo", start);
    w.tick(start + ms(220));
    assert!(matches!(w.view(), View::Matches { .. }));

    w.blur();
    w.clear(start + ms(400));
    assert_eq!(w.raw_query(), "");
    assert!(w.is_focused());
    assert!(w.tick(start + ms(620)));
    assert_eq!(w.debounced_query(), "");
    assert!(matches!(w.view(), View::Hint { .. }));
}
