use raceline::api::{AxisMode, EngineConfig, SortKey, TimelineEngine};
use raceline::core::Viewport;

fn drivers_json() -> &'static str {
    r#"[
      {"name": "Jaime Alguersuari", "dob": "1990-03-23",
       "races": [0, 1], "pos": [14, 9], "age": [19.3, 19.4]},
      {"name": "Fernando Alonso", "dob": "1981-07-29",
       "races": [0, 1, 2], "pos": [1, 2, 1], "age": [19.6, 19.7, 19.9]},
      {"name": "Rubens Barrichello", "dob": "1972-05-23",
       "races": [0, 1, 2, 3], "pos": [3, 0, 5, 11], "age": [21.0, 21.1, 21.3, 21.5]},
      {"name": "Michael Schumacher", "dob": "1969-01-03",
       "races": [1, 2, 3], "pos": [1, 1, 4], "age": [22.6, 22.8, 23.0]}
    ]"#
}

fn races_json() -> &'static str {
    r#"[
      {"name": "Australian Grand Prix", "date": "1994-03-27"},
      {"name": "Brazilian Grand Prix", "date": "1994-04-10"},
      {"name": "Monaco Grand Prix", "date": "1994-05-15"},
      {"name": "Spanish Grand Prix", "date": "1994-05-29"}
    ]"#
}

fn engine() -> TimelineEngine {
    let config = EngineConfig {
        screen: Viewport::new(1920, 1080),
        initial_driver_count: 2,
        full_render_delay_ms: 1000.0,
    };
    let mut engine = TimelineEngine::new(config).expect("engine");
    engine
        .load(drivers_json(), races_json(), 0.0)
        .expect("load");
    engine
}

#[test]
fn startup_renders_in_two_phases() {
    let mut engine = engine();
    assert!(engine.full_render_pending());
    assert_eq!(engine.frame().expect("frame").rows.len(), 2);

    engine.step(999.0).expect("step");
    assert_eq!(engine.frame().expect("frame").rows.len(), 2);

    engine.step(1000.0).expect("step");
    assert!(!engine.full_render_pending());
    assert_eq!(engine.frame().expect("frame").rows.len(), 4);
}

#[test]
fn narrow_layout_applies_to_every_mode() {
    let mut engine = engine();
    for mode in AxisMode::ALL {
        engine.set_mode(mode).expect("mode");
        assert_eq!(engine.layout().chart_width, 1200);
        assert_eq!(engine.layout().mark_width, 2.0);
        assert_eq!(engine.outer_width(), 1330);
    }
}

#[test]
fn wide_layout_follows_the_mode_table() {
    let mut engine = engine();
    engine.set_wide_view(true).expect("wide");

    engine.set_mode(AxisMode::Date).expect("mode");
    assert_eq!(engine.layout().chart_width, 24_000);
    assert_eq!(engine.layout().mark_width, 6.0);

    engine.set_mode(AxisMode::Age).expect("mode");
    assert_eq!(engine.layout().chart_width, 6000);
    assert_eq!(engine.layout().mark_width, 4.0);

    engine.set_mode(AxisMode::Histogram).expect("mode");
    assert_eq!(engine.layout().chart_width, 2500);
    assert_eq!(engine.layout().mark_width, 6.0);

    engine.set_wide_view(false).expect("narrow");
    assert_eq!(engine.layout().chart_width, 1200);
    assert_eq!(engine.layout().mark_width, 2.0);
}

#[test]
fn mode_change_updates_sort_and_label_floating() {
    let mut engine = engine();
    // Complete the deferred full render so every row takes part in the sort.
    engine.step(1000.0).expect("step");

    engine.set_mode(AxisMode::Histogram).expect("mode");
    assert_eq!(engine.chart().order(), SortKey::RaceCount);
    assert_eq!(engine.menu().selected(), AxisMode::Histogram);
    // Race-count order is descending.
    let frame = engine.frame().expect("frame");
    assert_eq!(frame.rows[0].slug, "rubensbarrichello");

    engine.set_mode(AxisMode::Age).expect("mode");
    assert_eq!(engine.chart().order(), SortKey::DateOfBirth);
    // Date-of-birth order puts the youngest driver first.
    let frame = engine.frame().expect("frame");
    assert_eq!(frame.rows[0].slug, "jaimealguersuari");
}

#[test]
fn wide_date_view_homes_the_scroll_to_the_right_edge() {
    let mut engine = engine();
    engine.story_close(0.0).expect("close");
    engine.set_wide_view(true).expect("wide");
    engine.set_mode(AxisMode::Date).expect("mode");
    assert_eq!(engine.scroll_offset(), (24_000.0, 0.0));

    engine.set_mode(AxisMode::Age).expect("mode");
    assert_eq!(engine.scroll_offset(), (0.0, 0.0));
}

#[test]
fn header_tracks_the_scroll_offset() {
    let mut engine = engine();
    engine.step(1000.0).expect("step");

    // Mid-flight through the slide-1 scroll the pinned header follows.
    engine.story_next(2000.0).expect("next");
    engine.step(2750.0).expect("step");

    let (_, y) = engine.scroll_offset();
    assert!(y > 0.0);
    assert_eq!(engine.header_top(), y);
}

#[test]
fn invalid_screen_is_rejected_at_construction() {
    let config = EngineConfig {
        screen: Viewport::new(0, 0),
        ..EngineConfig::default()
    };
    assert!(TimelineEngine::new(config).is_err());
}

#[test]
fn load_failure_leaves_nothing_rendered() {
    let mut engine = TimelineEngine::new(EngineConfig::default()).expect("engine");
    assert!(engine.load("broken", races_json(), 0.0).is_err());
    assert_eq!(engine.drivers().len(), 0);
    assert!(!engine.full_render_pending());
}
