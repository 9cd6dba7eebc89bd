use chrono::NaiveDate;
use raceline::api::{TooltipContent, TooltipPresenter, finish_label};
use raceline::core::Viewport;
use raceline::interaction::{HoverSample, PointerPosition};

fn sample() -> HoverSample {
    HoverSample {
        driver: "Ayrton Senna".to_owned(),
        race: "Monaco Grand Prix".to_owned(),
        date: NaiveDate::from_ymd_opt(1992, 5, 31).expect("date"),
        position: 1,
        age: 32.0,
    }
}

fn presenter() -> TooltipPresenter {
    TooltipPresenter::new(Viewport::new(1920, 1080))
}

#[test]
fn show_populates_content_and_offsets_from_pointer() {
    let mut tooltip = presenter();
    tooltip.show(
        TooltipContent::from_sample(&sample()),
        PointerPosition::new(100.0, 200.0),
    );

    let state = tooltip.state();
    assert!(state.visible);
    assert_eq!(state.opacity, 0.9);
    assert_eq!(state.left, 110.0);
    assert_eq!(state.top, 210.0);

    let content = state.content.as_ref().expect("content");
    assert_eq!(content.driver, "Ayrton Senna");
    assert_eq!(content.race, "Monaco Grand Prix");
    assert_eq!(content.date, "1992-05-31");
    assert_eq!(content.position, "Winner");
}

#[test]
fn pointer_in_right_half_shifts_the_box_left() {
    let mut tooltip = presenter();
    tooltip.show(
        TooltipContent::from_sample(&sample()),
        PointerPosition::new(1000.0, 200.0),
    );

    // 1000 > 960, so the 240px shift applies on top of the 10px margin.
    assert_eq!(tooltip.state().left, 770.0);
    assert_eq!(tooltip.state().top, 210.0);
}

#[test]
fn pointer_in_bottom_half_shifts_the_box_up() {
    let mut tooltip = presenter();
    tooltip.show(
        TooltipContent::from_sample(&sample()),
        PointerPosition::new(100.0, 600.0),
    );

    assert_eq!(tooltip.state().left, 110.0);
    assert_eq!(tooltip.state().top, 500.0);
}

#[test]
fn hide_fades_out_and_repeated_hide_is_idempotent() {
    let mut tooltip = presenter();
    tooltip.show(
        TooltipContent::from_sample(&sample()),
        PointerPosition::new(100.0, 100.0),
    );

    tooltip.hide();
    assert!(!tooltip.state().visible);
    assert_eq!(tooltip.state().opacity, 0.0);

    let before = tooltip.state().clone();
    tooltip.hide();
    assert_eq!(*tooltip.state(), before);
}

#[test]
fn update_tracks_pointer_only_while_visible() {
    let mut tooltip = presenter();

    tooltip.update(PointerPosition::new(400.0, 400.0));
    assert_eq!(tooltip.state().left, 0.0);

    tooltip.show(
        TooltipContent::from_sample(&sample()),
        PointerPosition::new(100.0, 100.0),
    );
    tooltip.update(PointerPosition::new(300.0, 320.0));
    assert_eq!(tooltip.state().left, 310.0);
    assert_eq!(tooltip.state().top, 330.0);

    // Same pointer, same state.
    let before = tooltip.state().clone();
    tooltip.update(PointerPosition::new(300.0, 320.0));
    assert_eq!(*tooltip.state(), before);
}

#[test]
fn finish_labels_match_rank_semantics() {
    assert_eq!(finish_label(1), "Winner");
    assert_eq!(finish_label(0), "DNF");
    assert_eq!(finish_label(2), "2nd");
    assert_eq!(finish_label(11), "11th");
    assert_eq!(finish_label(21), "21st");
    assert_eq!(finish_label(22), "22nd");
}
