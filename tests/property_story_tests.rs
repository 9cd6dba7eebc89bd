use proptest::prelude::*;
use raceline::api::{SLIDES, ScrollAnimator, ScrollStart, StoryPlayer};

#[derive(Debug, Clone, Copy)]
enum NavOp {
    Next,
    Prev,
}

fn nav_op() -> impl Strategy<Value = NavOp> {
    prop_oneof![Just(NavOp::Next), Just(NavOp::Prev)]
}

proptest! {
    #[test]
    fn story_index_stays_in_bounds(ops in proptest::collection::vec(nav_op(), 0..200)) {
        let mut player = StoryPlayer::new();
        for op in ops {
            match op {
                NavOp::Next => { player.next(); }
                NavOp::Prev => { player.prev(); }
            }
            prop_assert!(player.current() < SLIDES.len());
        }
    }

    #[test]
    fn scroll_offset_stays_between_start_and_target(
        target in -100_000.0f64..100_000.0,
        times in proptest::collection::vec(0.0f64..10_000.0, 1..50),
    ) {
        prop_assume!(target != 0.0);

        let mut animator = ScrollAnimator::new();
        let started = animator.scroll_to(target, 0.0).expect("scroll");
        prop_assert!(matches!(started, ScrollStart::Animating(_)));

        let low = target.min(0.0);
        let high = target.max(0.0);
        for now in times {
            animator.step(now).expect("step");
            prop_assert!(animator.offset_y() >= low - 1e-9);
            prop_assert!(animator.offset_y() <= high + 1e-9);
        }
    }

    #[test]
    fn completed_scroll_lands_exactly_on_target(
        target in -100_000.0f64..100_000.0,
    ) {
        prop_assume!(target != 0.0);

        let mut animator = ScrollAnimator::new();
        animator.scroll_to(target, 0.0).expect("scroll");
        // The duration clamp caps every animation at 3000ms.
        let finished = animator.step(3000.0).expect("step");
        prop_assert!(finished.is_some());
        prop_assert!((animator.offset_y() - target).abs() <= 1e-9);
    }
}
