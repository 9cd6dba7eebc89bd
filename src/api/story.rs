//! Guided narrative sequence over the chart.

use crate::api::mode::AxisMode;

/// One step of the guided narrative: a driver to spotlight, the text to show,
/// a scroll target, a panel anchor, and the axis mode the slide needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub driver: &'static str,
    pub text: &'static str,
    pub scroll_to: f64,
    /// Panel anchor: (left, top) in page pixels.
    pub position: (f64, f64),
    pub mode: AxisMode,
}

pub const SLIDES: [Slide; 9] = [
    Slide {
        driver: "jaimealguersuari",
        text: "Jaime Alguersuari is currently the youngest ever driver to have competed in \
               Formula 1 making his debut aged 19. Max Verstappen is set to break this record \
               in 2015 when he's set to race at the age of 17.",
        scroll_to: 0.0,
        position: (260.0, 160.0),
        mode: AxisMode::Age,
    },
    Slide {
        driver: "fernandoalonso",
        text: "2 times world champion Fernando Alonso was another young starter, making his \
               debut at 19. When he won his first championship in 2005 he became the youngest \
               ever world champion. However Sebastian Vettel now holds this record, winning \
               the 2010 championship aged 23 yrs.",
        scroll_to: 530.0,
        position: (580.0, 805.0),
        mode: AxisMode::Age,
    },
    Slide {
        driver: "marioandretti",
        text: "As we look back in F1's history we see that drivers tended to start later. \
               Mario Andretti was 28 when he started racing in F1 in 1968 following a \
               successful racing career in the US.",
        scroll_to: 6900.0,
        position: (368.0, 7260.0),
        mode: AxisMode::Age,
    },
    Slide {
        driver: "arthurlegat",
        text: "The oldest debut drive was Belgian Arthur Legat who was 53 when he drove in \
               the 1952 Belgian Grand Prix then once again the following year.",
        scroll_to: 16_100.0,
        position: (600.0, 16_495.0),
        mode: AxisMode::Age,
    },
    Slide {
        driver: "louischiron",
        text: "However the oldest driver in F1 was Louis Chiron who drove the 1958 Monaco \
               Grand Prix aged 58.",
        scroll_to: 16_000.0,
        position: (528.0, 16_485.0),
        mode: AxisMode::Age,
    },
    Slide {
        driver: "rubensbarrichello",
        text: "Rubens Barrichello holds the distinction of having driven in the most F1 \
               races. His career started with Jordan in 1993 and by the end of 2011 when he \
               retired he'd competed in 326 race weekends.",
        scroll_to: 0.0,
        position: (410.0, 100.0),
        mode: AxisMode::Histogram,
    },
    Slide {
        driver: "michaelschumacher",
        text: "Michael Schumacher has the most wins of any driver in history. He competed \
               308 times, winning 91 times.",
        scroll_to: 0.0,
        position: (410.0, 120.0),
        mode: AxisMode::Histogram,
    },
    Slide {
        driver: "juanfangio",
        text: "However the driver with the most wins per race is Juan Manuel Fangio who \
               raced 58 times and won 24 times, a win ratio of 41.3%.",
        scroll_to: 2200.0,
        position: (340.0, 2500.0),
        mode: AxisMode::Histogram,
    },
    Slide {
        driver: "sebastianvettel",
        text: "Of the current drivers, Sebastian Vettel has the most wins at 39. His closest \
               competitors are Lewis Hamilton and Fernando Alonso with 33 and 32 wins, \
               respectively. Will they catch him? Close this box to explore further...",
        scroll_to: 600.0,
        position: (124.0, 920.0),
        mode: AxisMode::Histogram,
    },
];

const BOUNDARY_BUTTON_OPACITY: f64 = 0.2;

/// Presentation state of the narrative panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoryPanel {
    pub visible: bool,
    pub opacity: f64,
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub back_opacity: f64,
    pub next_opacity: f64,
}

/// Ordered slide playback with clamped forward/back navigation.
#[derive(Debug)]
pub struct StoryPlayer {
    current: usize,
    enabled: bool,
    panel: StoryPanel,
}

impl Default for StoryPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: 0,
            enabled: true,
            panel: StoryPanel::default(),
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn slide(&self) -> Slide {
        SLIDES[self.current]
    }

    #[must_use]
    pub fn panel(&self) -> &StoryPanel {
        &self.panel
    }

    /// Advances one slide. A no-op at the last slide.
    ///
    /// Returns whether the index moved; the caller re-renders on `true`.
    pub fn next(&mut self) -> bool {
        if self.current >= SLIDES.len() - 1 {
            return false;
        }
        self.current += 1;
        true
    }

    /// Steps back one slide. A no-op at slide zero.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Ends the guided tour. The index is kept so re-enabling resumes.
    pub fn close(&mut self) {
        self.enabled = false;
    }

    /// Panel goes transparent while the viewport travels to the slide target.
    pub fn conceal_panel(&mut self) {
        self.panel.opacity = 0.0;
    }

    /// Fills and places the panel for the current slide.
    pub fn reveal_panel(&mut self) {
        let slide = self.slide();
        self.panel.visible = true;
        self.panel.opacity = 1.0;
        self.panel.text = slide.text.to_owned();
        self.panel.left = slide.position.0;
        self.panel.top = slide.position.1;
        self.panel.back_opacity = if self.current > 0 {
            1.0
        } else {
            BOUNDARY_BUTTON_OPACITY
        };
        self.panel.next_opacity = if self.current < SLIDES.len() - 1 {
            1.0
        } else {
            BOUNDARY_BUTTON_OPACITY
        };
    }

    pub fn hide_panel(&mut self) {
        self.panel.visible = false;
        self.panel.opacity = 0.0;
    }
}
