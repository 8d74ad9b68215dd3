use thiserror::Error;

use crate::content::Section;
use crate::motion::{Ease, Lerp, MotionConfig, ScrollTo, Tween};
use crate::observer::{regions_from_tops, LineTracker, Observer};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Indicator {
    pub offset: f64,
    pub width: f64,
}

impl Indicator {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    pub fn is_collapsed(&self) -> bool {
        self.width <= 0.0
    }

    pub fn to_style(&self) -> String {
        format!("left: {:.2}px; width: {:.2}px;", self.offset, self.width.max(0.0))
    }
}

impl Lerp for Indicator {
    fn lerp(self, to: Self, t: f64) -> Self {
        Indicator {
            offset: self.offset.lerp(to.offset, t),
            width: self.width.lerp(to.width, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Inactive,
    ActiveOn(usize),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavError {
    #[error("No section with id '{0}'")]
    UnknownSection(String),
    #[error("Section '{0}' is not in the document")]
    MissingTarget(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSample {
    /// Document-space top of each section block, `None` if it can't be found.
    pub tops: Vec<Option<f64>>,
    pub document_end: f64,
    pub scroll_y: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavSync {
    sections: &'static [Section],
    config: MotionConfig,
    tracker: LineTracker,
    entered: Vec<Option<u64>>,
    entries: u64,
    active: Option<usize>,
    hovered: Option<usize>,
    links: Vec<Option<Indicator>>,
    indicator: Tween<Indicator>,
    scroll: Option<ScrollTo>,
    menu_open: bool,
}

impl NavSync {
    pub fn new(sections: &'static [Section], config: MotionConfig) -> Self {
        Self {
            sections,
            config,
            tracker: LineTracker::new(sections.len()),
            entered: vec![None; sections.len()],
            entries: 0,
            active: None,
            hovered: None,
            links: vec![None; sections.len()],
            indicator: Tween::settled(Indicator::default()),
            scroll: None,
            menu_open: false,
        }
    }

    pub fn highlight(&self) -> Highlight {
        match self.active {
            Some(i) => Highlight::ActiveOn(i),
            None => Highlight::Inactive,
        }
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.active.map(|i| self.sections[i].id)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Records where link `index` currently sits. Returns whether it moved.
    pub fn set_link_box(&mut self, index: usize, link: Option<Indicator>, now: f64) -> bool {
        let Some(slot) = self.links.get_mut(index) else {
            return false;
        };
        if *slot == link {
            return false;
        }
        *slot = link;
        self.refresh_indicator(now);
        true
    }

    /// Where the indicator is heading: the hovered link, else the active
    /// link, else collapsed in place.
    pub fn indicator_target(&self) -> Indicator {
        self.hovered
            .or(self.active)
            .and_then(|i| self.links.get(i).copied().flatten())
            .unwrap_or(Indicator {
                offset: self.indicator.target().offset,
                width: 0.0,
            })
    }

    pub fn indicator(&self, now: f64) -> Indicator {
        self.indicator.value_at(now)
    }

    pub fn observe_scroll(&mut self, sample: &ScrollSample, now: f64) {
        let tops = &sample.tops[..sample.tops.len().min(self.sections.len())];
        let regions = regions_from_tops(tops, sample.document_end);
        let line = sample.scroll_y + sample.viewport_height * self.config.focus_line;
        let mut tracker = std::mem::take(&mut self.tracker);
        tracker.sample(&regions, line, now, self);
        self.tracker = tracker;
    }

    pub fn hover(&mut self, index: usize, now: f64) {
        if index >= self.sections.len() {
            return;
        }
        self.hovered = Some(index);
        self.refresh_indicator(now);
    }

    pub fn unhover(&mut self, index: usize, now: f64) {
        if self.hovered != Some(index) {
            return;
        }
        self.hovered = None;
        self.refresh_indicator(now);
    }

    /// Starts scrolling to `target_top`. The active section is left to the scroll observer.
    pub fn click(
        &mut self,
        id: &str,
        target_top: Option<f64>,
        scroll_y: f64,
        now: f64,
    ) -> Result<(), NavError> {
        self.close_menu();
        if !self.sections.iter().any(|s| s.id == id) {
            return Err(NavError::UnknownSection(id.to_string()));
        }
        let top = target_top.ok_or_else(|| NavError::MissingTarget(id.to_string()))?;
        self.scroll_to(top, scroll_y, self.config.nav_scroll_ms, Ease::power_in_out(2), now);
        Ok(())
    }

    pub fn scroll_to(&mut self, top: f64, scroll_y: f64, duration: f64, ease: Ease, now: f64) {
        let from = self
            .scroll
            .map(|s| s.offset_at(now))
            .unwrap_or(scroll_y);
        self.scroll = Some(ScrollTo::new(from, top, now, duration, ease));
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Scroll offset to apply at `now`, if a scroll animation is running. The
    /// final offset is reported once, after which the animation is dropped.
    pub fn scroll_offset(&mut self, now: f64) -> Option<f64> {
        let scroll = self.scroll?;
        if scroll.is_done(now) {
            self.scroll = None;
        }
        Some(scroll.offset_at(now))
    }

    fn activate(&mut self, index: Option<usize>, now: f64) {
        if self.active != index {
            self.active = index;
            self.refresh_indicator(now);
        }
    }

    fn refresh_indicator(&mut self, now: f64) {
        let target = self.indicator_target();
        if target == self.indicator.target() {
            return;
        }
        let duration = if target.is_collapsed() {
            self.config.indicator_collapse_ms
        } else {
            self.config.indicator_ms
        };
        self.indicator
            .retarget(now, target, duration, Ease::power_out(2));
    }
}

impl Observer for NavSync {
    fn region_entered(&mut self, region: usize, now: f64) {
        if region >= self.sections.len() {
            return;
        }
        self.entries += 1;
        if let Some(slot) = self.entered.get_mut(region) {
            *slot = Some(self.entries);
        }
        self.activate(Some(region), now);
    }

    fn region_left(&mut self, region: usize, now: f64) {
        if let Some(slot) = self.entered.get_mut(region) {
            *slot = None;
        }
        if self.active == Some(region) {
            // fall back to whichever region still in focus was entered last
            let fallback = self
                .entered
                .iter()
                .enumerate()
                .filter_map(|(i, e)| e.map(|seq| (seq, i)))
                .max()
                .map(|(_, i)| i);
            self.activate(fallback, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SECTIONS;

    const VH: f64 = 1000.0;
    const TOPS: [f64; 5] = [0.0, 1000.0, 2200.0, 3400.0, 4600.0];
    const END: f64 = 5600.0;

    fn sync() -> NavSync {
        let mut s = NavSync::new(&SECTIONS, MotionConfig::default());
        let links = [(0.0, 60.0), (64.0, 110.0), (178.0, 80.0), (262.0, 100.0), (366.0, 76.0)];
        for (i, (offset, width)) in links.into_iter().enumerate() {
            s.set_link_box(i, Some(Indicator::new(offset, width)), 0.0);
        }
        s
    }

    fn sample(scroll_y: f64) -> ScrollSample {
        ScrollSample {
            tops: TOPS.iter().map(|t| Some(*t)).collect(),
            document_end: END,
            scroll_y,
            viewport_height: VH,
        }
    }

    fn settled(s: &NavSync) -> Indicator {
        s.indicator(f64::MAX)
    }

    #[test]
    fn test_starts_inactive_and_collapsed() {
        let s = sync();
        assert_eq!(s.highlight(), Highlight::Inactive);
        assert!(s.indicator_target().is_collapsed());
    }

    #[test]
    fn test_center_inside_projects() {
        let mut s = sync();
        // center line at 2500, inside [2200, 3400)
        s.observe_scroll(&sample(2000.0), 0.0);
        assert_eq!(s.active_id(), Some("projects"));
        assert_eq!(s.highlight(), Highlight::ActiveOn(2));
        assert_eq!(s.indicator_target(), Indicator::new(178.0, 80.0));
        assert_eq!(settled(&s), Indicator::new(178.0, 80.0));
    }

    #[test]
    fn test_at_most_one_active_while_scrolling() {
        let mut s = sync();
        let mut y = 0.0;
        while y < END {
            s.observe_scroll(&sample(y), y);
            let active = (0..SECTIONS.len()).filter(|i| s.is_active(*i)).count();
            assert!(active <= 1);
            match s.highlight() {
                Highlight::ActiveOn(i) => {
                    let line = y + VH / 2.0;
                    let bottom = TOPS.get(i + 1).copied().unwrap_or(END);
                    assert!(line >= TOPS[i] && line < bottom);
                    assert_eq!(s.indicator_target(), s.links[i].unwrap());
                }
                Highlight::Inactive => assert!(s.indicator_target().is_collapsed()),
            }
            y += 37.0;
        }
    }

    #[test]
    fn test_leaving_last_region_goes_inactive() {
        let mut s = sync();
        s.observe_scroll(&sample(4500.0), 0.0);
        assert_eq!(s.active_id(), Some("contact"));
        // center line past the end of the document
        s.observe_scroll(&sample(5200.0), 10.0);
        assert_eq!(s.highlight(), Highlight::Inactive);
        let collapsed = s.indicator_target();
        assert_eq!(collapsed.width, 0.0);
        // collapses in place rather than sliding away
        assert_eq!(collapsed.offset, 366.0);
    }

    #[test]
    fn test_hover_overrides_then_snaps_back() {
        let mut s = sync();
        s.observe_scroll(&sample(2000.0), 0.0);
        s.hover(4, 100.0);
        assert_eq!(s.indicator_target(), Indicator::new(366.0, 76.0));
        assert!(s.is_active(2));
        s.unhover(4, 200.0);
        assert_eq!(s.indicator_target(), Indicator::new(178.0, 80.0));
        assert_eq!(settled(&s), Indicator::new(178.0, 80.0));
    }

    #[test]
    fn test_hover_leave_without_active_collapses() {
        let mut s = sync();
        s.hover(1, 0.0);
        assert_eq!(settled(&s), Indicator::new(64.0, 110.0));
        s.unhover(1, 500.0);
        assert_eq!(settled(&s).width, 0.0);
    }

    #[test]
    fn test_stale_unhover_is_ignored() {
        let mut s = sync();
        s.hover(1, 0.0);
        s.hover(3, 10.0);
        s.unhover(1, 20.0);
        assert_eq!(s.indicator_target(), Indicator::new(262.0, 100.0));
    }

    #[test]
    fn test_indicator_motion_is_restartable() {
        let mut s = sync();
        s.hover(1, 0.0);
        s.hover(4, 150.0);
        let at = s.indicator(150.0);
        // retargeting starts from where the line was, not from a jump
        assert!(at.offset > 0.0 && at.offset < 366.0);
        assert_eq!(s.indicator(150.0 + 300.0), Indicator::new(366.0, 76.0));
    }

    #[test]
    fn test_click_scrolls_then_activates() {
        let mut s = sync();
        s.toggle_menu();
        assert!(s.menu_open());
        s.click("contact", Some(4600.0), 0.0, 0.0).expect("contact exists");
        assert!(!s.menu_open());
        // clicking alone does not change the active section
        assert_eq!(s.highlight(), Highlight::Inactive);

        let mut now = 0.0;
        let mut last = 0.0;
        while let Some(y) = s.scroll_offset(now) {
            assert!(y >= last);
            last = y;
            s.observe_scroll(&sample(y), now);
            now += 16.0;
        }
        assert_eq!(last, 4600.0);
        assert!(!s.is_scrolling());
        assert_eq!(s.active_id(), Some("contact"));
        assert_eq!(settled(&s), Indicator::new(366.0, 76.0));
    }

    #[test]
    fn test_scroll_is_eased_over_duration() {
        let mut s = sync();
        s.click("projects", Some(2200.0), 0.0, 0.0).expect("projects exists");
        let first = s.scroll_offset(16.0).expect("scrolling");
        assert!(first > 0.0 && first < 2200.0 * 16.0 / 1200.0);
        assert_eq!(s.scroll_offset(1200.0), Some(2200.0));
        assert_eq!(s.scroll_offset(1216.0), None);
    }

    #[test]
    fn test_latest_click_wins() {
        let mut s = sync();
        s.click("contact", Some(4600.0), 0.0, 0.0).expect("contact exists");
        let mid = s.scroll_offset(600.0).expect("scrolling");
        s.click("certificates", Some(1000.0), mid, 600.0).expect("certificates exists");
        assert_eq!(s.scroll_offset(600.0), Some(mid));
        assert_eq!(s.scroll_offset(1800.0), Some(1000.0));
    }

    #[test]
    fn test_click_missing_target_is_noop() {
        let mut s = sync();
        s.toggle_menu();
        assert_eq!(
            s.click("contact", None, 0.0, 0.0),
            Err(NavError::MissingTarget("contact".to_string()))
        );
        assert_eq!(
            s.click("blog", Some(0.0), 0.0, 0.0),
            Err(NavError::UnknownSection("blog".to_string()))
        );
        assert!(!s.is_scrolling());
        assert!(!s.menu_open());
    }

    #[test]
    fn test_missing_section_never_activates() {
        let mut s = sync();
        let mut smp = sample(2000.0);
        smp.tops[2] = None;
        s.observe_scroll(&smp, 0.0);
        // certificates now stretches over the missing projects block
        assert_eq!(s.active_id(), Some("certificates"));
    }

    #[test]
    fn test_extra_blocks_are_ignored() {
        let mut s = sync();
        let mut smp = sample(5000.0);
        smp.tops.push(Some(5200.0));
        smp.document_end = 6400.0;
        // center line at 5500 falls in the unknown sixth block
        s.observe_scroll(&smp, 0.0);
        assert_eq!(s.highlight(), Highlight::ActiveOn(4));
        assert_eq!(s.active_id(), Some("contact"));

        let mut s = sync();
        s.region_entered(5, 0.0);
        assert_eq!(s.highlight(), Highlight::Inactive);
        assert_eq!(s.active_id(), None);
    }

    #[test]
    fn test_overlapping_regions_prefer_most_recent() {
        let mut s = sync();
        s.region_entered(1, 0.0);
        s.region_entered(2, 1.0);
        assert_eq!(s.active_id(), Some("projects"));
        s.region_left(2, 2.0);
        assert_eq!(s.active_id(), Some("certificates"));
        s.region_left(1, 3.0);
        assert_eq!(s.highlight(), Highlight::Inactive);
    }

    #[test]
    fn test_link_without_box_collapses() {
        let mut s = NavSync::new(&SECTIONS, MotionConfig::default());
        s.observe_scroll(&sample(0.0), 0.0);
        assert_eq!(s.active_id(), Some("home"));
        assert!(s.indicator_target().is_collapsed());
        assert!(s.set_link_box(0, Some(Indicator::new(0.0, 60.0)), 10.0));
        assert!(!s.set_link_box(0, Some(Indicator::new(0.0, 60.0)), 20.0));
        assert_eq!(s.indicator_target(), Indicator::new(0.0, 60.0));
    }
}
