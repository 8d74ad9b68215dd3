/// A vertical span in document coordinates. `bottom` may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn offset_from_center(&self, pointer: Point) -> Point {
        let c = self.center();
        Point::new(pointer.x - c.x, pointer.y - c.y)
    }
}

/// Capabilities consumed by anything that reacts to scrolling or pointing.
/// Every method defaults to doing nothing.
pub trait Observer {
    fn region_entered(&mut self, _region: usize, _now: f64) {}
    fn region_left(&mut self, _region: usize, _now: f64) {}
    fn pointer_moved(&mut self, _pointer: Point, _bounds: Bounds, _now: f64) {}
    fn pointer_left(&mut self, _now: f64) {}
}

/// Tracks which regions contain a horizontal reference line and reports
/// changes to an [`Observer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineTracker {
    inside: Vec<bool>,
}

impl LineTracker {
    pub fn new(regions: usize) -> Self {
        Self {
            inside: vec![false; regions],
        }
    }

    pub fn sample<O: Observer + ?Sized>(
        &mut self,
        regions: &[Option<Span>],
        line: f64,
        now: f64,
        observer: &mut O,
    ) {
        if self.inside.len() < regions.len() {
            self.inside.resize(regions.len(), false);
        }
        let next = (0..self.inside.len())
            .map(|i| {
                regions
                    .get(i)
                    .copied()
                    .flatten()
                    .is_some_and(|span| span.contains(line))
            })
            .collect::<Vec<_>>();

        for (i, (was, is)) in self.inside.iter().zip(next.iter()).enumerate() {
            if *was && !*is {
                observer.region_left(i, now);
            }
        }
        for (i, (was, is)) in self.inside.iter().zip(next.iter()).enumerate() {
            if !*was && *is {
                observer.region_entered(i, now);
            }
        }
        self.inside = next;
    }
}

/// Builds back-to-back regions from the tops of consecutive blocks: each one
/// runs to the top of the next located block, the last one to `document_end`.
pub fn regions_from_tops(tops: &[Option<f64>], document_end: f64) -> Vec<Option<Span>> {
    tops.iter()
        .enumerate()
        .map(|(i, top)| {
            let top = (*top)?;
            let bottom = tops[i + 1..]
                .iter()
                .flatten()
                .copied()
                .next()
                .unwrap_or(document_end);
            Some(Span::new(top, bottom))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Observer for Recorder {
        fn region_entered(&mut self, region: usize, _now: f64) {
            self.events.push(format!("enter {region}"));
        }
        fn region_left(&mut self, region: usize, _now: f64) {
            self.events.push(format!("leave {region}"));
        }
    }

    #[test]
    fn test_regions_from_tops() {
        let regions = regions_from_tops(&[Some(0.0), Some(800.0), None, Some(2000.0)], 3000.0);
        assert_eq!(regions[0], Some(Span::new(0.0, 800.0)));
        // a missing block is skipped over
        assert_eq!(regions[1], Some(Span::new(800.0, 2000.0)));
        assert_eq!(regions[2], None);
        assert_eq!(regions[3], Some(Span::new(2000.0, 3000.0)));
    }

    #[test]
    fn test_span_is_half_open() {
        let s = Span::new(100.0, 200.0);
        assert!(s.contains(100.0));
        assert!(s.contains(199.9));
        assert!(!s.contains(200.0));
        assert!(Span::new(5.0, f64::INFINITY).contains(1e12));
    }

    #[test]
    fn test_tracker_reports_transitions_only() {
        let regions = regions_from_tops(&[Some(0.0), Some(500.0)], 1000.0);
        let mut tracker = LineTracker::new(2);
        let mut rec = Recorder::default();

        tracker.sample(&regions, 100.0, 0.0, &mut rec);
        tracker.sample(&regions, 200.0, 1.0, &mut rec);
        tracker.sample(&regions, 600.0, 2.0, &mut rec);
        tracker.sample(&regions, 1200.0, 3.0, &mut rec);

        assert_eq!(rec.events, vec!["enter 0", "leave 0", "enter 1", "leave 1"]);
    }

    #[test]
    fn test_missing_region_counts_as_left() {
        let mut tracker = LineTracker::new(1);
        let mut rec = Recorder::default();
        tracker.sample(&[Some(Span::new(0.0, 10.0))], 5.0, 0.0, &mut rec);
        tracker.sample(&[None], 5.0, 1.0, &mut rec);
        assert_eq!(rec.events, vec!["enter 0", "leave 0"]);
    }

    #[test]
    fn test_bounds_offset_from_center() {
        let b = Bounds {
            left: 100.0,
            top: 50.0,
            width: 200.0,
            height: 100.0,
        };
        assert_eq!(b.offset_from_center(Point::new(250.0, 60.0)), Point::new(50.0, -40.0));
    }
}
