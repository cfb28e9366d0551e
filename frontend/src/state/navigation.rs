use crate::config;

/// Host capability for measuring regions and scrolling the document.
pub trait ScrollHost<R> {
    /// Distance from the document top to the region, if it is mounted.
    fn offset_top(&self, region: &R) -> Option<f64>;
    fn max_scroll(&self) -> f64;
    fn scroll_to(&self, top: f64);
}

/// Scroll position that puts a region right under the sticky header.
pub fn scroll_target(offset_top: f64, header_offset: f64, max_scroll: f64) -> f64 {
    (offset_top - header_offset).clamp(0.0, max_scroll.max(0.0))
}

/// Smooth-scrolls to `region`. Returns the requested position, or `None`
/// when the region is not mounted and nothing happened.
pub fn navigate<R, H>(host: &H, region: &R) -> Option<f64>
where
    H: ScrollHost<R>,
{
    let offset_top = host.offset_top(region)?;
    let top = scroll_target(offset_top, config::HEADER_OFFSET, host.max_scroll());
    host.scroll_to(top);
    Some(top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::section::Section;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct FakeDocument {
        offsets: HashMap<Section, f64>,
        max_scroll: f64,
        scroll_y: Cell<f64>,
        scrolls: Cell<usize>,
    }

    impl FakeDocument {
        fn new(max_scroll: f64, offsets: &[(Section, f64)]) -> Self {
            Self {
                offsets: offsets.iter().copied().collect(),
                max_scroll,
                scroll_y: Cell::new(0.0),
                scrolls: Cell::new(0),
            }
        }
    }

    impl ScrollHost<Section> for FakeDocument {
        fn offset_top(&self, region: &Section) -> Option<f64> {
            self.offsets.get(region).copied()
        }

        fn max_scroll(&self) -> f64 {
            self.max_scroll
        }

        fn scroll_to(&self, top: f64) {
            self.scroll_y.set(top);
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    #[test]
    fn subtracts_header_height() {
        let doc = FakeDocument::new(5_000.0, &[(Section::Plans, 1_480.0)]);

        assert_eq!(navigate(&doc, &Section::Plans), Some(1_400.0));
        assert_eq!(doc.scroll_y.get(), 1_400.0);
    }

    #[test]
    fn clamps_to_document_bounds() {
        let doc = FakeDocument::new(
            2_000.0,
            &[(Section::Home, 20.0), (Section::Contact, 2_600.0)],
        );

        assert_eq!(navigate(&doc, &Section::Home), Some(0.0));
        assert_eq!(navigate(&doc, &Section::Contact), Some(2_000.0));
    }

    #[test]
    fn short_document_never_scrolls_negative() {
        assert_eq!(scroll_target(500.0, 80.0, -100.0), 0.0);
    }

    #[test]
    fn missing_region_is_ignored() {
        let doc = FakeDocument::new(5_000.0, &[(Section::Home, 0.0)]);

        assert_eq!(navigate(&doc, &Section::Register), None);
        assert_eq!(doc.scrolls.get(), 0);
        assert_eq!(doc.scroll_y.get(), 0.0);
    }

    #[test]
    fn repeated_navigation_lands_in_the_same_place() {
        let doc = FakeDocument::new(5_000.0, &[(Section::Register, 3_180.0)]);

        let first = navigate(&doc, &Section::Register);
        let second = navigate(&doc, &Section::Register);
        assert_eq!(first, second);
        assert_eq!(doc.scroll_y.get(), 3_100.0);
    }
}
