// active nav link on scroll
//
// a section counts as reached once its top is within this many units below
// the top of the viewport
pub const SCROLL_OFFSET: f64 = 120.0;

pub const DEFAULT_SECTION: &str = "home";

pub const ACTIVE_CLASS: &str = "is-active";

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset_top: f64,
}

// sections are in document order; the last one reached wins
pub fn active_section(sections: &[Section], scroll_y: f64) -> &str {
    let y = scroll_y + SCROLL_OFFSET;

    sections
        .iter()
        .filter(|section| section.offset_top <= y)
        .last()
        .map_or(DEFAULT_SECTION, |section| section.id.as_str())
}

// nav links point at sections by fragment
pub fn link_target(href: &str) -> &str {
    href.trim_start_matches('#')
}

// only sections a nav link points at take part; `offset_of` looks a target
// up on the page, and targets it cannot find are dropped
pub fn linked_sections<F>(hrefs: &[&str], mut offset_of: F) -> Vec<Section>
where
    F: FnMut(&str) -> Option<f64>,
{
    hrefs
        .iter()
        .map(|href| link_target(href))
        .filter_map(|id| {
            offset_of(id).map(|offset_top| Section {
                id: id.to_owned(),
                offset_top,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        [("home", 0.0), ("work", 900.0), ("about", 1800.0), ("contact", 2600.0)]
            .into_iter()
            .map(|(id, offset_top)| Section {
                id: id.to_owned(),
                offset_top,
            })
            .collect()
    }

    #[test]
    fn picks_last_reached_section() {
        let sections = sections();

        assert_eq!(active_section(&sections, 0.0), "home");
        assert_eq!(active_section(&sections, 779.0), "home");
        assert_eq!(active_section(&sections, 780.0), "work");
        assert_eq!(active_section(&sections, 5000.0), "contact");
    }

    #[test]
    fn defaults_to_home() {
        assert_eq!(active_section(&[], 400.0), "home");
    }

    #[test]
    fn unlinked_section_keeps_last_link_active() {
        let page = [
            ("home", 0.0),
            ("work", 900.0),
            ("about", 1800.0),
            ("contact", 2600.0),
            ("subscribe", 3400.0),
        ];
        let offset_of = |id: &str| {
            page.iter()
                .find(|(section, _)| *section == id)
                .map(|(_, offset)| *offset)
        };

        let linked = linked_sections(&["#home", "#work", "#about", "#contact"], offset_of);

        assert_eq!(linked, sections());
        assert_eq!(active_section(&linked, 3400.0), "contact");
        assert_eq!(active_section(&linked, 9000.0), "contact");
    }

    #[test]
    fn missing_targets_are_dropped() {
        let sections = linked_sections(&["#home", "#gone"], |id| (id == "home").then_some(0.0));

        assert_eq!(
            sections,
            vec![Section {
                id: String::from("home"),
                offset_top: 0.0,
            }]
        );
    }

    #[test]
    fn strips_fragment() {
        assert_eq!(link_target("#about"), "about");
        assert_eq!(link_target("about"), "about");
    }
}
