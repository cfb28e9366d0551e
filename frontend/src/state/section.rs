use std::collections::HashMap;
use yew::NodeRef;

/// Named regions of the landing page, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Plans,
    Schedule,
    Resources,
    Testimonials,
    Register,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Plans,
        Section::Schedule,
        Section::Resources,
        Section::Testimonials,
        Section::Register,
        Section::Contact,
    ];

    /// Sections linked from the header, in display order.
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Plans,
        Section::Schedule,
        Section::Contact,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Plans => "plans",
            Section::Schedule => "schedule",
            Section::Resources => "resources",
            Section::Testimonials => "testimonials",
            Section::Register => "register",
            Section::Contact => "contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Plans => "Plans",
            Section::Schedule => "Schedule",
            Section::Resources => "Resources",
            Section::Testimonials => "Testimonials",
            Section::Register => "Register",
            Section::Contact => "Contact",
        }
    }
}

/// Element handles for every section, created once per page.
#[derive(Clone, PartialEq)]
pub struct SectionRefs {
    refs: HashMap<Section, NodeRef>,
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            refs: Section::ALL
                .into_iter()
                .map(|section| (section, NodeRef::default()))
                .collect(),
        }
    }

    pub fn get(&self, section: Section) -> NodeRef {
        self.refs.get(&section).cloned().unwrap_or_default()
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_name(section.name()), Some(section));
        }
        assert_eq!(Section::from_name("pricing"), None);
    }

    #[test]
    fn header_links_skip_inner_sections() {
        assert!(!Section::NAV.contains(&Section::Register));
        assert!(!Section::NAV.contains(&Section::Testimonials));
        assert_eq!(Section::NAV.first(), Some(&Section::Home));
    }

    #[test]
    fn refs_start_unset() {
        let refs = SectionRefs::new();
        for section in Section::ALL {
            assert!(refs.get(section).get().is_none());
        }
    }
}
