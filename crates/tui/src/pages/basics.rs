//! Basics composition: essential site features, then navigation components.

use std::time::Instant;

use super::Section;
use crate::widgets::common::{GroupHeading, PageHeading};
use crate::widgets::navigation::{AccordionSection, BreadcrumbSection, TabsSection};
use crate::widgets::search::SearchSection;
use crate::widgets::store::StoreSection;

pub(super) fn sections(_now: Instant) -> Vec<Box<dyn Section>> {
    vec![
        Box::new(PageHeading::new(
            "Basics",
            "Core site features and navigation components.",
        )),
        Box::new(GroupHeading::new(
            "Essential features",
            "Search, accounts, cart and pagination.",
        )),
        Box::new(SearchSection::default()),
        Box::new(StoreSection::default()),
        Box::new(GroupHeading::new(
            "Navigation components",
            "Tabs, accordion and breadcrumbs.",
        )),
        Box::new(TabsSection::default()),
        Box::new(AccordionSection::default()),
        Box::new(BreadcrumbSection::default()),
    ]
}
