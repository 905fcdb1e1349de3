//! Interactions composition: gestures, data display and special features.

use std::time::Instant;

use super::Section;
use crate::widgets::common::{GroupHeading, PageHeading};
use crate::widgets::data_display::{ChartSection, DataTableSection, DeviceShareSection};
use crate::widgets::gestures::{
    ContextMenuSection, DoubleActivationSection, GestureSection, ReorderSection,
};
use crate::widgets::special::{
    InfiniteListSection, MediaPlayerSection, PopupSection, SlideshowSection,
    VirtualKeyboardSection,
};

pub(super) fn sections(now: Instant) -> Vec<Box<dyn Section>> {
    vec![
        Box::new(PageHeading::new(
            "Interactions",
            "Gestures, data display and special features.",
        )),
        Box::new(GroupHeading::new(
            "Interactions",
            "Reordering, double activation, swipes and context menus.",
        )),
        Box::new(ReorderSection::default()),
        Box::new(DoubleActivationSection::default()),
        Box::new(GestureSection::default()),
        Box::new(ContextMenuSection::default()),
        Box::new(GroupHeading::new(
            "Data display",
            "Tables and charts.",
        )),
        Box::new(DataTableSection::default()),
        Box::new(ChartSection::default()),
        Box::new(DeviceShareSection),
        Box::new(GroupHeading::new(
            "Special features",
            "Infinite lists, media, slides, an on-screen keyboard and popups.",
        )),
        Box::new(InfiniteListSection::default()),
        Box::new(MediaPlayerSection::default()),
        Box::new(SlideshowSection::new(now)),
        Box::new(VirtualKeyboardSection::default()),
        Box::new(PopupSection::default()),
    ]
}
