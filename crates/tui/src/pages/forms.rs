//! Forms & Feedback composition.

use std::time::Instant;

use super::Section;
use crate::widgets::common::{GroupHeading, PageHeading};
use crate::widgets::feedback::{
    ProgressSection, SkeletonSection, SnackbarSection, ToastDemoSection, TooltipSection,
};
use crate::widgets::form_controls::{
    DatePickerSection, FileUploadSection, RadioSection, SelectSection, SliderSection,
    SwitchSection,
};

pub(super) fn sections(now: Instant) -> Vec<Box<dyn Section>> {
    let today = chrono::Local::now().date_naive();
    vec![
        Box::new(PageHeading::new(
            "Forms & Feedback",
            "Input controls and the ways an interface answers back.",
        )),
        Box::new(GroupHeading::new(
            "Form controls",
            "Choices, toggles, pickers and ranges.",
        )),
        Box::new(RadioSection::default()),
        Box::new(SwitchSection::default()),
        Box::new(SelectSection::default()),
        Box::new(DatePickerSection::new(today)),
        Box::new(FileUploadSection::default()),
        Box::new(SliderSection::default()),
        Box::new(GroupHeading::new(
            "Feedback",
            "Progress, loading states and notifications.",
        )),
        Box::new(ProgressSection::new(now)),
        Box::new(SkeletonSection::default()),
        Box::new(SnackbarSection::default()),
        Box::new(ToastDemoSection::default()),
        Box::new(TooltipSection::default()),
    ]
}
