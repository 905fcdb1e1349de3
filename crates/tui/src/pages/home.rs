//! Home composition.

use std::time::Instant;

use super::Section;
use crate::widgets::home::{GettingStarted, Hero, PageCards, Stats};

pub(super) fn sections(_now: Instant) -> Vec<Box<dyn Section>> {
    vec![
        Box::new(Hero),
        Box::new(PageCards::default()),
        Box::new(Stats),
        Box::new(GettingStarted::default()),
    ]
}
