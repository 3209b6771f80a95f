//! Weekly menu view model.

use entity::day_of_week::DayOfWeek;
use std::collections::BTreeMap;

/// A menu together with its items, loaded for display.
///
/// The tavern service assembles this after fetching the menu row and its
/// items, so callers never observe a half-loaded menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyMenu {
    pub menu: entity::menu::Model,
    pub items: Vec<entity::menu_item::Model>,
}

impl WeeklyMenu {
    pub fn new(menu: entity::menu::Model, items: Vec<entity::menu_item::Model>) -> Self {
        Self { menu, items }
    }

    /// Groups items by day of the week.
    ///
    /// The map always contains an entry for all seven days, with an empty
    /// list for days that have no items. Items keep their insertion order
    /// within a day. Used purely for display formatting.
    pub fn grouped_items(&self) -> BTreeMap<DayOfWeek, Vec<&entity::menu_item::Model>> {
        let mut grouped: BTreeMap<DayOfWeek, Vec<&entity::menu_item::Model>> = DayOfWeek::ALL
            .iter()
            .map(|day| (*day, Vec::new()))
            .collect();
        for item in &self.items {
            grouped.entry(item.day_of_week).or_default().push(item);
        }
        grouped
    }
}
