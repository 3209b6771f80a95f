use sea_orm::entity::prelude::*;

/// Day of the week as stored on menu items.
///
/// Stored as an integer column with Sunday = 1 through Saturday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DayOfWeek {
    #[sea_orm(num_value = 1)]
    Sunday,
    #[sea_orm(num_value = 2)]
    Monday,
    #[sea_orm(num_value = 3)]
    Tuesday,
    #[sea_orm(num_value = 4)]
    Wednesday,
    #[sea_orm(num_value = 5)]
    Thursday,
    #[sea_orm(num_value = 6)]
    Friday,
    #[sea_orm(num_value = 7)]
    Saturday,
}

impl DayOfWeek {
    /// All days in storage order, Sunday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    /// Display name of the day.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }

    /// Parses a day name, case-insensitively. Accepts full names and
    /// three-letter abbreviations.
    pub fn from_name(name: &str) -> Option<DayOfWeek> {
        match name.to_lowercase().as_str() {
            "sunday" | "sun" => Some(DayOfWeek::Sunday),
            "monday" | "mon" => Some(DayOfWeek::Monday),
            "tuesday" | "tue" => Some(DayOfWeek::Tuesday),
            "wednesday" | "wed" => Some(DayOfWeek::Wednesday),
            "thursday" | "thu" => Some(DayOfWeek::Thursday),
            "friday" | "fri" => Some(DayOfWeek::Friday),
            "saturday" | "sat" => Some(DayOfWeek::Saturday),
            _ => None,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
