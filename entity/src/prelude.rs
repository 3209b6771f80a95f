pub use super::day_of_week::DayOfWeek;
pub use super::experience_transaction::Entity as ExperienceTransaction;
pub use super::menu::Entity as Menu;
pub use super::menu_item::Entity as MenuItem;
pub use super::quest::Entity as Quest;
pub use super::user::Entity as User;
pub use super::user_quest::Entity as UserQuest;
