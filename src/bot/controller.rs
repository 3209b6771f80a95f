//! Maps parsed bot commands onto service calls and reply strings.
//!
//! Each function implements one command: it resolves the caller's user row,
//! invokes the services, and converts the domain errors relevant to that
//! command into the reply text. Errors it does not recognize propagate to
//! the event handler, where they are logged.

use sea_orm::DatabaseConnection;

use crate::{
    bot::format::{capitalize, format_quest_board, format_weekly_menu},
    error::{quest::QuestError, tavern::TavernError, AppError},
    service::{
        experience::ExperienceService, quest::QuestService, tavern::TavernService,
        user::UserService,
    },
};
use entity::day_of_week::DayOfWeek;

pub const ALREADY_REGISTERED_MESSAGE: &str = "You are already registered";
pub const NEW_USER_MESSAGE: &str = "Welcome adventurer! You have been registered";
pub const REGISTER_FIRST_MESSAGE: &str = "You must register yourself before using this command";
pub const NO_MENU_THIS_WEEK_MESSAGE: &str = "There is no menu for this week yet";
pub const SERVER_ONLY_BAD_REQUEST_MESSAGE: &str = "This command can only be used in a server";

/// Registers the calling user unless they already exist.
pub async fn check_and_register_user(
    db: &DatabaseConnection,
    discord_id: u64,
) -> Result<String, AppError> {
    if discord_id == 0 {
        return Err(AppError::NoIdProvided);
    }
    let user_service = UserService::new(db);
    if user_service
        .get_user_by_discord_id(discord_id as i64)
        .await?
        .is_some()
    {
        return Ok(ALREADY_REGISTERED_MESSAGE.to_string());
    }
    user_service.create_user(discord_id as i64).await?;
    Ok(NEW_USER_MESSAGE.to_string())
}

/// Accepts the named quest for the calling user.
pub async fn add_quest_to_user(
    db: &DatabaseConnection,
    discord_id: u64,
    quest_name: &str,
) -> Result<String, AppError> {
    let Some(user) = UserService::new(db)
        .get_user_by_discord_id(discord_id as i64)
        .await?
    else {
        return Ok(REGISTER_FIRST_MESSAGE.to_string());
    };

    match QuestService::new(db)
        .accept_quest_if_available(&user, quest_name)
        .await
    {
        Ok(reply) => Ok(reply),
        Err(AppError::QuestErr(
            err @ (QuestError::DoesNotExist { .. } | QuestError::AlreadyAccepted { .. }),
        )) => Ok(err.to_string()),
        Err(err) => Err(err),
    }
}

/// Completes the named quest for the calling user and awards experience.
pub async fn complete_quest_for_user(
    db: &DatabaseConnection,
    discord_id: u64,
    quest_name: &str,
) -> Result<String, AppError> {
    let Some(user) = UserService::new(db)
        .get_user_by_discord_id(discord_id as i64)
        .await?
    else {
        return Ok(REGISTER_FIRST_MESSAGE.to_string());
    };

    let quest = match QuestService::new(db)
        .complete_quest_if_available(&user, quest_name)
        .await
    {
        Ok(quest) => quest,
        Err(AppError::QuestErr(err)) => return Ok(err.to_string()),
        Err(err) => return Err(err),
    };

    let transaction = ExperienceService::new(db)
        .earn_xp_for_quest(&user, &quest)
        .await?;
    Ok(format!(
        "You have successfully completed {} and earned {}",
        quest.name, transaction.experience
    ))
}

/// Renders the quest board.
pub async fn get_quest_list_text(db: &DatabaseConnection) -> Result<String, AppError> {
    let quests = QuestService::new(db).get_all_quests().await?;
    Ok(format_quest_board(&quests))
}

/// Reports the calling user's total earned experience.
pub async fn get_experience_total(
    db: &DatabaseConnection,
    discord_id: u64,
) -> Result<String, AppError> {
    let Some(user) = UserService::new(db)
        .get_user_by_discord_id(discord_id as i64)
        .await?
    else {
        return Ok(REGISTER_FIRST_MESSAGE.to_string());
    };

    let total = ExperienceService::new(db)
        .get_total_xp_for_user(&user)
        .await?;
    Ok(format!("You have earned {total} XP"))
}

/// Shows this week's menu for the server the message came from.
pub async fn get_tavern_menu(
    db: &DatabaseConnection,
    server_id: Option<u64>,
) -> Result<String, AppError> {
    let Some(server_id) = server_id else {
        return Ok(SERVER_ONLY_BAD_REQUEST_MESSAGE.to_string());
    };

    match TavernService::new(db)
        .get_this_weeks_menu(server_id as i64)
        .await?
    {
        Some(menu) => Ok(format_weekly_menu(&menu)),
        None => Ok(NO_MENU_THIS_WEEK_MESSAGE.to_string()),
    }
}

/// Adds an item to this week's menu, creating the menu if absent.
pub async fn upsert_tavern_menu(
    db: &DatabaseConnection,
    server_id: Option<u64>,
    item_name: &str,
    day_of_week: DayOfWeek,
) -> Result<String, AppError> {
    let Some(server_id) = server_id else {
        return Ok(SERVER_ONLY_BAD_REQUEST_MESSAGE.to_string());
    };

    let tavern_service = TavernService::new(db);
    let menu = match tavern_service.get_this_weeks_menu(server_id as i64).await? {
        Some(menu) => menu,
        None => tavern_service.create_menu_for_week(server_id as i64).await?,
    };

    tavern_service
        .insert_menu_item(&menu.menu, item_name, day_of_week)
        .await?;
    Ok("Item added".to_string())
}

/// Removes an item from this week's menu.
pub async fn remove_from_tavern_menu(
    db: &DatabaseConnection,
    server_id: Option<u64>,
    item_name: &str,
    day_of_week: Option<DayOfWeek>,
) -> Result<String, AppError> {
    let Some(server_id) = server_id else {
        return Ok(SERVER_ONLY_BAD_REQUEST_MESSAGE.to_string());
    };

    let tavern_service = TavernService::new(db);
    let Some(menu) = tavern_service.get_this_weeks_menu(server_id as i64).await? else {
        return Ok(NO_MENU_THIS_WEEK_MESSAGE.to_string());
    };

    match tavern_service
        .delete_menu_item(&menu, item_name, day_of_week)
        .await
    {
        Ok(()) => Ok("Item successfully removed".to_string()),
        Err(AppError::TavernErr(TavernError::NoMenuItemFound { .. })) => {
            let day_text = day_of_week
                .map(|day| format!(" on {}", day.name().to_lowercase()))
                .unwrap_or_default();
            Ok(format!(
                "{} could not be found{} in this week's menu.",
                capitalize(item_name),
                day_text
            ))
        }
        Err(err) => Err(err),
    }
}
