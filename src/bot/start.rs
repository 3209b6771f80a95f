use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Client, Context, EventHandler, GatewayIntents, Message, Ready};
use serenity::async_trait;

use crate::bot::command::{self, Command};
use crate::bot::controller;
use crate::config::Config;
use crate::error::AppError;

/// Discord bot event handler
struct Handler {
    db: DatabaseConnection,
    owner_id: u64,
    command_prefix: String,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::custom("Pinning quests to the board")));
    }

    /// Called for every message the bot can see; prefixed messages are
    /// parsed and dispatched as commands
    async fn message(&self, ctx: Context, message: Message) {
        if message.author.bot {
            return;
        }

        let Some(parsed) = command::parse(&message.content, &self.command_prefix) else {
            return;
        };

        let reply = match parsed {
            // Recognized command with unusable arguments; the parser
            // already produced the reply.
            Err(usage) => Ok(Some(usage)),
            Ok(parsed_command) => self.dispatch(&ctx, &message, parsed_command).await,
        };

        match reply {
            Ok(Some(reply)) => {
                if let Err(e) = message.channel_id.say(&ctx.http, reply).await {
                    tracing::error!("Failed to send reply: {:?}", e);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::error!("Command failed: {:?}", e),
        }
    }
}

impl Handler {
    /// Executes one parsed command. `Ok(None)` means no reply is sent, used
    /// for admin commands invoked without permission.
    async fn dispatch(
        &self,
        ctx: &Context,
        message: &Message,
        parsed_command: Command,
    ) -> Result<Option<String>, AppError> {
        let discord_id = message.author.id.get();
        let server_id = message.guild_id.map(|id| id.get());

        match parsed_command {
            Command::Ping => Ok(self
                .is_admin(ctx, message)
                .await
                .then(|| "pong".to_string())),
            Command::Register => controller::check_and_register_user(&self.db, discord_id)
                .await
                .map(Some),
            Command::AcceptQuest { quest_name } => {
                controller::add_quest_to_user(&self.db, discord_id, &quest_name)
                    .await
                    .map(Some)
            }
            Command::CompleteQuest { quest_name } => {
                controller::complete_quest_for_user(&self.db, discord_id, &quest_name)
                    .await
                    .map(Some)
            }
            Command::QuestBoard => controller::get_quest_list_text(&self.db).await.map(Some),
            Command::Experience => controller::get_experience_total(&self.db, discord_id)
                .await
                .map(Some),
            Command::TavernMenu => controller::get_tavern_menu(&self.db, server_id)
                .await
                .map(Some),
            Command::TavernMenuAdd {
                day_of_week,
                item_name,
            } => {
                if !self.is_admin(ctx, message).await {
                    return Ok(None);
                }
                controller::upsert_tavern_menu(&self.db, server_id, &item_name, day_of_week)
                    .await
                    .map(Some)
            }
            Command::TavernMenuRemove {
                day_of_week,
                item_name,
            } => {
                if !self.is_admin(ctx, message).await {
                    return Ok(None);
                }
                controller::remove_from_tavern_menu(&self.db, server_id, &item_name, day_of_week)
                    .await
                    .map(Some)
            }
        }
    }

    /// Whether the author may run admin commands: the configured owner, or
    /// a guild member holding the Administrator permission.
    async fn is_admin(&self, ctx: &Context, message: &Message) -> bool {
        if message.author.id.get() == self.owner_id {
            return true;
        }
        let Some(guild_id) = message.guild_id else {
            return false;
        };
        match guild_id.member(&ctx.http, message.author.id).await {
            Ok(member) => member
                .permissions(&ctx.cache)
                .map(|permissions| permissions.administrator())
                .unwrap_or(false),
            Err(e) => {
                tracing::error!("Failed to fetch member for permission check: {:?}", e);
                false
            }
        }
    }
}

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It should be
/// called from within a tokio::spawn task since it will block until the bot
/// shuts down.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token and owner id
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    // MESSAGE_CONTENT is a privileged intent - must be enabled in the
    // Discord Developer Portal
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    // Create the event handler with database access
    let handler = Handler {
        db,
        owner_id: config.owner_id,
        command_prefix: config.command_prefix.clone(),
    };

    // Build the client
    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
