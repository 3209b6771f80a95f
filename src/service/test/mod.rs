mod quest;
mod tavern;
