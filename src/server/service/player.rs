use sea_orm::DatabaseConnection;

use crate::{
    model::player::{CreatePlayerDto, PlayerDto, PlayerListParams},
    server::{
        data::player::PlayerRepository,
        error::{not_found::NotFoundError, Error},
        service::validation,
    },
};

/// Maximum number of players returned by a name search
pub static PLAYER_SEARCH_LIMIT: u64 = 20;

/// Column widths of the `players` table
const NAME_MAX_LEN: usize = 100;
const POSITION_MAX_LEN: usize = 10;
const COLLEGE_MAX_LEN: usize = 100;

/// Service for listing, searching and registering players.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists players, filtering on upper-cased position and active status.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerDto>)` - The requested page of players
    /// - `Err(Error::ValidationError)` - `skip` or `limit` beyond the signed 64-bit range
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_players(&self, params: PlayerListParams) -> Result<Vec<PlayerDto>, Error> {
        let (skip, limit) = validation::page(params.skip, params.limit)?;
        let params = PlayerListParams {
            skip,
            limit,
            position: validation::optional_text(params.position).map(|p| p.to_uppercase()),
            ..params
        };

        let players = PlayerRepository::new(self.db).get_many(&params).await?;

        Ok(players.into_iter().map(PlayerDto::from).collect())
    }

    pub async fn get_player(&self, player_id: i32) -> Result<PlayerDto, Error> {
        PlayerRepository::new(self.db)
            .get_by_id(player_id)
            .await?
            .map(PlayerDto::from)
            .ok_or_else(|| NotFoundError::Player(player_id).into())
    }

    /// Case-insensitive substring search on player names, at most [`PLAYER_SEARCH_LIMIT`] rows.
    pub async fn search_players(&self, name: &str) -> Result<Vec<PlayerDto>, Error> {
        let players = PlayerRepository::new(self.db)
            .search_by_name(name.trim(), PLAYER_SEARCH_LIMIT)
            .await?;

        Ok(players.into_iter().map(PlayerDto::from).collect())
    }

    /// Validates and stores a new player with an upper-cased position.
    pub async fn create_player(&self, player: CreatePlayerDto) -> Result<PlayerDto, Error> {
        let player = CreatePlayerDto {
            name: validation::required_text("name", player.name, NAME_MAX_LEN)?,
            position: validation::required_text(
                "position",
                player.position.to_uppercase(),
                POSITION_MAX_LEN,
            )?,
            college: validation::optional_bounded_text(
                "college",
                player.college,
                COLLEGE_MAX_LEN,
            )?,
            ..player
        };

        let created = PlayerRepository::new(self.db).create(player).await?;

        Ok(PlayerDto::from(created))
    }
}
