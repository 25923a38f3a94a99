use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait,
};

use crate::model::player::{CreatePlayerDto, PlayerListParams};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new player
    pub async fn create(&self, player: CreatePlayerDto) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            name: ActiveValue::Set(player.name),
            position: ActiveValue::Set(player.position),
            jersey_number: ActiveValue::Set(player.jersey_number),
            height_inches: ActiveValue::Set(player.height_inches),
            weight_lbs: ActiveValue::Set(player.weight_lbs),
            birth_date: ActiveValue::Set(player.birth_date),
            college: ActiveValue::Set(player.college),
            draft_year: ActiveValue::Set(player.draft_year),
            draft_round: ActiveValue::Set(player.draft_round),
            draft_pick: ActiveValue::Set(player.draft_pick),
            is_active: ActiveValue::Set(player.is_active),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Get a page of players ordered by ID
    ///
    /// The position filter is an exact match against the stored value.
    pub async fn get_many(
        &self,
        params: &PlayerListParams,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .apply_if(params.active_only.then_some(true), |query, is_active| {
                query.filter(entity::player::Column::IsActive.eq(is_active))
            })
            .apply_if(params.position.as_deref(), |query, position| {
                query.filter(entity::player::Column::Position.eq(position))
            })
            .order_by_asc(entity::player::Column::Id)
            .offset(params.skip)
            .limit(params.limit)
            .all(self.db)
            .await
    }

    /// Case-insensitive substring search on player name
    pub async fn search_by_name(
        &self,
        name: &str,
        limit: u64,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let pattern = format!("%{}%", name.to_lowercase());

        entity::prelude::Player::find()
            .filter(Expr::expr(Func::lower(Expr::col(entity::player::Column::Name))).like(pattern))
            .order_by_asc(entity::player::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
