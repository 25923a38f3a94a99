use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::team::CreateTeamDto;

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new team
    ///
    /// Values are stored as provided; normalization happens in the service layer.
    pub async fn create(&self, team: CreateTeamDto) -> Result<entity::team::Model, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(team.name),
            abbreviation: ActiveValue::Set(team.abbreviation),
            city: ActiveValue::Set(team.city),
            conference: ActiveValue::Set(team.conference),
            division: ActiveValue::Set(team.division),
            primary_color: ActiveValue::Set(team.primary_color),
            secondary_color: ActiveValue::Set(team.secondary_color),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Get a team by its exact stored abbreviation
    pub async fn get_by_abbreviation(
        &self,
        abbreviation: &str,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Abbreviation.eq(abbreviation))
            .one(self.db)
            .await
    }

    /// Get all teams ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }
}
