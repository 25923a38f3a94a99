use sea_orm::entity::prelude::*;

/// A player's contract with a team for a single league year.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub contract_year: i32,
    #[sea_orm(column_type = "Double")]
    pub total_value: f64,
    #[sea_orm(column_type = "Double")]
    pub guaranteed_money: f64,
    #[sea_orm(column_type = "Double")]
    pub signing_bonus: f64,
    /// Amount counted against the team's cap for `contract_year`
    #[sea_orm(column_type = "Double")]
    pub cap_hit: f64,
    #[sea_orm(column_type = "Double")]
    pub base_salary: f64,
    #[sea_orm(column_type = "Double")]
    pub roster_bonus: f64,
    #[sea_orm(column_type = "Double")]
    pub workout_bonus: f64,
    #[sea_orm(column_type = "Double")]
    pub incentives: f64,
    #[sea_orm(column_type = "Double")]
    pub dead_money: f64,
    pub contract_length: Option<i32>,
    pub contract_start_year: Option<i32>,
    pub contract_end_year: Option<i32>,
    pub is_franchise_tag: bool,
    pub is_transition_tag: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
