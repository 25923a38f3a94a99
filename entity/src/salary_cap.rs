use sea_orm::entity::prelude::*;

/// League-wide cap figures, one row per year.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "salary_caps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub year: i32,
    #[sea_orm(column_type = "Double")]
    pub salary_cap: f64,
    #[sea_orm(column_type = "Double")]
    pub salary_floor: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub luxury_tax_threshold: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub minimum_team_salary: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
