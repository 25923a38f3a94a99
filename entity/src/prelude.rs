pub use super::contract::Entity as Contract;
pub use super::player::Entity as Player;
pub use super::salary_cap::Entity as SalaryCap;
pub use super::team::Entity as Team;
