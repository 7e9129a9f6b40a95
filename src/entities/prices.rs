use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Price catalog entry, classified family → level2 → level3 → level4.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "prices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub servicekey: String,

    pub family: String,

    pub level2: Option<String>,

    pub level3: Option<String>,

    pub level4: Option<String>,

    pub listprice: f64,

    pub professionalprice: f64,

    pub professionalpercentage: f64,

    pub salonpercentage: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
