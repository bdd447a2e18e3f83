use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait, EntityTrait, QueryOrder};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

/// A service request ("solicitação") as stored and as returned over HTTP.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "solicitacao")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub requester: String,
    #[sea_orm(column_type = "Text")]
    pub branch: String,
    #[sea_orm(column_type = "Text")]
    pub service_type: String,
    #[sea_orm(column_type = "Text")]
    pub service: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub equipment: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub urgency: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub requested_at: Option<DateTimeWithTimeZone>,
    pub issued_at: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Text", nullable)]
    pub status: Option<String>,
    pub closed_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// JSON names of the columns that must be non-blank on every write.
pub const REQUIRED_FIELDS: [&str; 4] = ["requester", "branch", "serviceType", "service"];

/// Every user-writable column of a solicitação.
///
/// Writes are full replacements: `None` clears the optional column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolicitacaoFields {
    pub requester: String,
    pub branch: String,
    pub service_type: String,
    pub service: String,
    pub equipment: Option<String>,
    pub urgency: Option<String>,
    pub description: Option<String>,
    pub requested_at: Option<DateTimeWithTimeZone>,
    pub issued_at: Option<DateTimeWithTimeZone>,
    pub status: Option<String>,
    pub closed_at: Option<DateTimeWithTimeZone>,
}

impl SolicitacaoFields {
    /// JSON names of required fields that are blank.
    pub fn blank_required(&self) -> Vec<&'static str> {
        let values = [&self.requester, &self.branch, &self.service_type, &self.service];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        let blank = self.blank_required();
        if !blank.is_empty() {
            return Err(errors::ModelError::Validation(format!(
                "missing required fields: {}",
                blank.join(", ")
            )));
        }
        Ok(())
    }

    /// Build the full row for these fields.
    pub fn into_model(self, id: Uuid, created_at: DateTimeWithTimeZone, updated_at: DateTimeWithTimeZone) -> Model {
        Model {
            id,
            requester: self.requester,
            branch: self.branch,
            service_type: self.service_type,
            service: self.service,
            equipment: self.equipment,
            urgency: self.urgency,
            description: self.description,
            requested_at: self.requested_at,
            issued_at: self.issued_at,
            status: self.status,
            closed_at: self.closed_at,
            created_at,
            updated_at,
        }
    }

    fn apply(self, am: &mut ActiveModel) {
        am.requester = Set(self.requester);
        am.branch = Set(self.branch);
        am.service_type = Set(self.service_type);
        am.service = Set(self.service);
        am.equipment = Set(self.equipment);
        am.urgency = Set(self.urgency);
        am.description = Set(self.description);
        am.requested_at = Set(self.requested_at);
        am.issued_at = Set(self.issued_at);
        am.status = Set(self.status);
        am.closed_at = Set(self.closed_at);
    }
}

/// All rows, oldest first.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn create(db: &DatabaseConnection, fields: SolicitacaoFields) -> Result<Model, errors::ModelError> {
    fields.validate()?;

    let now = Utc::now().into();
    let mut am = ActiveModel {
        id: Set(Uuid::new_v4()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    fields.apply(&mut am);
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite every writable column of row `id`; `Ok(None)` when the row does not exist.
pub async fn replace(db: &DatabaseConnection, id: Uuid, fields: SolicitacaoFields) -> Result<Option<Model>, errors::ModelError> {
    fields.validate()?;

    let Some(existing) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    let mut am: ActiveModel = existing.into();
    fields.apply(&mut am);
    am.updated_at = Set(Utc::now().into());
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        // 行在查询与更新之间被删除
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(errors::ModelError::Db(e.to_string())),
    }
}

pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
