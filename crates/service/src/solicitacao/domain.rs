use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use models::solicitacao::{SolicitacaoFields, REQUIRED_FIELDS};

use crate::errors::ServiceError;

/// Request body for create and update.
///
/// Every attribute is optional at the wire level so that missing required
/// fields surface as a single validation error instead of a parse failure.
/// The Portuguese names used by older clients are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolicitacaoInput {
    #[serde(default, alias = "Solicitante")]
    pub requester: Option<String>,
    #[serde(default, alias = "Filial")]
    pub branch: Option<String>,
    #[serde(default, alias = "TipoServ")]
    pub service_type: Option<String>,
    #[serde(default, alias = "Servico")]
    pub service: Option<String>,
    #[serde(default, alias = "Equipamento")]
    pub equipment: Option<String>,
    #[serde(default, alias = "Urgencia")]
    pub urgency: Option<String>,
    #[serde(default, alias = "Descricao")]
    pub description: Option<String>,
    #[serde(default, alias = "DataSolicitacao", deserialize_with = "flexible_datetime::deserialize")]
    pub requested_at: Option<DateTime<FixedOffset>>,
    #[serde(default, alias = "DataEmissao", deserialize_with = "flexible_datetime::deserialize")]
    pub issued_at: Option<DateTime<FixedOffset>>,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "DataFechamento", deserialize_with = "flexible_datetime::deserialize")]
    pub closed_at: Option<DateTime<FixedOffset>>,
}

impl SolicitacaoInput {
    /// JSON names of required fields that are absent or blank, in declaration order.
    pub fn missing_required(&self) -> Vec<String> {
        let values = [&self.requester, &self.branch, &self.service_type, &self.service];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .filter(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Validate and convert into a full-replacement column set.
    pub fn into_fields(self) -> Result<SolicitacaoFields, ServiceError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }
        Ok(SolicitacaoFields {
            requester: self.requester.unwrap_or_default(),
            branch: self.branch.unwrap_or_default(),
            service_type: self.service_type.unwrap_or_default(),
            service: self.service.unwrap_or_default(),
            equipment: self.equipment,
            urgency: self.urgency,
            description: self.description,
            requested_at: self.requested_at,
            issued_at: self.issued_at,
            status: self.status,
            closed_at: self.closed_at,
        })
    }
}

/// Lenient timestamp input: RFC 3339, naive date-time (UTC) or a bare date
/// (midnight UTC). `null` and `""` are absent. Parsed values are always
/// normalized to a `+00:00` offset, the form `timestamptz` reads back as.
pub mod flexible_datetime {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date/time: {s}"))),
        }
    }

    pub fn parse(s: &str) -> Option<DateTime<FixedOffset>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc).fixed_offset());
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(naive.and_utc().fixed_offset());
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc().fixed_offset())
    }
}
