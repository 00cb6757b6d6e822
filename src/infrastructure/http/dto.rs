//! Row shapes of the hosted backend tables, decoded with serde and converted
//! into domain entities. Conversion is where record-shape violations surface
//! as `DataIntegrityError`; monetary columns alone are parsed leniently.

use crate::domain::errors::DataIntegrityError;
use crate::domain::workshop::{
    Craftsman, Money, OrderStatus, Payment, PendingProduct, Priority, RecordId, ServiceOrder,
    Timestamp,
};
use serde::Deserialize;
use std::str::FromStr;

fn parse_optional_timestamp(
    record_id: &RecordId,
    raw: Option<String>,
) -> Result<Option<Timestamp>, DataIntegrityError> {
    match raw {
        None => Ok(None),
        Some(value) => Timestamp::parse_rfc3339(&value)
            .map(Some)
            .ok_or(DataIntegrityError::InvalidTimestamp { record_id: record_id.clone(), value }),
    }
}

/// Row of the `servicos` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicoRow {
    pub id: String,
    pub titulo: String,
    pub descricao: Option<String>,
    pub marceneiro_id: String,
    /// String or numeric column depending on backend configuration.
    #[serde(default)]
    pub valor: serde_json::Value,
    pub status: String,
    pub prazo: Option<String>,
    pub foto_url: Option<String>,
    pub concluido_em: Option<String>,
    #[serde(default)]
    pub visualizado: bool,
    pub criado_em: Option<String>,
}

impl TryFrom<ServicoRow> for ServiceOrder {
    type Error = DataIntegrityError;

    fn try_from(row: ServicoRow) -> Result<Self, Self::Error> {
        let id = RecordId::from(row.id);
        let status = OrderStatus::from_str(&row.status).map_err(|_| {
            DataIntegrityError::UnknownStatus { record_id: id.clone(), value: row.status.clone() }
        })?;

        let completed_at = parse_optional_timestamp(&id, row.concluido_em)?;
        if status == OrderStatus::Concluido && completed_at.is_none() {
            return Err(DataIntegrityError::MissingCompletionDate { order_id: id });
        }

        let deadline = parse_optional_timestamp(&id, row.prazo)?;
        let created_at = parse_optional_timestamp(&id, row.criado_em)?;

        Ok(ServiceOrder {
            craftsman_id: RecordId::from(row.marceneiro_id),
            title: row.titulo,
            description: row.descricao,
            value: Money::parse_lenient(&row.valor),
            status,
            deadline,
            photo_url: row.foto_url,
            completed_at,
            viewed: row.visualizado,
            created_at,
            id,
        })
    }
}

/// Row of the `pagamentos` table.
#[derive(Debug, Clone, Deserialize)]
pub struct PagamentoRow {
    pub id: String,
    pub marceneiro_id: String,
    #[serde(default)]
    pub valor: serde_json::Value,
    pub data: String,
    pub observacao: Option<String>,
}

impl TryFrom<PagamentoRow> for Payment {
    type Error = DataIntegrityError;

    fn try_from(row: PagamentoRow) -> Result<Self, Self::Error> {
        let id = RecordId::from(row.id);
        let date = Timestamp::parse_rfc3339(&row.data).ok_or_else(|| {
            DataIntegrityError::InvalidTimestamp { record_id: id.clone(), value: row.data.clone() }
        })?;

        Ok(Payment {
            craftsman_id: RecordId::from(row.marceneiro_id),
            value: Money::parse_lenient(&row.valor),
            date,
            note: row.observacao,
            id,
        })
    }
}

/// Row of the `usuarios` table, craftsman projection.
#[derive(Debug, Clone, Deserialize)]
pub struct UsuarioRow {
    pub id: String,
    pub nome: String,
}

impl From<UsuarioRow> for Craftsman {
    fn from(row: UsuarioRow) -> Self {
        Craftsman { id: RecordId::from(row.id), name: row.nome }
    }
}

/// Row of the `produtos_pendentes` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProdutoPendenteRow {
    pub id: String,
    pub nome_produto: String,
    pub descricao: Option<String>,
    pub foto_url: Option<String>,
    pub prioridade: String,
    #[serde(default)]
    pub atribuido: bool,
    #[serde(default)]
    pub ordem: i32,
}

impl TryFrom<ProdutoPendenteRow> for PendingProduct {
    type Error = DataIntegrityError;

    fn try_from(row: ProdutoPendenteRow) -> Result<Self, Self::Error> {
        let id = RecordId::from(row.id);
        let priority = Priority::from_str(&row.prioridade).map_err(|_| {
            DataIntegrityError::UnknownPriority {
                record_id: id.clone(),
                value: row.prioridade.clone(),
            }
        })?;

        Ok(PendingProduct {
            name: row.nome_produto,
            description: row.descricao,
            photo_url: row.foto_url,
            priority,
            assigned: row.atribuido,
            position: row.ordem,
            id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn servico_row_decodes_into_order() {
        let row: ServicoRow = serde_json::from_value(json!({
            "id": "s1",
            "titulo": "Mesa de jantar",
            "descricao": null,
            "marceneiro_id": "m1",
            "valor": "500",
            "status": "concluido",
            "prazo": "2024-02-01",
            "foto_url": null,
            "concluido_em": "2024-01-10T12:00:00Z",
            "visualizado": true,
            "criado_em": "2024-01-02T08:00:00Z"
        }))
        .unwrap();

        let order = ServiceOrder::try_from(row).unwrap();
        assert_eq!(order.value.value(), 500.0);
        assert!(order.is_completed());
        assert!(order.completed_at.is_some());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let row: ServicoRow = serde_json::from_value(json!({
            "id": "s2",
            "titulo": "Banco",
            "marceneiro_id": "m1",
            "valor": 100,
            "status": "cancelado"
        }))
        .unwrap();

        assert_eq!(
            ServiceOrder::try_from(row),
            Err(DataIntegrityError::UnknownStatus {
                record_id: RecordId::from("s2"),
                value: "cancelado".to_string(),
            })
        );
    }

    #[test]
    fn concluded_without_date_is_rejected() {
        let row: ServicoRow = serde_json::from_value(json!({
            "id": "s3",
            "titulo": "Estante",
            "marceneiro_id": "m1",
            "valor": 250,
            "status": "concluido"
        }))
        .unwrap();

        assert_eq!(
            ServiceOrder::try_from(row),
            Err(DataIntegrityError::MissingCompletionDate { order_id: RecordId::from("s3") })
        );
    }

    #[test]
    fn payment_requires_a_valid_date() {
        let row: PagamentoRow = serde_json::from_value(json!({
            "id": "p1",
            "marceneiro_id": "m1",
            "valor": "200",
            "data": "semana passada",
            "observacao": null
        }))
        .unwrap();

        assert!(matches!(
            Payment::try_from(row),
            Err(DataIntegrityError::InvalidTimestamp { .. })
        ));
    }
}
