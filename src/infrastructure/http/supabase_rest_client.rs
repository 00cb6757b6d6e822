use crate::domain::errors::{DataIntegrityError, FetchFailure, RemoteFetchError};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::workshop::repositories::{
    NewPayment, NewPendingProduct, NewServiceOrder, OrderFilter, OrderUpdate, PendingProductUpdate,
    RecordEditor, RecordStore,
};
use crate::domain::workshop::{
    Craftsman, OrderStatus, Payment, PendingProduct, RecordId, ServiceOrder, Timestamp,
};
use crate::infrastructure::http::dto::{PagamentoRow, ProdutoPendenteRow, ServicoRow, UsuarioRow};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

/// Connection settings for the hosted backend, injected by the host page.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub base_url: String,
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self { base_url: base_url.to_string(), anon_key: anon_key.to_string() }
    }
}

/// PostgREST adapter for the Record Store contract.
///
/// Thin request/response plumbing only: filters become `column=eq.value`
/// query parameters, rows decode through the DTO layer, and every failure is
/// reported once, without retries.
pub struct SupabaseRestClient {
    config: SupabaseConfig,
}

impl SupabaseRestClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url.trim_end_matches('/'), table)
    }

    pub fn orders_url(&self, filter: &OrderFilter) -> String {
        let mut url = format!("{}?select=*&order=criado_em.desc", self.rest_url("servicos"));
        if let Some(craftsman_id) = &filter.craftsman_id {
            url.push_str(&format!("&marceneiro_id=eq.{}", craftsman_id));
        }
        if let Some(status) = filter.status {
            url.push_str(&format!("&status=eq.{}", status.to_query_str()));
        }
        url
    }

    pub fn completed_orders_url(&self, craftsman_id: &RecordId) -> String {
        format!(
            "{}?select=*&marceneiro_id=eq.{}&status=eq.concluido&order=concluido_em.desc",
            self.rest_url("servicos"),
            craftsman_id
        )
    }

    pub fn payments_url(&self, craftsman_id: Option<&RecordId>) -> String {
        let mut url = format!("{}?select=*&order=data.desc", self.rest_url("pagamentos"));
        if let Some(craftsman_id) = craftsman_id {
            url.push_str(&format!("&marceneiro_id=eq.{}", craftsman_id));
        }
        url
    }

    pub fn craftsmen_url(&self) -> String {
        format!("{}?select=id,nome&tipo=eq.marceneiro&order=nome.asc", self.rest_url("usuarios"))
    }

    pub fn pending_products_url(&self) -> String {
        format!(
            "{}?select=*&atribuido=eq.false&order=ordem.asc,criado_em.desc",
            self.rest_url("produtos_pendentes")
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.config.anon_key))
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        collection: &str,
        url: &str,
    ) -> Result<Vec<T>, RemoteFetchError> {
        get_logger().debug(
            LogComponent::Infrastructure("Supabase"),
            &format!("GET {}", url),
        );

        let response = self
            .authorized(Request::get(url))
            .send()
            .await
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Network(format!("{e:?}"))))?;

        if !response.ok() {
            return Err(RemoteFetchError::new(collection, FetchFailure::Http(response.status())));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Decode(format!("{e:?}"))))
    }

    /// POST with `Prefer: return=representation`, decoding the created row.
    async fn insert_row<T: DeserializeOwned>(
        &self,
        collection: &str,
        body: &Value,
    ) -> Result<T, RemoteFetchError> {
        let request = self
            .authorized(Request::post(&self.rest_url(collection)))
            .header("Prefer", "return=representation")
            .json(body)
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Decode(format!("{e:?}"))))?;

        let response = request
            .send()
            .await
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Network(format!("{e:?}"))))?;

        if !response.ok() {
            return Err(RemoteFetchError::new(collection, FetchFailure::Http(response.status())));
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Decode(format!("{e:?}"))))?;
        rows.into_iter().next().ok_or_else(|| {
            RemoteFetchError::new(collection, FetchFailure::Decode("empty insert response".into()))
        })
    }

    async fn patch_row<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &RecordId,
        body: &Value,
    ) -> Result<T, RemoteFetchError> {
        let url = format!("{}?id=eq.{}", self.rest_url(collection), id);
        let request = self
            .authorized(Request::patch(&url))
            .header("Prefer", "return=representation")
            .json(body)
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Decode(format!("{e:?}"))))?;

        let response = request
            .send()
            .await
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Network(format!("{e:?}"))))?;

        if !response.ok() {
            return Err(RemoteFetchError::new(collection, FetchFailure::Http(response.status())));
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Decode(format!("{e:?}"))))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RemoteFetchError::new(collection, FetchFailure::NotFound))
    }

    async fn delete_row(&self, collection: &str, id: &RecordId) -> Result<(), RemoteFetchError> {
        let url = format!("{}?id=eq.{}", self.rest_url(collection), id);
        let response = self
            .authorized(Request::delete(&url))
            .send()
            .await
            .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Network(format!("{e:?}"))))?;

        if !response.ok() {
            return Err(RemoteFetchError::new(collection, FetchFailure::Http(response.status())));
        }
        Ok(())
    }

    fn decode_rows<Row, T>(collection: &str, rows: Vec<Row>) -> Result<Vec<T>, RemoteFetchError>
    where
        T: TryFrom<Row, Error = DataIntegrityError>,
    {
        rows.into_iter()
            .map(|row| {
                T::try_from(row)
                    .map_err(|e| RemoteFetchError::new(collection, FetchFailure::Integrity(e)))
            })
            .collect()
    }
}

impl RecordStore for SupabaseRestClient {
    async fn fetch_craftsmen(&self) -> Result<Vec<Craftsman>, RemoteFetchError> {
        let rows: Vec<UsuarioRow> = self.get_rows("usuarios", &self.craftsmen_url()).await?;
        Ok(rows.into_iter().map(Craftsman::from).collect())
    }

    async fn fetch_orders(
        &self,
        filter: &OrderFilter,
    ) -> Result<Vec<ServiceOrder>, RemoteFetchError> {
        let rows: Vec<ServicoRow> = self.get_rows("servicos", &self.orders_url(filter)).await?;
        Self::decode_rows("servicos", rows)
    }

    async fn fetch_completed_orders(
        &self,
        craftsman_id: &RecordId,
    ) -> Result<Vec<ServiceOrder>, RemoteFetchError> {
        let rows: Vec<ServicoRow> =
            self.get_rows("servicos", &self.completed_orders_url(craftsman_id)).await?;
        Self::decode_rows("servicos", rows)
    }

    async fn fetch_payments(
        &self,
        craftsman_id: Option<&RecordId>,
    ) -> Result<Vec<Payment>, RemoteFetchError> {
        let rows: Vec<PagamentoRow> =
            self.get_rows("pagamentos", &self.payments_url(craftsman_id)).await?;
        Self::decode_rows("pagamentos", rows)
    }

    async fn fetch_pending_products(&self) -> Result<Vec<PendingProduct>, RemoteFetchError> {
        let rows: Vec<ProdutoPendenteRow> =
            self.get_rows("produtos_pendentes", &self.pending_products_url()).await?;
        Self::decode_rows("produtos_pendentes", rows)
    }
}

impl RecordEditor for SupabaseRestClient {
    async fn create_order(&self, order: NewServiceOrder) -> Result<ServiceOrder, RemoteFetchError> {
        let body = json!({
            "titulo": order.title,
            "descricao": order.description,
            "marceneiro_id": order.craftsman_id.value(),
            "valor": order.value.value(),
            "prazo": order.deadline.map(|d| d.to_rfc3339()),
            "foto_url": order.photo_url,
            "status": OrderStatus::Pendente.to_query_str(),
            "visualizado": false,
        });
        let row: ServicoRow = self.insert_row("servicos", &body).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("servicos", FetchFailure::Integrity(e)))
    }

    async fn update_order(
        &self,
        id: &RecordId,
        update: OrderUpdate,
    ) -> Result<ServiceOrder, RemoteFetchError> {
        let mut body = Map::new();
        if let Some(title) = update.title {
            body.insert("titulo".into(), Value::from(title));
        }
        if let Some(description) = update.description {
            body.insert("descricao".into(), Value::from(description));
        }
        if let Some(craftsman_id) = update.craftsman_id {
            body.insert("marceneiro_id".into(), Value::from(craftsman_id.value()));
        }
        if let Some(value) = update.value {
            body.insert("valor".into(), Value::from(value.value()));
        }
        if let Some(deadline) = update.deadline {
            body.insert("prazo".into(), Value::from(deadline.to_rfc3339()));
        }
        if let Some(photo_url) = update.photo_url {
            body.insert("foto_url".into(), Value::from(photo_url));
        }

        let row: ServicoRow = self.patch_row("servicos", id, &Value::Object(body)).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("servicos", FetchFailure::Integrity(e)))
    }

    async fn update_order_status(
        &self,
        id: &RecordId,
        status: OrderStatus,
        completed_at: Option<Timestamp>,
    ) -> Result<ServiceOrder, RemoteFetchError> {
        let mut body = Map::new();
        body.insert("status".into(), Value::from(status.to_query_str()));
        if let Some(completed_at) = completed_at {
            body.insert("concluido_em".into(), Value::from(completed_at.to_rfc3339()));
        }

        let row: ServicoRow = self.patch_row("servicos", id, &Value::Object(body)).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("servicos", FetchFailure::Integrity(e)))
    }

    async fn mark_order_viewed(&self, id: &RecordId) -> Result<ServiceOrder, RemoteFetchError> {
        let row: ServicoRow =
            self.patch_row("servicos", id, &json!({ "visualizado": true })).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("servicos", FetchFailure::Integrity(e)))
    }

    async fn delete_order(&self, id: &RecordId) -> Result<(), RemoteFetchError> {
        self.delete_row("servicos", id).await
    }

    async fn create_payment(&self, payment: NewPayment) -> Result<Payment, RemoteFetchError> {
        let body = json!({
            "marceneiro_id": payment.craftsman_id.value(),
            "valor": payment.value.value(),
            "data": payment.date.to_rfc3339(),
            "observacao": payment.note,
        });
        let row: PagamentoRow = self.insert_row("pagamentos", &body).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("pagamentos", FetchFailure::Integrity(e)))
    }

    async fn create_pending_product(
        &self,
        product: NewPendingProduct,
    ) -> Result<PendingProduct, RemoteFetchError> {
        let body = json!({
            "nome_produto": product.name,
            "descricao": product.description,
            "foto_url": product.photo_url,
            "prioridade": product.priority.as_ref(),
            "ordem": product.position,
            "atribuido": false,
        });
        let row: ProdutoPendenteRow = self.insert_row("produtos_pendentes", &body).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("produtos_pendentes", FetchFailure::Integrity(e)))
    }

    async fn update_pending_product(
        &self,
        id: &RecordId,
        update: PendingProductUpdate,
    ) -> Result<PendingProduct, RemoteFetchError> {
        let mut body = Map::new();
        if let Some(name) = update.name {
            body.insert("nome_produto".into(), Value::from(name));
        }
        if let Some(description) = update.description {
            body.insert("descricao".into(), Value::from(description));
        }
        if let Some(photo_url) = update.photo_url {
            body.insert("foto_url".into(), Value::from(photo_url));
        }
        if let Some(priority) = update.priority {
            body.insert("prioridade".into(), Value::from(priority.as_ref()));
        }
        if let Some(position) = update.position {
            body.insert("ordem".into(), Value::from(position));
        }

        let row: ProdutoPendenteRow =
            self.patch_row("produtos_pendentes", id, &Value::Object(body)).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("produtos_pendentes", FetchFailure::Integrity(e)))
    }

    async fn delete_pending_product(&self, id: &RecordId) -> Result<(), RemoteFetchError> {
        self.delete_row("produtos_pendentes", id).await
    }

    async fn flag_product_assigned(
        &self,
        id: &RecordId,
    ) -> Result<PendingProduct, RemoteFetchError> {
        let row: ProdutoPendenteRow =
            self.patch_row("produtos_pendentes", id, &json!({ "atribuido": true })).await?;
        row.try_into()
            .map_err(|e| RemoteFetchError::new("produtos_pendentes", FetchFailure::Integrity(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseRestClient {
        SupabaseRestClient::new(SupabaseConfig::new("https://proj.supabase.co/", "anon-key"))
    }

    #[test]
    fn orders_url_applies_filters() {
        let client = client();
        assert_eq!(
            client.orders_url(&OrderFilter::default()),
            "https://proj.supabase.co/rest/v1/servicos?select=*&order=criado_em.desc"
        );
        assert_eq!(
            client.orders_url(&OrderFilter {
                craftsman_id: Some(RecordId::from("m1")),
                status: Some(OrderStatus::Pendente),
            }),
            "https://proj.supabase.co/rest/v1/servicos?select=*&order=criado_em.desc&marceneiro_id=eq.m1&status=eq.pendente"
        );
    }

    #[test]
    fn completed_orders_url_sorts_by_completion() {
        assert_eq!(
            client().completed_orders_url(&RecordId::from("m7")),
            "https://proj.supabase.co/rest/v1/servicos?select=*&marceneiro_id=eq.m7&status=eq.concluido&order=concluido_em.desc"
        );
    }

    #[test]
    fn payments_url_scopes_optionally() {
        let client = client();
        assert_eq!(
            client.payments_url(None),
            "https://proj.supabase.co/rest/v1/pagamentos?select=*&order=data.desc"
        );
        assert_eq!(
            client.payments_url(Some(&RecordId::from("m1"))),
            "https://proj.supabase.co/rest/v1/pagamentos?select=*&order=data.desc&marceneiro_id=eq.m1"
        );
    }

    #[test]
    fn craftsmen_and_backlog_urls() {
        let client = client();
        assert_eq!(
            client.craftsmen_url(),
            "https://proj.supabase.co/rest/v1/usuarios?select=id,nome&tipo=eq.marceneiro&order=nome.asc"
        );
        assert_eq!(
            client.pending_products_url(),
            "https://proj.supabase.co/rest/v1/produtos_pendentes?select=*&atribuido=eq.false&order=ordem.asc,criado_em.desc"
        );
    }
}
