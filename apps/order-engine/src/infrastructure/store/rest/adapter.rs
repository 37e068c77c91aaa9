//! REST implementation of `OrderStorePort`.

use async_trait::async_trait;

use super::api_types::{
    ClienteRef, ClienteResponse, DetalleCreated, DetalleRequest, DetalleResponse, PedidoCreated,
    PedidoRequest, PedidoResponse, ProductoResponse,
};
use super::config::StoreConfig;
use super::http_client::StoreHttpClient;
use crate::application::ports::{
    Client, ClientRef, NewOrderDetail, NewOrderHeader, OrderStorePort, PersistedDetail,
    PersistedOrder, Product, StoreError,
};
use crate::domain::shared::{ClientId, DetailId, Money, OrderId, ProductId, Quantity};

/// Order store adapter over the backend's REST API.
///
/// One port method maps to one HTTP request; the adapter holds no state
/// and never sequences calls itself. Ordering across resources is the
/// use cases' concern.
#[derive(Debug, Clone)]
pub struct RestOrderStore {
    http: StoreHttpClient,
}

impl RestOrderStore {
    /// Create an adapter from config.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            http: StoreHttpClient::new(config)?,
        })
    }
}

fn header_request(header: &NewOrderHeader) -> PedidoRequest {
    PedidoRequest {
        cliente: ClienteRef {
            id_cliente: header.client_id.as_str().to_string(),
            apellidos: None,
            nombres: None,
        },
        fecha: header.date,
        sub_total: header.subtotal.amount(),
        total_venta: header.total.amount(),
    }
}

fn detail_request(detail: &NewOrderDetail) -> DetalleRequest {
    DetalleRequest {
        id_pedido: detail.order_id.as_str().to_string(),
        id_prod: detail.product_id.as_str().to_string(),
        cantidad: detail.quantity.get(),
        precio: detail.unit_price.amount(),
        total_deta: detail.line_total.amount(),
    }
}

fn order_from_response(row: PedidoResponse) -> PersistedOrder {
    PersistedOrder {
        order_id: OrderId::from(row.id_pedido),
        client: ClientRef {
            client_id: ClientId::from(row.cliente.id_cliente),
            apellidos: row.cliente.apellidos,
            nombres: row.cliente.nombres,
        },
        date: row.fecha,
        subtotal: Money::new(row.sub_total),
        total: Money::new(row.total_venta),
    }
}

fn detail_from_response(row: DetalleResponse) -> Result<PersistedDetail, StoreError> {
    let quantity =
        Quantity::try_from(row.cantidad).map_err(|e| StoreError::InvalidResponse {
            message: format!("detail of order {}: {e}", row.id_pedido),
        })?;
    Ok(PersistedDetail {
        order_id: OrderId::from(row.id_pedido),
        product_id: ProductId::from(row.id_prod),
        quantity,
        unit_price: Money::new(row.precio),
        line_total: Money::new(row.total_deta),
    })
}

fn product_from_response(row: ProductoResponse) -> Product {
    Product {
        product_id: ProductId::from(row.id_producto),
        description: row.descripcion,
        cost: Money::new(row.costo),
        price: Money::new(row.precio),
        quantity: row.cantidad,
    }
}

fn client_from_response(row: ClienteResponse) -> Client {
    Client {
        client_id: ClientId::from(row.id_cliente),
        apellidos: row.apellidos,
        nombres: row.nombres,
        direccion: row.direccion,
        dni: row.dni,
        telefono: row.telefono,
        movil: row.movil,
    }
}

#[async_trait]
impl OrderStorePort for RestOrderStore {
    async fn list_orders(&self) -> Result<Vec<PersistedOrder>, StoreError> {
        let rows: Vec<PedidoResponse> = self.http.get("/api/pedidos").await?;
        Ok(rows.into_iter().map(order_from_response).collect())
    }

    async fn get_order(&self, order_id: &OrderId) -> Result<PersistedOrder, StoreError> {
        let row: PedidoResponse = self
            .http
            .get(&format!("/api/pedidos/{}", order_id.as_str()))
            .await?;
        Ok(order_from_response(row))
    }

    async fn create_order(&self, header: &NewOrderHeader) -> Result<OrderId, StoreError> {
        let created: PedidoCreated = self
            .http
            .post("/api/pedidos", &header_request(header))
            .await?;
        Ok(OrderId::from(created.id_pedido))
    }

    async fn update_order(
        &self,
        order_id: &OrderId,
        header: &NewOrderHeader,
    ) -> Result<(), StoreError> {
        self.http
            .put(
                &format!("/api/pedidos/{}", order_id.as_str()),
                &header_request(header),
            )
            .await
    }

    async fn delete_order(&self, order_id: &OrderId) -> Result<(), StoreError> {
        self.http
            .delete(&format!("/api/pedidos/{}", order_id.as_str()))
            .await
    }

    async fn list_details(&self, order_id: &OrderId) -> Result<Vec<PersistedDetail>, StoreError> {
        let rows: Vec<DetalleResponse> = self
            .http
            .get(&format!("/api/detalles/{}", order_id.as_str()))
            .await?;
        rows.into_iter().map(detail_from_response).collect()
    }

    async fn create_detail(&self, detail: &NewOrderDetail) -> Result<DetailId, StoreError> {
        let created: DetalleCreated = self
            .http
            .post("/api/detalle-pedidos", &detail_request(detail))
            .await?;
        Ok(DetailId::from(created.id_detalle))
    }

    async fn delete_details(&self, order_id: &OrderId) -> Result<(), StoreError> {
        self.http
            .delete(&format!("/api/detalles/{}", order_id.as_str()))
            .await
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductoResponse> = self.http.get("/api/productos").await?;
        Ok(rows.into_iter().map(product_from_response).collect())
    }

    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        let rows: Vec<ClienteResponse> = self.http.get("/api/clientes").await?;
        Ok(rows.into_iter().map(client_from_response).collect())
    }
}
