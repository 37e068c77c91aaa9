//! Wire types for the backend data service.
//!
//! The service speaks Spanish field names and plain JSON numbers for
//! money; conversion to and from domain values happens in the adapter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer reference embedded in an order header.
///
/// The service denormalises the customer's name onto headers it returns;
/// writes only need the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteRef {
    #[serde(rename = "idCliente")]
    pub id_cliente: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombres: Option<String>,
}

/// Header payload for `POST /api/pedidos` and `PUT /api/pedidos/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct PedidoRequest {
    pub cliente: ClienteRef,
    pub fecha: NaiveDate,
    #[serde(rename = "subTotal", with = "rust_decimal::serde::float")]
    pub sub_total: Decimal,
    #[serde(rename = "totalVenta", with = "rust_decimal::serde::float")]
    pub total_venta: Decimal,
}

/// The only field read from a header create response.
#[derive(Debug, Clone, Deserialize)]
pub struct PedidoCreated {
    #[serde(rename = "idPedido")]
    pub id_pedido: String,
}

/// Header as returned by `GET /api/pedidos` and `GET /api/pedidos/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PedidoResponse {
    #[serde(rename = "idPedido")]
    pub id_pedido: String,
    pub cliente: ClienteRef,
    pub fecha: NaiveDate,
    #[serde(rename = "subTotal", with = "rust_decimal::serde::float")]
    pub sub_total: Decimal,
    #[serde(rename = "totalVenta", with = "rust_decimal::serde::float")]
    pub total_venta: Decimal,
}

/// Line payload for `POST /api/detalle-pedidos`.
#[derive(Debug, Clone, Serialize)]
pub struct DetalleRequest {
    #[serde(rename = "idPedido")]
    pub id_pedido: String,
    #[serde(rename = "idProd")]
    pub id_prod: String,
    pub cantidad: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio: Decimal,
    #[serde(rename = "totalDeta", with = "rust_decimal::serde::float")]
    pub total_deta: Decimal,
}

/// The only field read from a detail create response.
#[derive(Debug, Clone, Deserialize)]
pub struct DetalleCreated {
    #[serde(rename = "idDetalle")]
    pub id_detalle: String,
}

/// Line as returned by `GET /api/detalles/{idPedido}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DetalleResponse {
    #[serde(rename = "idPedido")]
    pub id_pedido: String,
    #[serde(rename = "idProd")]
    pub id_prod: String,
    pub cantidad: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio: Decimal,
    #[serde(rename = "totalDeta", with = "rust_decimal::serde::float")]
    pub total_deta: Decimal,
}

/// Product as returned by `GET /api/productos`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductoResponse {
    #[serde(rename = "idProducto")]
    pub id_producto: String,
    pub descripcion: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub costo: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub precio: Decimal,
    pub cantidad: u32,
}

/// Customer as returned by `GET /api/clientes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClienteResponse {
    #[serde(rename = "idCliente")]
    pub id_cliente: String,
    pub apellidos: String,
    pub nombres: String,
    pub direccion: String,
    pub dni: String,
    pub telefono: String,
    pub movil: String,
}

/// Error body the service sends on non-2xx responses, when it sends one.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pedido_request_uses_service_field_names() {
        let request = PedidoRequest {
            cliente: ClienteRef {
                id_cliente: "C1".to_string(),
                apellidos: None,
                nombres: None,
            },
            fecha: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            sub_total: dec!(27.50),
            total_venta: dec!(27.50),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["cliente"]["idCliente"], "C1");
        assert_eq!(json["fecha"], "2024-05-17");
        assert_eq!(json["subTotal"], 27.5);
        assert_eq!(json["totalVenta"], 27.5);
        // Absent names are omitted, not null.
        assert!(json["cliente"].get("apellidos").is_none());
    }

    #[test]
    fn detalle_request_carries_the_order_id() {
        let request = DetalleRequest {
            id_pedido: "P-1".to_string(),
            id_prod: "PR-9".to_string(),
            cantidad: 3,
            precio: dec!(4.00),
            total_deta: dec!(12.00),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["idPedido"], "P-1");
        assert_eq!(json["idProd"], "PR-9");
        assert_eq!(json["cantidad"], 3);
        assert_eq!(json["totalDeta"], 12.0);
    }

    #[test]
    fn pedido_response_accepts_integer_money() {
        let response: PedidoResponse = serde_json::from_value(serde_json::json!({
            "idPedido": "P-1",
            "cliente": { "idCliente": "C1", "apellidos": "Quispe" },
            "fecha": "2024-05-17",
            "subTotal": 20,
            "totalVenta": 20.0,
        }))
        .unwrap();

        assert_eq!(response.sub_total, dec!(20));
        assert_eq!(response.cliente.apellidos.as_deref(), Some("Quispe"));
        assert!(response.cliente.nombres.is_none());
    }

    #[test]
    fn error_body_without_error_field_parses() {
        let parsed: ApiErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.error.is_none());

        let parsed: ApiErrorResponse =
            serde_json::from_str(r#"{"error":"Stock insuficiente"}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("Stock insuficiente"));
    }
}
