//! Modelo de Price
//!
//! Un quote de precio asociado a un id de vehículo. Este servicio es el
//! dueño autoritativo de los quotes; el servicio de vehículos solo los
//! consulta en sus lecturas.

use rust_decimal::Decimal;
use serde::Serialize;

/// Quote de precio para un vehículo
#[derive(Debug, Clone)]
pub struct Price {
    pub vehicle_id: i64,
    pub currency: String,
    pub price: Decimal,
}

/// Response de quote para la API; el monto se serializa como string para
/// mantener estable el formato en el wire
#[derive(Debug, Serialize)]
pub struct PriceResponse {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: i64,
    pub currency: String,
    pub price: String,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            vehicle_id: price.vehicle_id,
            currency: price.currency,
            price: price.price.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_renders_amount_with_two_decimals() {
        let price = Price {
            vehicle_id: 1,
            currency: "USD".to_string(),
            price: Decimal::new(2_000_000, 2),
        };

        let response = PriceResponse::from(price);
        assert_eq!(response.price, "20000.00");
        assert_eq!(response.currency, "USD");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["vehicleId"], 1);
    }
}
