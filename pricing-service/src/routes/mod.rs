pub mod price_routes;
