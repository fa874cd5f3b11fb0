pub mod car_routes;
