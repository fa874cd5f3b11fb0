pub mod price_controller;
