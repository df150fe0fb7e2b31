pub mod car_routes;
pub mod customer_routes;
pub mod employee_routes;
pub mod rental_routes;
