mod point_location;
mod puntal_relate;
mod rectangle_contains;
mod rectangle_intersects;

pub use point_location::{lineal_boundary, locate_in_polygon, locate_in_ring, locate_on_lines};
pub use puntal_relate::PuntalRelateEngine;
pub use rectangle_contains::rectangle_contains;
pub use rectangle_intersects::rectangle_intersects;
