//! `fl-data` — dataset loading for one round of the game.
//!
//! A round is described by three JSON documents:
//!
//! | Document | Top-level key      | Record fields                                          |
//! |----------|--------------------|--------------------------------------------------------|
//! | map      | `zones`            | `name`, `coordinates`, `priority`, `speed_limit_kmh`   |
//! |          | `delivery_points`  | `name`, `coordinates`, `type`, `description`           |
//! | fleet    | `vehicles`         | capacities, range, speed, cost/emission rates, `home`  |
//! | orders   | `orders`           | `id`, `origin`, `destination`, `content`, `deadline`   |
//!
//! Coordinates are `[lat, lon]` pairs; deadlines use `YYYY-MM-DDTHH:MM:SS`.
//! The keys of the legacy datasets (`ZONES`, `nom`, `fleet`, `poids_kg`, …)
//! are accepted as aliases.  Legacy zone rings (`coordonnees`) are
//! `[lon, lat]`, with the priority under `style.zIndex` and the speed limit
//! under `parameters.vitesse_maximale`.
//!
//! Loading is all-or-nothing: any I/O, syntax or consistency problem returns
//! a [`DataError`] and no [`Round`] is built.

pub mod error;
pub mod loader;
pub mod records;
pub mod round;


pub use error::{DataError, DataResult};
pub use loader::{load_config, parse_fleet, parse_map, parse_orders};
pub use records::{FleetDocument, MapDocument, OrdersDocument};
pub use round::Round;
