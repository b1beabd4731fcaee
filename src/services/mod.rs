// Service exports
pub mod geocoder;
pub mod store;

pub use geocoder::{GeocodeError, GeocodingClient};
pub use store::{NewDonor, PostgresClient, StoreError};
