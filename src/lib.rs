pub mod boundary;
pub mod config;
pub mod error;
pub mod grid;
pub mod lookup;
pub mod province;
pub mod terrain;

pub use boundary::BoundaryMask;
pub use config::{CountryConfig, CountyBox, GeoBounds, SubRegion};
pub use error::GenError;
pub use province::{Province, SettlementTier};
pub use terrain::{PlaceholderTerrain, TerrainAssigner, TerrainType, WeightedTerrain};
