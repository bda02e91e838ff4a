//! MongoDB connector, health probe and identifier type

mod config;
mod connector;
mod health;
mod id;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{connect, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use id::{InvalidRecordId, RecordId};

pub use ::mongodb::{Client, Collection, Database};
