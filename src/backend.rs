//! Backend: the set of stores the dashboard reads and writes through

use crate::config::{DashboardConfig, SeedConfig};
use crate::core::RecordStore;
use crate::core::entity::Record;
use crate::core::error::Result;
use crate::entities::{Crop, Equipment, Farm, Task, Transaction};
use crate::storage::InMemoryRecordStore;
use crate::weather::{StaticWeatherProvider, WeatherProvider};
use std::path::Path;
use std::sync::Arc;

/// One store per record type plus a weather provider
///
/// Cloning is cheap; every clone talks to the same stores.
#[derive(Clone)]
pub struct Backend {
    pub farms: Arc<dyn RecordStore<Farm>>,
    pub crops: Arc<dyn RecordStore<Crop>>,
    pub tasks: Arc<dyn RecordStore<Task>>,
    pub transactions: Arc<dyn RecordStore<Transaction>>,
    pub equipment: Arc<dyn RecordStore<Equipment>>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl Backend {
    /// Start building a backend; unset stores default to empty in-memory ones
    pub fn builder() -> BackendBuilder {
        BackendBuilder::new()
    }

    /// Empty in-memory stores and the static weather provider
    pub fn in_memory() -> Self {
        BackendBuilder::new().build()
    }

    /// In-memory stores seeded from the configured fixtures
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let SeedConfig {
            farms,
            crops,
            tasks,
            transactions,
            equipment,
        } = &config.seed;

        Ok(BackendBuilder::new()
            .with_farms(seeded::<Farm>(farms.as_deref())?)
            .with_crops(seeded::<Crop>(crops.as_deref())?)
            .with_tasks(seeded::<Task>(tasks.as_deref())?)
            .with_transactions(seeded::<Transaction>(transactions.as_deref())?)
            .with_equipment(seeded::<Equipment>(equipment.as_deref())?)
            .with_weather(StaticWeatherProvider::new(config.weather.location.clone()))
            .build())
    }
}

fn seeded<T: Record>(path: Option<&Path>) -> Result<InMemoryRecordStore<T>> {
    match path {
        Some(path) => {
            tracing::info!(
                entity = %T::resource_name(),
                path = %path.display(),
                "seeding store from fixture"
            );
            InMemoryRecordStore::from_json_file(path)
        }
        None => Ok(InMemoryRecordStore::new()),
    }
}

/// Builder for [`Backend`]
///
/// # Example
///
/// ```ignore
/// let backend = Backend::builder()
///     .with_tasks(InMemoryRecordStore::with_records(tasks))
///     .with_weather(StaticWeatherProvider::new("Fresno, CA"))
///     .build();
/// ```
#[derive(Default)]
pub struct BackendBuilder {
    farms: Option<Arc<dyn RecordStore<Farm>>>,
    crops: Option<Arc<dyn RecordStore<Crop>>>,
    tasks: Option<Arc<dyn RecordStore<Task>>>,
    transactions: Option<Arc<dyn RecordStore<Transaction>>>,
    equipment: Option<Arc<dyn RecordStore<Equipment>>>,
    weather: Option<Arc<dyn WeatherProvider>>,
}

impl BackendBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_farms(mut self, store: impl RecordStore<Farm> + 'static) -> Self {
        self.farms = Some(Arc::new(store));
        self
    }

    pub fn with_crops(mut self, store: impl RecordStore<Crop> + 'static) -> Self {
        self.crops = Some(Arc::new(store));
        self
    }

    pub fn with_tasks(mut self, store: impl RecordStore<Task> + 'static) -> Self {
        self.tasks = Some(Arc::new(store));
        self
    }

    pub fn with_transactions(mut self, store: impl RecordStore<Transaction> + 'static) -> Self {
        self.transactions = Some(Arc::new(store));
        self
    }

    pub fn with_equipment(mut self, store: impl RecordStore<Equipment> + 'static) -> Self {
        self.equipment = Some(Arc::new(store));
        self
    }

    pub fn with_weather(mut self, provider: impl WeatherProvider + 'static) -> Self {
        self.weather = Some(Arc::new(provider));
        self
    }

    pub fn build(self) -> Backend {
        Backend {
            farms: self.farms.unwrap_or_else(in_memory),
            crops: self.crops.unwrap_or_else(in_memory),
            tasks: self.tasks.unwrap_or_else(in_memory),
            transactions: self.transactions.unwrap_or_else(in_memory),
            equipment: self.equipment.unwrap_or_else(in_memory),
            weather: self
                .weather
                .unwrap_or_else(|| Arc::new(StaticWeatherProvider::default())),
        }
    }
}

fn in_memory<T: Record>() -> Arc<dyn RecordStore<T>> {
    Arc::new(InMemoryRecordStore::<T>::new())
}
