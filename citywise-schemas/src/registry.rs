//! Schema Registry for Version Management
//!
//! Centralized schema management with versioning, so a consumer can ask for
//! `source_record` and receive the newest registered version. The codec
//! resolves every schema it writes and reads this way through
//! [`GLOBAL_REGISTRY`].

use apache_avro::schema_compatibility::SchemaCompatibility;
use apache_avro::Schema;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::{schemas, SchemaError};

/// Schema metadata for registry entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaMetadata {
    /// Schema name (e.g., "source_record")
    pub name: String,

    /// Schema version (e.g., "v1", "v2")
    pub version: String,

    /// Full qualified name (e.g., "source_record_v1")
    pub qualified_name: String,

    /// Schema namespace
    pub namespace: String,

    /// Whether this schema is deprecated
    pub deprecated: bool,

    /// Replacement schema if deprecated
    pub replacement: Option<String>,
}

/// Thread-safe schema registry with version management
pub struct SchemaRegistry {
    /// Schemas indexed by qualified name
    schemas: RwLock<HashMap<String, (Schema, SchemaMetadata)>>,

    /// Latest version for each schema name
    latest: RwLock<HashMap<String, String>>,
}

/// Split `source_record_v2` into `("source_record", "v2")`
///
/// Names without a numeric `_vN` suffix are version `v1` of themselves.
pub fn split_qualified_name(name: &str) -> (String, String) {
    match name.rfind("_v") {
        Some(pos) if version_number(&name[pos + 1..]).is_some() => {
            (name[..pos].to_string(), name[pos + 1..].to_string())
        }
        _ => (name.to_string(), "v1".to_string()),
    }
}

/// Numeric part of a `vN` version string
fn version_number(version: &str) -> Option<u32> {
    version.strip_prefix('v')?.parse().ok()
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Register a schema with metadata
    fn register_with_metadata(
        &self,
        schema: Schema,
        metadata: SchemaMetadata,
    ) -> Result<(), SchemaError> {
        let qualified_name = metadata.qualified_name.clone();
        let base_name = metadata.name.clone();
        let version = metadata.version.clone();

        {
            let mut schemas = self.schemas.write().map_err(|_| SchemaError::LockPoisoned)?;
            if schemas.contains_key(&qualified_name) {
                return Err(SchemaError::AlreadyRegistered(qualified_name));
            }
            schemas.insert(qualified_name.clone(), (schema, metadata));
        }

        {
            let mut latest = self.latest.write().map_err(|_| SchemaError::LockPoisoned)?;
            let newer = match latest.get(&base_name) {
                Some(current) => version_number(&version) > version_number(current),
                None => true,
            };
            if newer {
                latest.insert(base_name, version);
            }
        }

        log::debug!("Registered schema {}", qualified_name);
        Ok(())
    }

    /// Register a schema, deriving name and version from `name`
    pub fn register(&self, name: &str, schema: Schema) -> Result<(), SchemaError> {
        let (base_name, version) = split_qualified_name(name);
        let namespace = schema
            .name()
            .and_then(|n| n.namespace.clone())
            .unwrap_or_else(|| schemas::NAMESPACE.to_string());

        let metadata = SchemaMetadata {
            name: base_name,
            version,
            qualified_name: name.to_string(),
            namespace,
            deprecated: false,
            replacement: None,
        };

        self.register_with_metadata(schema, metadata)
    }

    /// Get a schema by qualified name
    pub fn get(&self, name: &str) -> Result<Schema, SchemaError> {
        let schemas = self.schemas.read().map_err(|_| SchemaError::LockPoisoned)?;

        schemas.get(name)
            .map(|(schema, _)| schema.clone())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Get the latest version of a schema
    ///
    /// A deprecated latest version is still returned, with a warning naming
    /// its replacement.
    pub fn get_latest(&self, base_name: &str) -> Result<Schema, SchemaError> {
        let qualified_name = self.latest_name(base_name)?;
        let schemas = self.schemas.read().map_err(|_| SchemaError::LockPoisoned)?;
        let (schema, metadata) = schemas.get(&qualified_name)
            .ok_or_else(|| SchemaError::NotFound(qualified_name.clone()))?;

        if metadata.deprecated {
            log::warn!(
                "Using deprecated schema {} (replacement: {:?})",
                qualified_name, metadata.replacement
            );
        }
        Ok(schema.clone())
    }

    /// Qualified name of the latest version of a schema
    pub fn latest_name(&self, base_name: &str) -> Result<String, SchemaError> {
        let latest = self.latest.read().map_err(|_| SchemaError::LockPoisoned)?;
        let version = latest.get(base_name)
            .ok_or_else(|| SchemaError::NotFound(format!("No versions of {}", base_name)))?;
        Ok(format!("{}_{}", base_name, version))
    }

    /// Get schema metadata
    pub fn get_metadata(&self, name: &str) -> Result<SchemaMetadata, SchemaError> {
        let schemas = self.schemas.read().map_err(|_| SchemaError::LockPoisoned)?;

        schemas.get(name)
            .map(|(_, metadata)| metadata.clone())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Qualified names of every registered schema, sorted
    pub fn names(&self) -> Result<Vec<String>, SchemaError> {
        let schemas = self.schemas.read().map_err(|_| SchemaError::LockPoisoned)?;
        let mut names: Vec<String> = schemas.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Check if data written with one schema can be read with another
    ///
    /// Follows Avro schema resolution: names must match, reader fields
    /// missing from the writer need defaults, and promotions must be legal.
    pub fn is_compatible(
        &self,
        writer_schema: &str,
        reader_schema: &str,
    ) -> Result<bool, SchemaError> {
        let writer = self.get(writer_schema)?;
        let reader = self.get(reader_schema)?;

        Ok(SchemaCompatibility::can_read(&writer, &reader))
    }

    /// Mark a schema as deprecated
    pub fn deprecate(
        &self,
        name: &str,
        replacement: Option<String>,
    ) -> Result<(), SchemaError> {
        let mut schemas = self.schemas.write().map_err(|_| SchemaError::LockPoisoned)?;

        let (_schema, metadata) = schemas.get_mut(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        log::warn!("Schema {} deprecated (replacement: {:?})", name, replacement);
        metadata.deprecated = true;
        metadata.replacement = replacement;

        Ok(())
    }

    /// Load all default CityWISE schemas
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        for (name, schema) in schemas::all()? {
            self.register(name, schema)?;
        }
        Ok(())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global schema registry with default schemas loaded
    pub static ref GLOBAL_REGISTRY: SchemaRegistry = {
        let registry = SchemaRegistry::new();
        if let Err(error) = registry.load_defaults() {
            log::error!("Failed to load default schemas: {}", error);
        }
        registry
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_retrieve() {
        let registry = SchemaRegistry::new();
        let schema = schemas::source_record_v1().unwrap();

        registry.register("test_schema_v1", schema.clone()).unwrap();

        let retrieved = registry.get("test_schema_v1").unwrap();
        assert_eq!(schema.name(), retrieved.name());

        let metadata = registry.get_metadata("test_schema_v1").unwrap();
        assert_eq!(metadata.name, "test_schema");
        assert_eq!(metadata.version, "v1");
        assert_eq!(metadata.namespace, schemas::NAMESPACE);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let registry = SchemaRegistry::new();
        registry.load_defaults().unwrap();
        assert!(matches!(
            registry.load_defaults(),
            Err(SchemaError::AlreadyRegistered(name)) if name == "pollutant_reading_v1"
        ));
    }

    #[test]
    fn latest_version_compares_numerically() {
        let registry = SchemaRegistry::new();
        let schema = schemas::source_record_v1().unwrap();

        registry.register("source_v10", schema.clone()).unwrap();
        registry.register("source_v9", schema.clone()).unwrap();

        assert_eq!(registry.latest_name("source").unwrap(), "source_v10");
        assert!(registry.get_latest("source").is_ok());
        assert!(matches!(registry.get_latest("missing"), Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn deprecated_latest_still_resolves() {
        let registry = SchemaRegistry::new();
        registry.load_defaults().unwrap();
        registry.deprecate("pollutant_reading_v1", Some("pollutant_reading_v2".to_string())).unwrap();

        let schema = registry.get_latest("pollutant_reading").unwrap();
        assert_eq!(schema, registry.get("pollutant_reading_v1").unwrap());
    }

    #[test]
    fn split_names() {
        assert_eq!(split_qualified_name("source_record_v2"), ("source_record".into(), "v2".into()));
        assert_eq!(split_qualified_name("vehicle"), ("vehicle".into(), "v1".into()));
        assert_eq!(split_qualified_name("power_variant"), ("power_variant".into(), "v1".into()));
    }

    #[test]
    fn deprecation() {
        let registry = SchemaRegistry::new();
        let schema = schemas::source_record_v1().unwrap();

        registry.register("old_schema_v1", schema).unwrap();
        registry.deprecate("old_schema_v1", Some("new_schema_v1".to_string())).unwrap();

        let metadata = registry.get_metadata("old_schema_v1").unwrap();
        assert!(metadata.deprecated);
        assert_eq!(metadata.replacement, Some("new_schema_v1".to_string()));

        assert!(matches!(registry.deprecate("nope_v1", None), Err(SchemaError::NotFound(_))));
    }

    fn record(fields: serde_json::Value) -> Schema {
        Schema::parse(&serde_json::json!({
            "type": "record",
            "name": "SourceRecord",
            "namespace": schemas::NAMESPACE,
            "fields": fields
        }))
        .unwrap()
    }

    #[test]
    fn compatibility_follows_schema_resolution() {
        let registry = SchemaRegistry::new();
        registry.load_defaults().unwrap();
        registry.register("source_record_v2", schemas::source_record_v1().unwrap()).unwrap();

        assert!(registry.is_compatible("source_record_v1", "source_record_v2").unwrap());
        assert!(!registry.is_compatible("source_record_v1", "pollutant_reading_v1").unwrap());
    }

    #[test]
    fn same_name_with_incompatible_fields() {
        let registry = SchemaRegistry::new();
        registry.register("station_v1", record(serde_json::json!([{ "name": "a", "type": "string" }]))).unwrap();
        registry.register("station_v2", record(serde_json::json!([{ "name": "b", "type": "long" }]))).unwrap();
        registry.register("station_v3", record(serde_json::json!([
            { "name": "a", "type": "string" },
            { "name": "b", "type": "long", "default": 0 }
        ]))).unwrap();

        assert!(!registry.is_compatible("station_v1", "station_v2").unwrap());
        assert!(registry.is_compatible("station_v1", "station_v3").unwrap());
        assert!(matches!(registry.is_compatible("station_v1", "nope_v1"), Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn global_registry_has_defaults() {
        let names = GLOBAL_REGISTRY.names().unwrap();
        assert!(names.contains(&"pollutant_reading_v1".to_string()));
        assert!(names.contains(&"source_record_v1".to_string()));
    }
}
