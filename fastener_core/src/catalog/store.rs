//! # Reference Data Store
//!
//! Read-only access to the four catalog datasets. Each dataset is parsed on
//! first access and then held for the lifetime of the store; concurrent first
//! access parses at most once.
//!
//! Binaries build one store at startup, call [`ReferenceStore::load_all`] so a
//! missing or corrupt file fails before any request is served, then share it
//! by reference (or `Arc`).
//!
//! ## Example
//!
//! ```rust
//! use fastener_core::catalog::{FastenerType, Material, ReferenceStore};
//!
//! let store = ReferenceStore::embedded();
//! store.load_all().unwrap();
//!
//! let steel = store.get::<Material>("mild_steel").unwrap();
//! assert!((steel.density - 7.85).abs() < 1e-9);
//!
//! let types = store.list::<FastenerType>().unwrap();
//! assert_eq!(types[0].id, "hex_bolt");
//! ```

use once_cell::sync::OnceCell;
use rust_embed::Embed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::dimensions::{family_key, Dimension, DimensionFamily, DimensionLookup, StandardRefs};
use super::records::{FastenerType, GstCategory, GstInfo, HsnCode, Material};
use crate::errors::{CalcError, CalcResult};

pub const FASTENER_TYPES_FILE: &str = "fastener_types.json";
pub const MATERIALS_FILE: &str = "materials.json";
pub const DIMENSIONS_FILE: &str = "dimensions.json";
pub const HSN_CODES_FILE: &str = "hsn_codes.json";

#[derive(Embed)]
#[folder = "data/"]
struct BundledData;

// ============================================================================
// Data Source
// ============================================================================

/// Where the datasets are read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Copies compiled into the binary
    #[default]
    Embedded,
    /// A directory holding the four JSON files
    Directory(PathBuf),
}

impl DataSource {
    fn read(&self, file: &str) -> CalcResult<Cow<'static, [u8]>> {
        match self {
            DataSource::Embedded => BundledData::get(file)
                .map(|embedded| embedded.data)
                .ok_or_else(|| CalcError::data_file(file, "not bundled with this build")),
            DataSource::Directory(dir) => {
                let path = dir.join(file);
                std::fs::read(&path)
                    .map(Cow::Owned)
                    .map_err(|e| CalcError::data_file(path.display().to_string(), e.to_string()))
            }
        }
    }

    fn parse<T: DeserializeOwned>(&self, file: &str) -> CalcResult<T> {
        let bytes = self.read(file)?;
        serde_json::from_slice(&bytes).map_err(|e| CalcError::data_file(file, e.to_string()))
    }
}

// ============================================================================
// File Layouts
// ============================================================================

#[derive(Debug, Deserialize)]
struct FastenerTypesFile {
    #[serde(default)]
    fastener_types: Vec<FastenerType>,
}

#[derive(Debug, Deserialize)]
struct MaterialsFile {
    #[serde(default)]
    materials: Vec<Material>,
}

#[derive(Debug, Deserialize)]
struct DimensionsFile {
    #[serde(default)]
    dimensions: BTreeMap<String, Vec<Dimension>>,
    #[serde(default)]
    standards: BTreeMap<String, StandardRefs>,
}

#[derive(Debug, Deserialize)]
struct HsnFile {
    #[serde(default)]
    hsn_codes: Vec<HsnCode>,
    #[serde(default)]
    gst_info: GstInfo,
}

// ============================================================================
// Records
// ============================================================================

/// A catalog record addressable by a string key
pub trait Record: Sized + 'static {
    /// Human-readable kind used in not-found messages
    const KIND: &'static str;

    fn key(&self) -> &str;

    fn table(store: &ReferenceStore) -> CalcResult<&[Self]>;
}

impl Record for FastenerType {
    const KIND: &'static str = "Fastener type";

    fn key(&self) -> &str {
        &self.id
    }

    fn table(store: &ReferenceStore) -> CalcResult<&[Self]> {
        store
            .fastener_types
            .get_or_try_init(|| {
                let file: FastenerTypesFile = store.source.parse(FASTENER_TYPES_FILE)?;
                tracing::debug!(file = FASTENER_TYPES_FILE, records = file.fastener_types.len(), "loaded dataset");
                Ok(file.fastener_types)
            })
            .map(Vec::as_slice)
    }
}

impl Record for Material {
    const KIND: &'static str = "Material";

    fn key(&self) -> &str {
        &self.id
    }

    fn table(store: &ReferenceStore) -> CalcResult<&[Self]> {
        store
            .materials
            .get_or_try_init(|| {
                let file: MaterialsFile = store.source.parse(MATERIALS_FILE)?;
                tracing::debug!(file = MATERIALS_FILE, records = file.materials.len(), "loaded dataset");
                Ok(file.materials)
            })
            .map(Vec::as_slice)
    }
}

impl Record for HsnCode {
    const KIND: &'static str = "HSN code";

    fn key(&self) -> &str {
        &self.code
    }

    fn table(store: &ReferenceStore) -> CalcResult<&[Self]> {
        store.hsn_file().map(|file| file.hsn_codes.as_slice())
    }
}

// ============================================================================
// Store
// ============================================================================

/// Dimensions of one fastener type with its applicable standards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionSheet<'a> {
    pub fastener_type: &'a str,
    pub standards: Option<&'a StandardRefs>,
    pub dimensions: &'a [Dimension],
}

/// Lazily loaded, immutable catalog
#[derive(Debug, Default)]
pub struct ReferenceStore {
    source: DataSource,
    fastener_types: OnceCell<Vec<FastenerType>>,
    materials: OnceCell<Vec<Material>>,
    dimensions: OnceCell<DimensionsFile>,
    hsn: OnceCell<HsnFile>,
}

impl ReferenceStore {
    /// Create a store; nothing is read until first access
    pub fn new(source: DataSource) -> Self {
        ReferenceStore {
            source,
            ..Default::default()
        }
    }

    /// Store over the datasets bundled with the crate
    pub fn embedded() -> Self {
        Self::new(DataSource::Embedded)
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Parse every dataset now, failing on the first bad file
    pub fn load_all(&self) -> CalcResult<()> {
        FastenerType::table(self)?;
        Material::table(self)?;
        self.dimensions_file()?;
        self.hsn_file()?;
        Ok(())
    }

    fn dimensions_file(&self) -> CalcResult<&DimensionsFile> {
        self.dimensions.get_or_try_init(|| {
            let file: DimensionsFile = self.source.parse(DIMENSIONS_FILE)?;
            tracing::debug!(file = DIMENSIONS_FILE, families = file.dimensions.len(), "loaded dataset");
            Ok(file)
        })
    }

    fn hsn_file(&self) -> CalcResult<&HsnFile> {
        self.hsn.get_or_try_init(|| {
            let file: HsnFile = self.source.parse(HSN_CODES_FILE)?;
            tracing::debug!(file = HSN_CODES_FILE, records = file.hsn_codes.len(), "loaded dataset");
            Ok(file)
        })
    }

    // ------------------------------------------------------------------------
    // Generic record access
    // ------------------------------------------------------------------------

    /// All records of a kind, in file order
    pub fn list<R: Record>(&self) -> CalcResult<&[R]> {
        R::table(self)
    }

    /// Record by key, or `NotFound`
    pub fn get<R: Record>(&self, key: &str) -> CalcResult<&R> {
        self.find::<R>(key)?
            .ok_or_else(|| CalcError::not_found(R::KIND, key))
    }

    /// Record by key, `None` when absent
    pub fn find<R: Record>(&self, key: &str) -> CalcResult<Option<&R>> {
        Ok(R::table(self)?.iter().find(|record| record.key() == key))
    }

    // ------------------------------------------------------------------------
    // Dimensions
    // ------------------------------------------------------------------------

    /// Rows stored under a table key, empty if the key is absent
    pub fn dimension_rows(&self, table: &str) -> CalcResult<&[Dimension]> {
        Ok(self
            .dimensions_file()?
            .dimensions
            .get(table)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Row for an exact diameter under a table key
    pub fn find_dimension(&self, table: &str, diameter: &str) -> CalcResult<Option<&Dimension>> {
        Ok(self
            .dimension_rows(table)?
            .iter()
            .find(|row| row.is_diameter(diameter)))
    }

    /// Row for an exact diameter, or `NotFound`; no interpolation
    pub fn get_dimension(&self, table: &str, diameter: &str) -> CalcResult<&Dimension> {
        self.find_dimension(table, diameter)?
            .ok_or_else(|| CalcError::not_found("Dimension", format!("{} {}", table, diameter.trim())))
    }

    /// Dimension table for a fastener type, resolved through its family
    pub fn dimensions(&self, fastener_type_id: &str) -> CalcResult<&[Dimension]> {
        let rows = self.dimension_rows(family_key(fastener_type_id))?;
        if rows.is_empty() {
            return Err(CalcError::not_found("Dimensions", fastener_type_id));
        }
        Ok(rows)
    }

    /// Diameter designations available for a fastener type
    pub fn diameters(&self, fastener_type_id: &str) -> CalcResult<Vec<&str>> {
        Ok(self
            .dimensions(fastener_type_id)?
            .iter()
            .map(|row| row.diameter.as_str())
            .collect())
    }

    /// Dimensions plus applicable standards for a fastener type
    pub fn dimension_sheet<'a>(&'a self, fastener_type_id: &'a str) -> CalcResult<DimensionSheet<'a>> {
        let dimensions = self.dimensions(fastener_type_id)?;
        let standards = self.find_standards(family_key(fastener_type_id))?;
        Ok(DimensionSheet {
            fastener_type: fastener_type_id,
            standards,
            dimensions,
        })
    }

    // ------------------------------------------------------------------------
    // Standards
    // ------------------------------------------------------------------------

    /// Family key to standard codes, ordered by family key
    pub fn standards_map(&self) -> CalcResult<&BTreeMap<String, StandardRefs>> {
        Ok(&self.dimensions_file()?.standards)
    }

    fn find_standards(&self, table: &str) -> CalcResult<Option<&StandardRefs>> {
        Ok(self.standards_map()?.get(table))
    }

    /// Standards for a family key, or `NotFound`
    pub fn standards_for(&self, table: &str) -> CalcResult<&StandardRefs> {
        self.find_standards(table)?
            .ok_or_else(|| CalcError::not_found("Standards", table))
    }

    // ------------------------------------------------------------------------
    // HSN / GST
    // ------------------------------------------------------------------------

    /// HSN records whose code or description contains `query`, case-insensitive
    pub fn search_hsn(&self, query: &str) -> CalcResult<Vec<&HsnCode>> {
        let needle = query.to_lowercase();
        Ok(self
            .list::<HsnCode>()?
            .iter()
            .filter(|hsn| hsn.matches(&needle))
            .collect())
    }

    /// HSN record by exact code
    pub fn hsn_code(&self, code: &str) -> CalcResult<&HsnCode> {
        self.get::<HsnCode>(code.trim())
    }

    pub fn gst_info(&self) -> CalcResult<&GstInfo> {
        Ok(&self.hsn_file()?.gst_info)
    }

    /// GST category by key; the error lists the available keys
    pub fn gst_category(&self, key: &str) -> CalcResult<&GstCategory> {
        let info = self.gst_info()?;
        info.categories.get(key).ok_or_else(|| {
            let available: Vec<&str> = info.categories.keys().map(String::as_str).collect();
            CalcError::not_found(
                "GST category",
                format!("{} (available: {})", key, available.join(", ")),
            )
        })
    }
}

impl DimensionLookup for ReferenceStore {
    fn dimension_row(&self, family: DimensionFamily, diameter: &str) -> CalcResult<Option<&Dimension>> {
        self.find_dimension(family.key(), diameter)
    }
}
