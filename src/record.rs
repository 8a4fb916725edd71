//! Output record assembly and YAML conversion
//!
//! One record per shapefile feature: the attribute pairs in their native
//! field order, the masked raster slice keyed by band, and the polygon
//! centroid. Records are built, emitted and dropped one at a time.

use gdal::vector::FieldValue;
use serde_yaml::{Mapping, Value};

use crate::slicer::MaskedSlice;

/// One emitted record: attributes plus computed slice and centroid
#[derive(Debug)]
pub struct FeatureSlice {
    /// Sequential feature index (native shapefile record order)
    pub index: u64,
    /// Attribute (name, value) pairs in field order
    pub attributes: Vec<(String, Value)>,
    /// 1-based band the slice was read from
    pub band: isize,
    /// Masked raster slice covering the polygon's bounding box
    pub slice: MaskedSlice,
    /// Polygon centroid as (lon, lat), `None` for degenerate geometry
    pub centroid: Option<(f64, f64)>,
}

/// Convert an OGR field value to YAML; unset fields become null
pub fn field_to_yaml(value: Option<FieldValue>) -> Value {
    let Some(value) = value else {
        return Value::Null;
    };
    match value {
        FieldValue::IntegerValue(v) => Value::from(v),
        FieldValue::Integer64Value(v) => Value::from(v),
        FieldValue::RealValue(v) => Value::from(v),
        FieldValue::StringValue(v) => Value::from(v),
        FieldValue::IntegerListValue(values) => {
            Value::Sequence(values.into_iter().map(Value::from).collect())
        }
        FieldValue::Integer64ListValue(values) => {
            Value::Sequence(values.into_iter().map(Value::from).collect())
        }
        FieldValue::RealListValue(values) => {
            Value::Sequence(values.into_iter().map(Value::from).collect())
        }
        FieldValue::StringListValue(values) => {
            Value::Sequence(values.into_iter().map(Value::from).collect())
        }
        FieldValue::DateValue(date) => Value::from(date.to_string()),
        FieldValue::DateTimeValue(datetime) => Value::from(datetime.to_rfc3339()),
    }
}

impl FeatureSlice {
    /// Key the raster slice is stored under, qualified by band number
    pub fn raster_key(&self) -> String {
        format!("raster-{}", self.band)
    }

    /// Serialize the whole record as one YAML mapping
    ///
    /// Attribute keys come first in field order, then the band-qualified
    /// raster entry, then the centroid.
    pub fn to_yaml(&self) -> Value {
        let mut mapping = Mapping::new();
        for (name, value) in &self.attributes {
            mapping.insert(Value::from(name.as_str()), value.clone());
        }
        mapping.insert(Value::from(self.raster_key()), self.slice.to_yaml());
        let centroid = match self.centroid {
            Some((lon, lat)) => Value::Sequence(vec![Value::from(lon), Value::from(lat)]),
            None => Value::Null,
        };
        mapping.insert(Value::from("centroid"), centroid);
        Value::Mapping(mapping)
    }
}
