//! Record definitions for the three upstream resources.
//!
//! Field names match the upstream JSON and are preserved when records are
//! re-served to callers.

use serde::{Deserialize, Deserializer, Serialize};

/// A country (`/negaras`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Negara {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_negara: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub kode_negara: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nama_negara: String,
}

/// A port (`/pelabuhans`). Identifiers are strings upstream.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Pelabuhan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_pelabuhan: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nama_pelabuhan: String,

    /// Owning country identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_negara: String,
}

/// A good traded at a port (`/barangs`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Barang {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_barang: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nama_barang: String,

    /// Owning port identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_pelabuhan: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub diskon: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub harga: f64,
}

/// Decode an explicit JSON `null` as the type's zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_become_zero_values() {
        let negara: Negara = serde_json::from_str(r#"{"id_negara": 7, "kode_negara": null}"#).unwrap();
        assert_eq!(negara.id_negara, 7);
        assert_eq!(negara.kode_negara, "");
        assert_eq!(negara.nama_negara, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let pelabuhan: Pelabuhan = serde_json::from_str(
            r#"{"id_pelabuhan": "P1", "nama_pelabuhan": "Tanjung Priok", "id_negara": "1", "extra": true}"#,
        )
        .unwrap();
        assert_eq!(pelabuhan.id_pelabuhan, "P1");
        assert_eq!(pelabuhan.id_negara, "1");
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let result = serde_json::from_str::<Barang>(r#"{"id_barang": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_barang_serializes_upstream_names() {
        let barang = Barang {
            id_barang: 1,
            nama_barang: "Kopi".into(),
            id_pelabuhan: 3,
            description: String::new(),
            diskon: 0.5,
            harga: 10.0,
        };
        let json = serde_json::to_value(&barang).unwrap();
        assert_eq!(json["nama_barang"], "Kopi");
        assert_eq!(json["id_pelabuhan"], 3);
        assert_eq!(json["harga"], 10.0);
    }
}
