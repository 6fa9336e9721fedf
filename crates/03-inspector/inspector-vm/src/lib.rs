//! Watch-panel view-model shared by the CLI text renderer and NDJSON logging.

use gsc_catalog::{read_field, Catalog, Encoding, FieldValue, MemoryRead};
use serde::Serialize;

/// Fields shown when the caller does not pick its own watch list.
pub const DEFAULT_WATCH_KEYS: &[&str] = &[
    "player_x",
    "player_y",
    "map_bank",
    "map_number",
    "money",
    "party_count",
    "party[0].level",
    "party[0].hp",
    "party[0].max_hp",
    "battle_type",
    "wild_species",
    "wild_level",
];

/// One captured pass over a list of watched fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PanelVM {
    /// Rows in watch-list order.
    pub rows: Vec<PanelRow>,
}

/// State of a single watched field.
///
/// Unknown keys carry neither address nor value. Failed reads keep the
/// address and carry the error text instead of a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PanelRow {
    /// Catalog key as requested.
    pub key: String,
    /// Start address, when the key resolved.
    pub addr: Option<u16>,
    /// Field encoding, when the key resolved.
    pub enc: Option<Encoding>,
    /// Decoded value on a successful read.
    pub value: Option<FieldValue>,
    /// Error text for an unknown key or failed read.
    pub error: Option<String>,
}

impl PanelRow {
    fn missing(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            addr: None,
            enc: None,
            value: None,
            error: Some("missing field".to_owned()),
        }
    }

    /// True when the key is not in the catalog.
    pub fn is_missing(&self) -> bool {
        self.addr.is_none()
    }
}

impl PanelVM {
    /// Reads every key in `keys`. Per-row failures are recorded on the row and
    /// never abort the capture.
    pub fn capture<R, I>(catalog: &Catalog, reader: &R, keys: I) -> Self
    where
        R: MemoryRead + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let rows = keys
            .into_iter()
            .map(|key| {
                let key = key.as_ref();
                let Some(field) = catalog.get(key) else {
                    return PanelRow::missing(key);
                };
                let (value, error) = match read_field(reader, field) {
                    Ok(value) => (Some(value), None),
                    Err(err) => (None, Some(err.to_string())),
                };
                PanelRow {
                    key: key.to_owned(),
                    addr: Some(field.addr),
                    enc: Some(field.enc),
                    value,
                    error,
                }
            })
            .collect();
        Self { rows }
    }

    /// Captures [`DEFAULT_WATCH_KEYS`].
    pub fn capture_default<R: MemoryRead + ?Sized>(catalog: &Catalog, reader: &R) -> Self {
        Self::capture(catalog, reader, DEFAULT_WATCH_KEYS.iter().copied())
    }

    /// Serializes the panel to a single NDJSON line.
    pub fn to_ndjson_line(&self) -> serde_json::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_catalog::{CatalogOptions, MemoryError, MemoryImage, MemoryResult};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::build(CatalogOptions::default()).unwrap()
    }

    #[test]
    fn default_keys_all_resolve() {
        let catalog = catalog();
        for key in DEFAULT_WATCH_KEYS {
            assert!(catalog.get(key).is_some(), "{key} not in catalog");
        }
    }

    #[test]
    fn capture_reads_values_in_order() {
        let catalog = catalog();
        let mut mem = MemoryImage::full_address_space();
        catalog.write(&mut mem, "player_y", &FieldValue::Int(9)).unwrap();
        catalog.write(&mut mem, "money", &FieldValue::Int(120)).unwrap();

        let panel = PanelVM::capture(&catalog, &mem, ["money", "player_y"]);
        assert_eq!(panel.rows.len(), 2);
        assert_eq!(panel.rows[0].key, "money");
        assert_eq!(panel.rows[0].addr, Some(0xD573));
        assert_eq!(panel.rows[0].value, Some(FieldValue::Int(120)));
        assert_eq!(panel.rows[1].value, Some(FieldValue::Int(9)));
    }

    #[test]
    fn unknown_keys_become_missing_rows() {
        let panel = PanelVM::capture(&catalog(), &MemoryImage::full_address_space(), ["nope"]);
        let row = &panel.rows[0];
        assert!(row.is_missing());
        assert_eq!(row.value, None);
        assert_eq!(row.error.as_deref(), Some("missing field"));
    }

    #[test]
    fn read_failures_stay_on_their_row() {
        let reader = |addr: u16, size: usize| -> MemoryResult<Vec<u8>> {
            if addr == 0xD573 {
                Err(MemoryError::backend("bus fault"))
            } else {
                Ok(vec![1; size])
            }
        };
        let panel = PanelVM::capture(&catalog(), &reader, ["money", "player_x"]);
        assert_eq!(panel.rows[0].value, None);
        assert!(panel.rows[0].error.as_deref().unwrap().contains("bus fault"));
        assert_eq!(panel.rows[1].value, Some(FieldValue::Int(1)));
    }

    #[test]
    fn to_ndjson_line_contains_newline() {
        let panel = PanelVM::capture(&catalog(), &MemoryImage::full_address_space(), ["player_x"]);
        let line = panel.to_ndjson_line().unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(
            line,
            "{\"rows\":[{\"key\":\"player_x\",\"addr\":53773,\"enc\":\"u8\",\"value\":0,\"error\":null}]}\n"
        );
    }
}
