// Dashboard domain model
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const DEFAULT_DASHBOARD_NAME: &str = "Name This Dashboard";
pub const CLONE_SUFFIX: &str = " (clone)";
pub const EXPORT_FORMAT_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A saved dashboard as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cells: Vec<DashboardCell>,
    pub links: DashboardLinks,
}

/// Grid placement of one visualization plus a reference to its definition.
///
/// Visualization fields the client does not model are kept in `extra` so
/// they survive an export/import cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCell {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(rename = "ref", default)]
    pub cell_ref: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dashboard body without identity, as sent on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDraft {
    pub name: String,
    pub cells: Vec<DashboardCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMeta {
    #[serde(rename = "chronografVersion")]
    pub format_version: String,
}

/// Document written by an export and accepted by an import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFile {
    pub meta: ExportMeta,
    pub dashboard: Dashboard,
}

impl Dashboard {
    pub fn to_draft(&self) -> DashboardDraft {
        DashboardDraft {
            name: self.name.clone(),
            cells: self.cells.clone(),
        }
    }

    pub fn clone_draft(&self) -> DashboardDraft {
        DashboardDraft {
            name: format!("{}{}", self.name, CLONE_SUFFIX),
            ..self.to_draft()
        }
    }

    pub fn export_file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

impl DashboardFile {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            meta: ExportMeta {
                format_version: EXPORT_FORMAT_VERSION.to_string(),
            },
            dashboard,
        }
    }

    /// Serialize with tab indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Fields every cell gets unless the imported document sets them.
pub fn default_cell_fields() -> Map<String, Value> {
    let defaults = json!({
        "x": 0,
        "y": 0,
        "w": 4,
        "h": 4,
        "ref": "",
        "name": "Untitled Cell",
        "type": "line",
        "colors": [],
        "legend": {},
        "decimalPlaces": { "isEnforced": true, "digits": 2 },
        "timeFormat": "MM/DD/YYYY HH:mm:ss.SSS",
    });

    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

pub fn default_cell() -> DashboardCell {
    let mut fields = default_cell_fields();
    let mut take_u32 = |key: &str| {
        fields
            .remove(key)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or_default()
    };
    let (x, y, w, h) = (take_u32("x"), take_u32("y"), take_u32("w"), take_u32("h"));
    let cell_ref = fields
        .remove("ref")
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    DashboardCell {
        x,
        y,
        w,
        h,
        cell_ref,
        extra: fields,
    }
}

/// Draft used by the "create dashboard" action.
pub fn new_dashboard() -> DashboardDraft {
    DashboardDraft {
        name: DEFAULT_DASHBOARD_NAME.to_string(),
        cells: vec![default_cell()],
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, name: &str) -> Dashboard {
    Dashboard {
        id: id.to_string(),
        name: name.to_string(),
        cells: vec![DashboardCell {
            x: 0,
            y: 0,
            w: 6,
            h: 3,
            cell_ref: format!("/v2/cells/{id}-0"),
            extra: Map::new(),
        }],
        links: DashboardLinks {
            self_link: format!("/v2/dashboards/{id}"),
        },
    }
}
