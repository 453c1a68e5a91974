use journeymap_core::models::FilterType;
use journeymap_geo::Cluster;
use journeymap_map::surfaces::{MarkerStyle, MarkerView};
use serde::Serialize;
use tabled::Tabled;

/// Output for the locations command
#[derive(Debug, Serialize)]
pub struct LocationsOutput {
    pub filter: FilterType,
    pub count: usize,
    pub locations: Vec<MarkerView>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct LocationRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "City")]
    pub city: String,
    #[tabled(rename = "Country")]
    pub country: String,
    #[tabled(rename = "Lng, Lat")]
    pub coordinates: String,
    #[tabled(rename = "Entries")]
    pub entries: usize,
    #[tabled(rename = "Types")]
    pub types: String,
    #[tabled(rename = "Marker")]
    pub marker: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct TimelineRowOutput {
    #[tabled(rename = "")]
    pub mark: &'static str,
    #[tabled(rename = "Start")]
    pub start: String,
    #[tabled(rename = "Type")]
    pub entry_type: String,
    #[tabled(rename = "Institution")]
    pub institution: String,
    #[tabled(rename = "Role")]
    pub role: String,
    #[tabled(rename = "Location")]
    pub location: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
}

/// Output for the clusters command
#[derive(Debug, Serialize)]
pub struct ClustersOutput<'a> {
    pub zoom: f64,
    pub threshold: Option<f64>,
    pub clusters: &'a [Cluster<'a>],
}

#[derive(Debug, Serialize, Tabled)]
pub struct ClusterRow {
    #[tabled(rename = "Cluster")]
    pub id: String,
    #[tabled(rename = "Members")]
    pub members: usize,
    #[tabled(rename = "Centre (Lng, Lat)")]
    pub centre: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct CategoryRow {
    #[tabled(rename = "Category")]
    pub category: &'static str,
    #[tabled(rename = "Entries")]
    pub count: usize,
    #[tabled(rename = "Share")]
    pub share: String,
}

/// Output for the validate command
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub path: String,
    pub valid: bool,
    pub locations: usize,
    pub entries: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub fn marker_label(style: MarkerStyle) -> String {
    match style {
        MarkerStyle::Single(entry_type) => entry_type.to_string(),
        MarkerStyle::Mixed => "mixed".to_string(),
        MarkerStyle::Plain => "plain".to_string(),
    }
}

pub fn coordinates_label(coordinates: [f64; 2]) -> String {
    format!("{:.4}, {:.4}", coordinates[0], coordinates[1])
}
