//! Clusters command implementation

use crate::cli::ClustersArgs;
use crate::context::open_session;
use crate::output::OutputWriter;
use crate::output_types::{coordinates_label, ClusterRow, ClustersOutput};
use anyhow::Result;
use journeymap_core::config::{CliConfigOverrides, LayeredConfig};
use journeymap_geo::export::clusters_to_geojson;
use journeymap_geo::{clustering_threshold, should_cluster};

pub fn execute(args: ClustersArgs, mut config: LayeredConfig, output: &OutputWriter) -> Result<()> {
    config.update_from_cli(CliConfigOverrides { initial_zoom: args.zoom, ..Default::default() });
    let zoom = config.initial_zoom.value;

    let session = open_session(&config)?;
    let clusters = session.clusters(zoom);
    let threshold = should_cluster(zoom).then(|| clustering_threshold(zoom));

    if args.geojson {
        return output.data(&clusters_to_geojson(&clusters));
    }

    if output.is_json() {
        return output.result(ClustersOutput { zoom, threshold, clusters: &clusters });
    }

    output.section(format!("{} marker group(s) at zoom {:.1}", clusters.len(), zoom));
    match threshold {
        Some(threshold) => output.kv("Threshold", format!("{} degrees", threshold)),
        None => output.info("Zoomed in past clustering; every location is shown individually"),
    }

    let rows: Vec<ClusterRow> = clusters
        .iter()
        .map(|cluster| ClusterRow {
            id: cluster.id.clone(),
            members: cluster.len(),
            centre: coordinates_label(cluster.coordinates),
        })
        .collect();
    output.table(rows)
}
