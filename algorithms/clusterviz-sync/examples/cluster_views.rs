use std::collections::BTreeSet;

use clusterviz::{Table, CLUSTER_FIELD};
use clusterviz_datasets::generate;
use clusterviz_sync::{
    AxisTransition, ChartView, ClusterContext, ClusterParams, PartitionMap, PointColorFn,
    ViewError, ViewId, ViewRegistry,
};
use ndarray::array;
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing::{info, Level};

// A chart that prints what it would draw instead of drawing it
struct ConsoleChart {
    name: &'static str,
    data: Table,
    axes: Vec<String>,
    color: Option<PointColorFn>,
}

impl ConsoleChart {
    fn new(name: &'static str) -> Self {
        ConsoleChart {
            name,
            data: Table::default(),
            axes: Vec::new(),
            color: None,
        }
    }
}

impl ChartView for ConsoleChart {
    fn set_data(&mut self, data: &Table) -> Result<(), ViewError> {
        self.data = data.clone();
        Ok(())
    }

    fn render(&mut self, transition: AxisTransition) -> Result<(), ViewError> {
        let colors: BTreeSet<String> = match &self.color {
            Some(color) => self
                .data
                .iter()
                .filter_map(|record| color(record))
                .map(|color| color.to_string())
                .collect(),
            None => BTreeSet::new(),
        };
        info!(
            chart = self.name,
            ?transition,
            rows = self.data.nrows(),
            axes = ?self.axes,
            ?colors,
            "render"
        );
        Ok(())
    }

    fn create_axes(&mut self) -> Result<(), ViewError> {
        self.axes = self.data.field_names();
        Ok(())
    }

    fn set_color(&mut self, color: PointColorFn) -> Result<(), ViewError> {
        self.color = Some(color);
        Ok(())
    }

    fn hide_axis(&mut self, fields: &BTreeSet<String>) -> Result<(), ViewError> {
        self.axes.retain(|axis| !fields.contains(axis));
        Ok(())
    }
}

// Cluster three synthetic blobs and propagate the labels to a pair of linked charts.
fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let centroids = array![[0., 0., 5.], [8., 2., 5.], [4., 9., 0.]];
    let table = generate::blobs_table(50, &centroids, &["alpha", "beta", "gamma"], &mut rng);

    let mut views = ViewRegistry::new();
    let coords = views.register(ConsoleChart::new("parallel coordinates"));
    let scatter = views.register(ConsoleChart::new("scatter matrix"));

    // the scatter matrix never shows the blob each row was sampled from
    let partition: PartitionMap = vec![(scatter, vec![generate::ORIGIN_FIELD])]
        .into_iter()
        .collect();
    let mut ctx =
        ClusterContext::new(table, vec!["alpha", "beta", "gamma"]).with_partition(partition);

    let report = ClusterParams::new(3)
        .seed(42)
        .color_targets(vec![coords, scatter])
        .run(&mut ctx, &mut views)
        .expect("clustering failed");

    for (idx, (centroid, size)) in report
        .centroids
        .outer_iter()
        .zip(report.sizes.iter())
        .enumerate()
    {
        println!("cluster {}: {} rows around {}", idx, size, centroid);
    }
    println!(
        "first row labelled {}",
        ctx.dataset[0]
            .get(CLUSTER_FIELD)
            .map(ToString::to_string)
            .unwrap_or_default()
    );
    println!("final view states: {:?}", report.view_states);
    assert!(ctx.partition.is_hidden(ViewId(1), CLUSTER_FIELD));
}
