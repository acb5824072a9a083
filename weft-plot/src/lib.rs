//! Graph drawing for Weft flow networks.
//!
//! [`GraphPlotApp`] lays a [`FlowGraph`] out spatially and draws its
//! edges annotated with their weight attributes in an `egui` window.
//! Rendering only reads the graph handed to it; deriving that graph
//! (initial or solved) is the network engine's job.

pub mod layout;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoint, Points, Text};
use weft_core::FlowGraph;

/// A runnable egui application for drawing a flow graph.
pub struct GraphPlotApp {
    positions: Vec<[f64; 2]>,
    edges: Vec<(usize, usize, f64)>,
    edge_color: egui::Color32,
    node_radius: f32,
    figure_size: [f32; 2],
}

impl GraphPlotApp {
    /// Creates an app with nodes arranged on the unit circle.
    #[must_use]
    pub fn new(graph: &FlowGraph) -> Self {
        Self::with_positions(graph, layout::circular(graph.node_count()))
    }

    /// Creates an app with caller-supplied node positions.
    ///
    /// `positions[i]` places node `i`. Edges whose endpoints have no
    /// position are skipped.
    #[must_use]
    pub fn with_positions(graph: &FlowGraph, positions: Vec<[f64; 2]>) -> Self {
        Self {
            positions,
            edges: graph.edges().collect(),
            edge_color: egui::Color32::BLACK,
            node_radius: 4.0,
            figure_size: [800.0, 600.0],
        }
    }

    /// Sets the color used for edges and their weight labels.
    #[must_use]
    pub fn edge_color(mut self, color: egui::Color32) -> Self {
        self.edge_color = color;
        self
    }

    /// Sets the marker radius used for nodes.
    #[must_use]
    pub fn node_radius(mut self, radius: f32) -> Self {
        self.node_radius = radius;
        self
    }

    /// Sets the window size in points.
    #[must_use]
    pub fn figure_size(mut self, width: f32, height: f32) -> Self {
        self.figure_size = [width, height];
        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(self.figure_size),
            ..Default::default()
        };

        eframe::run_native(name, options, Box::new(|_cc| Ok(Box::new(self))))
    }
}

impl eframe::App for GraphPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("flow-graph").data_aspect(1.0).show(ui, |plot_ui| {
                for &(from, to, weight) in &self.edges {
                    let (Some(&a), Some(&b)) = (self.positions.get(from), self.positions.get(to))
                    else {
                        continue;
                    };

                    if from != to {
                        plot_ui.line(Line::new(vec![a, b]).color(self.edge_color));
                    }

                    // Weight labels sit at edge midpoints; a self-loop's
                    // label floats above its node.
                    let label_at = if from == to {
                        [a[0], a[1] + 0.15]
                    } else {
                        [(a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0]
                    };
                    plot_ui.text(
                        Text::new(PlotPoint::new(label_at[0], label_at[1]), format!("{weight:.3}"))
                            .color(self.edge_color),
                    );
                }

                plot_ui.points(Points::new(self.positions.clone()).radius(self.node_radius));

                for (node, &[x, y]) in self.positions.iter().enumerate() {
                    plot_ui.text(Text::new(PlotPoint::new(x, y + 0.08), format!("{node}")));
                }
            });
        });
    }
}
