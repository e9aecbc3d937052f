use std::path::Path;

/// Location of the most recently persisted graph, relative to the working directory.
pub const LATEST_GRAPH_PATH: &str = "./latest_graph.pickle";

pub fn latest_graph_path() -> &'static Path {
    Path::new(LATEST_GRAPH_PATH)
}
