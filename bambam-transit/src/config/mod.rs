mod transit_graph_configuration;

pub use transit_graph_configuration::TransitGraphConfiguration;
