pub mod graph;
pub mod cust_error;
pub mod vc_instance;
pub mod generators;
pub mod kernelization;
pub mod bounded_search;
pub mod min_search;
