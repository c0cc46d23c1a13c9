//! End-to-end planning flows over the in-memory adapters.
//!
//! Tests are organized into modules by functionality:
//! - `allocation_flow_tests`: Dragging tasks and occurrences between cells
//! - `workload_flow_tests`: Weekly load reports over recurring work
//! - `import_flow_tests`: Bulk import feeding the workload report

mod planning {
    pub mod helpers;

    mod allocation_flow_tests;
    mod import_flow_tests;
    mod workload_flow_tests;
}
