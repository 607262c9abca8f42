mod probe_report;

pub use probe_report::ProbeReport;
