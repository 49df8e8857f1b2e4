mod tables;
mod charts;
mod format;

pub use tables::{
    format_inputs_table, print_inputs_table,
    format_result_summary, print_result_summary,
    format_ranges_table, print_ranges_table,
};
pub use charts::{
    Bar, BarChart, ChartColor, PieChart, PieSlice,
    format_bar_chart, print_bar_chart,
    format_pie_chart, print_pie_chart,
};
pub use format::{format_fraction, format_volume};
