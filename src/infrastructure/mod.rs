pub mod answer;
pub mod observability;
