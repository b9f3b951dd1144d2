pub mod batch;
pub mod check;
pub mod concat;
pub mod run;
pub mod status;
