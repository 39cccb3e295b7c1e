//! Core library for the rvtools-csv2excel command line application.
//!
//! The library turns a directory of RVTools CSV exports into one workbook that
//! looks like the native RVTools Excel export. Responsibilities are kept
//! narrow: file discovery lives in [`rvtools::tools::discover`], sheet naming
//! and ordering in [`rvtools::tools::naming`] and [`rvtools::tools::order`],
//! the tabular representation in [`rvtools::tools::model`], IO adapters under
//! [`rvtools::tools::io`], and the orchestration in [`rvtools::tools::convert`].

pub mod rvtools;

pub use rvtools::tools::{
    ConvertOptions, Result, ToolError, config, convert, discover, error, io, metadata, model,
    naming, order, style,
};
