//! Core of the Lispy arithmetic language: values, reader, evaluator.
//!
//! Text goes through the pest grammar in [`parser`], the resulting tree is
//! turned into a [`values::Value`] by [`reader`], and [`evaluator`] reduces it.
//! [`api::Engine`] wires the three together for a single line of input.

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod reader;
pub mod values;
