//! HTTP and form front ends

pub mod form;
pub mod info;
pub mod predict;
