//! A library to convert cameras for `gausplat`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod camera;
pub mod error;
pub mod export;
pub mod function;
pub mod load;
pub mod pose;
