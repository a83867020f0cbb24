//! Input processing module
//! Handles file detection, record decoding, and input management

pub mod file_detector;
pub mod decoder;
pub mod manager;
