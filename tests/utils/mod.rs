// Shared across several test binaries; not every binary uses every helper
#![allow(dead_code)]

pub mod factories;
pub mod fake_catalog;
pub mod stub_server;
