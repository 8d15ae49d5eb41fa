#![allow(dead_code)]

pub mod filetypes;
pub mod util;
