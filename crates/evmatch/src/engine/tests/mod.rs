mod common;

mod recommend;
mod scoring;
mod tco;
