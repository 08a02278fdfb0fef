// CV upload pipeline: stage → extract → structured parse → match → suggest.

pub mod handlers;
pub mod parser;
pub mod staging;
