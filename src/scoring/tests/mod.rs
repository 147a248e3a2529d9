mod common;
mod engine;
mod matching;
