//! Browser tests; run with `wasm-pack test --headless --chrome countdown-web`.
#![cfg(target_arch = "wasm32")]

mod countdown_tests;
