// Page logic runs natively only under `cargo test`; the browser adapter is wasm-only.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod anchors;
mod config;
mod dom;
mod error;
mod fade;
mod keyboard;
mod lazy_images;
mod menu;
mod scroll;
mod scroll_top;
mod styles;
mod tiles;
mod toc;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project runs in the browser. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
