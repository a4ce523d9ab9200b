use wasm_bindgen::prelude::*;

mod bodies;
mod demo;
use demo::Orrery;

helio_web::export_app!(Orrery, "orrery");
