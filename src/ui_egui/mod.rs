mod app;

pub use app::{CountdownApp, MIN_ROOT_HEIGHT, MIN_ROOT_WIDTH};
