pub mod ballistics;
pub mod controller;
pub mod error;
pub mod frame;
pub mod plot;
pub mod scene;
pub mod trail;
pub mod window;
pub mod world;
