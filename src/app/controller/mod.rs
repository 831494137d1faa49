pub mod inspection_controller;

pub use inspection_controller::{
    Dialog, DialogLevel, InspectionController, Preview, PreviewSource,
};
