//! Browser persistence adapters.

pub mod background_image;
pub mod local_prefs;
