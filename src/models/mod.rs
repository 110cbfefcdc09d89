// Models module
// Plain data types shared by the services and the UI

pub mod countdown;
pub mod settings;
