//! Progress display while a reply is pending

pub mod reporter;
