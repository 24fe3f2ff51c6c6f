//! Export line grammars.
//!
//! Pure functions over single lines, shared by the [`ChatParser`](crate::parser::ChatParser)
//! and the export renderer.

pub mod whatsapp;

pub use whatsapp::{
    Header, Meridiem, detect_date_order, is_media_omitted, split_header, split_sender,
};
