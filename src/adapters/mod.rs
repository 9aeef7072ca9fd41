// Adapters layer: concrete implementations for external systems (YApi HTTP API, OS clipboard).

pub mod clipboard;
pub mod yapi;
