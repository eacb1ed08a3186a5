pub mod api_utils;
pub mod components;
pub mod dom_contract;
pub mod icons;
pub mod state_cell;
pub mod transport;
