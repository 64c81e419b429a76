//! HTTP clients for the site API

pub mod transfer_api_client;

pub use transfer_api_client::TransferApiClient;
