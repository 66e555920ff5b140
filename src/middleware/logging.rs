//! Logging middleware
//!
//! Provides request logging functionality.

use log::info;
use std::net::SocketAddr;

/// Log a client connection
pub fn log_connection(client_addr: &SocketAddr) {
    info!("Client connected: {}", client_addr);
}

/// Log a parsed request
pub fn log_request(client_addr: &SocketAddr, method: &str, path: &str) {
    info!("Client {} requested: {} {}", client_addr, method, path);
}

/// Log the response status for a request
pub fn log_response(client_addr: &SocketAddr, status: u16) {
    info!("Responded to {} with {}", client_addr, status);
}
