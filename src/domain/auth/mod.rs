pub mod credentials;
pub mod dto;
pub mod handler;
pub mod service;
