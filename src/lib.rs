// ABOUTME: Library module for pgvector-admin
// ABOUTME: Exports all core functionality for use in binary and tests

pub mod commands;
pub mod config;
pub mod postgres;
