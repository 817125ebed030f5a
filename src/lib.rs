//! Survey Core - Polymorphic question/answer type system for surveys
//!
//! This crate models survey questions and answers as tagged variants and
//! provides the tables that map each question type to its wire constructor,
//! its answer handler and its UI component.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
