//! # HarGraph - HAR traces to traffic-generator graphs
//!
//! This library converts a browser network capture (an HTTP Archive, or HAR,
//! file) into a directed graph that a traffic generator running inside a
//! network simulator can replay.
//!
//! ## Overview
//!
//! A page load is modelled as a series of *bursts*: groups of requests the
//! browser had in flight at the same time. Bursts are separated by *sync*
//! barriers, so every transfer of burst *i* must complete before any transfer
//! of burst *i + 1* starts. The replay loops: after the last burst the client
//! pauses and starts over.
//!
//! ## Architecture
//!
//! - `har`: HAR decoding into [`burst::TransferRecord`]s
//! - `burst`: the burst segmentation pass
//! - `graph`: graph sink trait, in-memory graph, builder and GraphML/GML writers
//! - `config` / `config_loader`: graph settings and their YAML loader
//! - `orchestrator`: runs decode, segment, build and write in order
//! - `utils`: duration parsing and KiB formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hargraph::burst::segment_trimmed;
//! use hargraph::config::{GraphConfig, ServerEndpoint};
//! use hargraph::graph::build;
//! use hargraph::har::load_trace;
//! use std::path::Path;
//!
//! let trace = load_trace(Path::new("page.har"))?;
//! let bursts = segment_trimmed(trace.records.iter().copied());
//! let endpoint = ServerEndpoint::parse("server1:443")?;
//! let graph = build(&bursts, &endpoint, &GraphConfig::default())?;
//! println!("{} nodes", graph.node_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Library modules return typed `thiserror` errors; the binary wraps them with
//! `color_eyre` context naming the stage that failed.

pub mod burst;
pub mod config;
pub mod config_loader;
pub mod graph;
pub mod har;
pub mod orchestrator;
pub mod utils;
