//! Train booking occupancy server.
//!
//! Registers trains on fixed routes, records booked tickets, and answers
//! occupancy questions: free seats between two stations, passengers
//! boarding at a station, the oldest traveller, and which trains call at a
//! station within a time window.

pub mod config;
pub mod domain;
pub mod occupancy;
pub mod registry;
pub mod web;
