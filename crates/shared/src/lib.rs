//! Booking Shared - process bootstrap helpers

pub mod bootstrap;
