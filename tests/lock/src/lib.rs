//! Shared fixtures for the lock tests and the cross-process fixture binaries.
//!
//! The binaries print exactly what these functions return, so an in-process
//! test and a spawned process can be compared line for line.
