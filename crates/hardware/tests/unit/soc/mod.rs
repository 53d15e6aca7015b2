//! Unit tests for the memory system.
